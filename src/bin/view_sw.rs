//! view_sw - interactive software ray-caster.
//!
//! USAGE:
//! ```bash
//! cargo run --release --bin view_sw -- --map level.txt --wall brick.ppm
//! ```
//!
//! Arrows turn and move, W/S move, M toggles the minimap, Esc quits.

use anyhow::{Context, bail};
use clap::Parser;
use glam::Vec2;
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use std::{
    fs,
    path::PathBuf,
    time::{Duration, Instant},
};

use texray::{
    Config,
    assets::TexturePaths,
    renderer::{RendererExt, Scene, Software},
    sim::{Controls, InputCmd, TicRunner},
    world::{Grid, Player, TextureSet},
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Grid file: rows of 0/1, 1 = wall (built-in map when omitted)
    #[arg(long, value_name = "FILE")]
    map: Option<PathBuf>,

    /// Wall texture (binary PPM)
    #[arg(long, value_name = "FILE")]
    wall: Option<PathBuf>,

    /// Floor texture (binary PPM)
    #[arg(long, value_name = "FILE")]
    floor: Option<PathBuf>,

    /// Sky panorama (binary PPM)
    #[arg(long, value_name = "FILE")]
    sky: Option<PathBuf>,

    #[arg(long, default_value_t = 640)]
    width: usize,

    #[arg(long, default_value_t = 480)]
    height: usize,

    /// Number of rays cast per frame
    #[arg(long, default_value_t = 120)]
    rays: usize,

    /// Frame and simulation rate
    #[arg(long, default_value_t = 60)]
    fps: usize,

    /// Start position in world units
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    spawn: Option<Vec<f32>>,

    /// Start with the minimap hidden
    #[arg(long)]
    no_minimap: bool,
}

fn load_grid(opts: &Opts, tile: f32) -> anyhow::Result<Grid> {
    let Some(path) = &opts.map else {
        return Ok(Grid::default_map(tile));
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading map {}", path.display()))?;
    Grid::parse(&text, tile).with_context(|| format!("parsing map {}", path.display()))
}

fn held_controls(win: &Window) -> Controls {
    let mut keys = Controls::empty();
    keys.set(Controls::TURN_LEFT, win.is_key_down(Key::Left));
    keys.set(Controls::TURN_RIGHT, win.is_key_down(Key::Right));
    keys.set(
        Controls::FORWARD,
        win.is_key_down(Key::Up) || win.is_key_down(Key::W),
    );
    keys.set(
        Controls::BACKWARD,
        win.is_key_down(Key::Down) || win.is_key_down(Key::S),
    );
    keys
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();

    let cfg = Config {
        width: opts.width,
        height: opts.height,
        num_rays: opts.rays,
        target_fps: opts.fps,
        ..Config::default()
    };
    cfg.validate().context("invalid display settings")?;

    let grid = load_grid(&opts, cfg.tile)?;

    let mut player = match opts.spawn.as_deref() {
        Some(&[x, y]) => Player::new(Vec2::new(x, y), 0.0),
        _ => Player::default(),
    };
    if grid.is_wall(player.pos.x, player.pos.y) {
        bail!("spawn point ({}, {}) is inside a wall", player.pos.x, player.pos.y);
    }

    let paths = TexturePaths {
        wall: opts.wall.clone(),
        floor: opts.floor.clone(),
        sky: opts.sky.clone(),
    };
    let textures = TextureSet::load(&paths, &cfg);

    log::info!(
        "map {}x{} cells, {}x{} screen, {} rays ({} px strips), {} fps",
        grid.width(),
        grid.height(),
        cfg.width,
        cfg.height,
        cfg.num_rays,
        cfg.strip_width(),
        cfg.target_fps
    );

    let mut renderer = Software::default();
    let mut sim = TicRunner::new(cfg.target_fps);
    let mut show_minimap = !opts.no_minimap;

    let mut win = Window::new("TexRay", cfg.width, cfg.height, WindowOptions::default())?;
    win.set_target_fps(cfg.target_fps);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        if win.is_key_pressed(Key::M, KeyRepeat::No) {
            show_minimap = !show_minimap;
        }
        let cmd = InputCmd::from_controls(held_controls(&win));
        sim.pump(&mut player, &grid, cmd, &cfg);

        let t0 = Instant::now();
        let scene = Scene {
            grid: &grid,
            player: &player,
            textures: &textures,
            config: &cfg,
            minimap: show_minimap,
        };
        let mut presented = Ok(());
        renderer.draw_frame(&scene, |fb, w, h| {
            acc_time += t0.elapsed();
            acc_frames += 1;
            presented = win.update_with_buffer(fb, w, h);
        });
        presented.context("presenting frame")?;

        if last_print.elapsed() >= Duration::from_secs(3) && acc_frames > 0 {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            log::info!(
                "avg render: {:.2} ms  ({:.1} FPS), {} tics",
                avg_ms,
                1000.0 / avg_ms,
                sim.tics()
            );
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    log::info!("bye after {} tics", sim.tics());
    Ok(())
}
