//! Wall casting geometry.
//!
//! Every ray runs two independent grid-line searches:
//!
//! * **vertical** – hops from one `x = k·tile` line to the next,
//! * **horizontal** – hops from one `y = k·tile` line to the next,
//!
//! and the nearer of the two hits wins.  Both searches are bounded by a fixed
//! number of one-tile steps; a search that runs out of steps reports whatever
//! crossing it reached last.

use glam::Vec2;

use crate::{
    config::Config,
    world::{Grid, Player},
};

/// Smallest |cos| / |sin| a ray direction may have before dividing by it.
pub const RAY_EPSILON: f32 = 1e-6;

/// Keeps `k / depth` finite for a viewer touching a wall.
const DEPTH_BIAS: f32 = 1e-4;

/// Direction a search walks along its axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

impl Step {
    #[inline]
    fn of(component: f32) -> Self {
        if component < 0.0 {
            Step::Backward
        } else {
            Step::Forward
        }
    }

    #[inline]
    fn delta(self) -> i64 {
        match self {
            Step::Forward => 1,
            Step::Backward => -1,
        }
    }

    /// Index of the first grid line ahead of coordinate cell `cell`.
    #[inline]
    fn first_line(self, cell: i64) -> i64 {
        match self {
            Step::Forward => cell + 1,
            Step::Backward => cell,
        }
    }

    /// Cell on the far side of grid line `line`.
    #[inline]
    fn cell_beyond(self, line: i64) -> i64 {
        match self {
            Step::Forward => line,
            Step::Backward => line - 1,
        }
    }
}

/// Which search produced the winning hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Crossed a vertical grid line: an east/west-facing wall.
    Vertical,
    /// Crossed a horizontal grid line: a north/south-facing wall.
    Horizontal,
}

impl Side {
    /// Brightness weight of this face orientation.
    #[inline]
    pub fn weight(self, side_shade: f32) -> f32 {
        match self {
            Side::Vertical => 1.0,
            Side::Horizontal => side_shade,
        }
    }
}

/// Result of one grid-line search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Euclidean distance along the ray to the crossing.
    pub depth: f32,
    /// Position along the wall face, `0 ≤ offset < tile`.
    pub offset: f32,
}

/// Per-ray result, valid for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaySample {
    pub angle: f32,
    /// Perpendicular (fish-eye corrected) distance.
    pub depth: f32,
    pub offset: f32,
    pub side: Side,
}

/// Replace a near-zero direction component by a signed epsilon.
#[inline]
fn guard(v: f32) -> f32 {
    if v.abs() >= RAY_EPSILON {
        v
    } else if v.is_sign_negative() {
        -RAY_EPSILON
    } else {
        RAY_EPSILON
    }
}

#[inline]
fn wrap_offset(v: f32, tile: f32) -> f32 {
    let off = v.rem_euclid(tile);
    // rem_euclid may round up to exactly `tile` for tiny negative inputs
    if off >= 0.0 && off < tile { off } else { 0.0 }
}

/// Index of the cell containing `v`: `cell * tile <= v < (cell + 1) * tile`
/// holds in f32, even where `v / tile` rounds onto a grid line.
#[inline]
fn cell_of(v: f32, tile: f32) -> i64 {
    let c = (v / tile).floor() as i64;
    if c as f32 * tile > v {
        c - 1
    } else if (c + 1) as f32 * tile <= v {
        c + 1
    } else {
        c
    }
}

#[inline]
fn cell_index(v: f32, tile: f32) -> Option<i64> {
    v.is_finite().then(|| cell_of(v, tile))
}

/// Walk vertical grid lines (`x = k·tile`) until a wall cell lies beyond one.
pub fn vertical_hit(grid: &Grid, origin: Vec2, angle: f32, max_steps: usize) -> Hit {
    let tile = grid.tile();
    let (sin_a, cos_a) = angle.sin_cos();
    let cos_a = guard(cos_a);
    let step = Step::of(cos_a);

    let mut line = step.first_line(cell_of(origin.x, tile));
    let mut x = line as f32 * tile;
    let mut depth = (x - origin.x) / cos_a;
    let mut y = origin.y + depth * sin_a;

    for _ in 0..max_steps {
        let solid = match cell_index(y, tile) {
            Some(row) => grid.cell(step.cell_beyond(line), row).is_wall(),
            None => true,
        };
        if solid {
            break;
        }
        line += step.delta();
        x = line as f32 * tile;
        depth = (x - origin.x) / cos_a;
        y = origin.y + depth * sin_a;
    }

    Hit {
        depth,
        offset: wrap_offset(y, tile),
    }
}

/// Walk horizontal grid lines (`y = k·tile`) until a wall cell lies beyond one.
pub fn horizontal_hit(grid: &Grid, origin: Vec2, angle: f32, max_steps: usize) -> Hit {
    let tile = grid.tile();
    let (sin_a, cos_a) = angle.sin_cos();
    let sin_a = guard(sin_a);
    let step = Step::of(sin_a);

    let mut line = step.first_line(cell_of(origin.y, tile));
    let mut y = line as f32 * tile;
    let mut depth = (y - origin.y) / sin_a;
    let mut x = origin.x + depth * cos_a;

    for _ in 0..max_steps {
        let solid = match cell_index(x, tile) {
            Some(col) => grid.cell(col, step.cell_beyond(line)).is_wall(),
            None => true,
        };
        if solid {
            break;
        }
        line += step.delta();
        y = line as f32 * tile;
        depth = (y - origin.y) / sin_a;
        x = origin.x + depth * cos_a;
    }

    Hit {
        depth,
        offset: wrap_offset(x, tile),
    }
}

/// Pick the nearer of the two searches; equal depths go to the vertical hit.
#[inline]
pub fn merge(v: Hit, h: Hit) -> (Hit, Side) {
    if v.depth <= h.depth {
        (v, Side::Vertical)
    } else {
        (h, Side::Horizontal)
    }
}

/// Cast one ray at `angle` for a viewer facing `heading`, each search
/// limited to `max_steps` one-tile hops.
pub fn cast_ray(grid: &Grid, origin: Vec2, angle: f32, heading: f32, max_steps: usize) -> RaySample {
    let v = vertical_hit(grid, origin, angle, max_steps);
    let h = horizontal_hit(grid, origin, angle, max_steps);
    let (hit, side) = merge(v, h);

    RaySample {
        angle,
        depth: hit.depth * (angle - heading).cos(),
        offset: hit.offset,
        side,
    }
}

/// Cast the whole fan for `player`, replacing the contents of `out`.
pub fn cast_fan(grid: &Grid, player: &Player, cfg: &Config, out: &mut Vec<RaySample>) {
    out.clear();
    out.extend(
        cfg.ray_fan(player.heading())
            .map(|a| cast_ray(grid, player.pos, a, player.heading(), cfg.max_steps())),
    );
}

/*──────────────────────── projection ─────────────────────────────────*/

/// Projected wall height for a corrected `depth`, clamped to
/// `cfg.max_column_height()`.
#[inline]
pub fn column_height(depth: f32, cfg: &Config) -> f32 {
    (cfg.projection_coeff() / (depth + DEPTH_BIAS))
        .max(0.0)
        .min(cfg.max_column_height())
}

/// Brightness multiplier in `min_light ..= 255`.
#[inline]
pub fn wall_light(side: Side, depth: f32, cfg: &Config) -> u8 {
    let weight = side.weight(cfg.side_shade);
    let raw = 255.0 * weight / (1.0 + depth * depth * cfg.light_falloff);
    (raw as i32).clamp(cfg.min_light as i32, 255) as u8
}

/// Texture column for a face offset.
#[inline]
pub fn texture_column(offset: f32, tile: f32, tex_w: usize) -> usize {
    let u = (offset / tile * tex_w as f32) as i64;
    u.clamp(0, tex_w as i64 - 1) as usize
}

/// One screen strip, already clipped against the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallColumn {
    /// Left screen column and strip width.
    pub x: usize,
    pub width: usize,
    /// First visible screen row.
    pub top: usize,
    /// Visible rows starting at `top`.
    pub rows: usize,
    /// Rows of the scaled column trimmed off above the screen.
    pub skip: usize,
    /// Full (unclipped) scaled column height.
    pub height: usize,
    pub tex_x: usize,
    pub light: u8,
}

impl WallColumn {
    /// Texture row sampled by visible row `r` (`0 .. rows`).
    #[inline]
    pub fn tex_row(&self, r: usize, tex_h: usize) -> usize {
        ((self.skip + r) * tex_h / self.height.max(1)).min(tex_h - 1)
    }
}

/// Turn ray `index`'s sample into its on-screen strip.
pub fn project_column(
    index: usize,
    sample: &RaySample,
    cfg: &Config,
    tile: f32,
    tex_w: usize,
) -> WallColumn {
    let height = column_height(sample.depth, cfg) as i64;
    let screen_h = cfg.height as i64;
    let top = cfg.horizon() as i64 - height / 2;

    let (top, rows, skip) = if top < 0 {
        (0, screen_h.min(height + top), -top)
    } else {
        (top, height.min(screen_h - top), 0)
    };

    let strip = cfg.strip_width();
    WallColumn {
        x: index * strip,
        width: strip,
        top: top as usize,
        rows: rows.max(0) as usize,
        skip: skip as usize,
        height: height as usize,
        tex_x: texture_column(sample.offset, tile, tex_w),
        light: wall_light(sample.side, sample.depth, cfg),
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
