use glam::Vec2;

use crate::{
    engine::planes::{floor_point, floor_rows, floor_texel, row_distance},
    renderer::{Scene, software::Software},
};

impl Software {
    /// Floor pass: one world distance per scan-line, one sample per ray.
    pub(super) fn draw_floor(&mut self, scene: &Scene<'_>) {
        let cfg = scene.config;
        let tex = &scene.textures.floor;
        let tile = scene.grid.tile();
        let strip = cfg.strip_width();
        let origin = scene.player.pos;

        // same fan as the wall pass; directions are constant down the screen
        let dirs: Vec<Vec2> = cfg
            .ray_fan(scene.player.heading())
            .map(Vec2::from_angle)
            .collect();

        for y in floor_rows(cfg) {
            if y >= self.height {
                break;
            }
            let Some(dist) = row_distance(y, tile, cfg) else {
                continue;
            };
            for (i, &dir) in dirs.iter().enumerate() {
                let (u, v) = floor_texel(floor_point(origin, dir, dist), tex.w, tex.h);
                self.fill_run(i * strip, y, strip, tex.texel(u, v));
            }
        }
    }
}
