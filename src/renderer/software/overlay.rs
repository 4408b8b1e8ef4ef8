use glam::Vec2;

use crate::{
    renderer::{Rgba, Scene, software::Software},
    world::pack_rgb,
};

pub(super) const WALL_COLOR: Rgba = pack_rgb(200, 200, 200);
pub(super) const OPEN_COLOR: Rgba = pack_rgb(50, 50, 50);
pub(super) const MARKER_COLOR: Rgba = pack_rgb(255, 0, 0);
const MARKER_RADIUS: i32 = 3;

/// Fixed-scale top-down projection of the grid into screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Minimap {
    tile: usize,
    scale: usize,
}

impl Minimap {
    pub fn new(tile: f32, scale: usize) -> Self {
        Self {
            tile: tile as usize,
            scale: scale.max(1),
        }
    }

    /// `(x, y, side)` of the square covering cell `(ix, iy)`.
    #[inline]
    pub fn cell_rect(&self, ix: usize, iy: usize) -> (usize, usize, usize) {
        (
            ix * self.tile / self.scale,
            iy * self.tile / self.scale,
            self.tile / self.scale,
        )
    }

    /// Screen position of the player marker.
    #[inline]
    pub fn marker(&self, pos: Vec2) -> (i32, i32) {
        let s = self.scale as f32;
        ((pos.x / s).floor() as i32, (pos.y / s).floor() as i32)
    }
}

impl Software {
    pub(super) fn draw_minimap(&mut self, scene: &Scene<'_>) {
        let map = Minimap::new(scene.grid.tile(), scene.config.minimap_scale);

        for (ix, iy, cell) in scene.grid.iter() {
            let (x, y, side) = map.cell_rect(ix, iy);
            let col = if cell.is_wall() { WALL_COLOR } else { OPEN_COLOR };
            for row in y..y + side {
                self.fill_run(x, row, side, col);
            }
        }

        let (cx, cy) = map.marker(scene.player.pos);
        let r = MARKER_RADIUS;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.put(cx + dx, cy + dy, MARKER_COLOR);
                }
            }
        }
    }
}
