use std::f32::consts::TAU;

use crate::renderer::{Scene, software::Software};

/// First panorama column visible for `heading`.
///
/// A full turn scrolls the panorama exactly once; turning right (positive
/// heading) scrolls it left.
#[inline]
pub fn sky_offset(heading: f32, sky_w: usize) -> usize {
    let shift = (-heading / TAU * sky_w as f32) as i64;
    shift.rem_euclid(sky_w.max(1) as i64) as usize
}

impl Software {
    /// Fill everything above the horizon from the panorama, wrapping
    /// horizontally and stretching its rows over the upper half.
    pub(super) fn draw_sky(&mut self, scene: &Scene<'_>) {
        let sky = &scene.textures.sky;
        let horizon = scene.config.horizon().min(self.height);
        if horizon == 0 {
            return;
        }
        let offset = sky_offset(scene.player.heading(), sky.w);

        for y in 0..horizon {
            let src = &sky.pixels[(y * sky.h / horizon) * sky.w..][..sky.w];
            let row = &mut self.scratch[y * self.width..][..self.width];
            for (x, px) in row.iter_mut().enumerate() {
                *px = src[(offset + x) % sky.w];
            }
        }
    }
}
