//! Floor casting geometry.
//!
//! A screen row `y` below the horizon sees the floor at a fixed distance
//!
//! ```text
//! row_distance(y) = tile * projection_distance / (y - height/2)
//! ```
//!
//! and every ray of the fan samples the floor at that distance along its own
//! direction.  Rows approach infinity towards the horizon, so the horizon row
//! itself is never cast.

use std::ops::Range;

use glam::Vec2;

use crate::config::Config;

/// Screen rows the floor pass visits: strictly below the horizon.
#[inline]
pub fn floor_rows(cfg: &Config) -> Range<usize> {
    (cfg.horizon() + 1)..cfg.height
}

/// World distance seen by screen row `y`; `None` at or above the horizon.
#[inline]
pub fn row_distance(y: usize, tile: f32, cfg: &Config) -> Option<f32> {
    let p = y as f32 - cfg.height as f32 * 0.5;
    (p > 0.0).then(|| tile * cfg.projection_distance() / p)
}

/// World-space point at `distance` along the unit direction `dir`.
#[inline]
pub fn floor_point(origin: Vec2, dir: Vec2, distance: f32) -> Vec2 {
    origin + dir * distance
}

/// Texel coordinates of a world point: truncate, then wrap into the texture.
#[inline]
pub fn floor_texel(world: Vec2, tex_w: usize, tex_h: usize) -> (usize, usize) {
    let u = (world.x as i64).rem_euclid(tex_w as i64) as usize;
    let v = (world.y as i64).rem_euclid(tex_h as i64) as usize;
    (u, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizon_row_is_never_cast() {
        let cfg = Config::default();
        let rows = floor_rows(&cfg);
        assert_eq!(rows.start, cfg.height / 2 + 1);
        assert_eq!(rows.end, cfg.height);
        assert!(!rows.contains(&cfg.horizon()));
        assert_eq!(row_distance(cfg.horizon(), 64.0, &cfg), None);
        assert_eq!(row_distance(10, 64.0, &cfg), None);
        for y in rows {
            let d = row_distance(y, 64.0, &cfg).unwrap();
            assert!(d.is_finite() && d > 0.0);
        }
    }

    #[test]
    fn odd_height_starts_below_fractional_horizon() {
        let cfg = Config {
            height: 481,
            ..Config::default()
        };
        // horizon sits at 240.5; row 241 is the first one cast
        assert_eq!(floor_rows(&cfg).start, 241);
        assert!(row_distance(240, 64.0, &cfg).is_none());
        assert!(row_distance(241, 64.0, &cfg).is_some());
    }

    #[test]
    fn rows_near_horizon_are_farther() {
        let cfg = Config::default();
        let near = row_distance(cfg.height - 1, 64.0, &cfg).unwrap();
        let far = row_distance(cfg.horizon() + 1, 64.0, &cfg).unwrap();
        assert!(far > near);
        assert!((far - 64.0 * cfg.projection_distance()).abs() < 1e-2);
    }

    #[test]
    fn texels_wrap_negative_coordinates() {
        assert_eq!(floor_texel(Vec2::new(65.7, 3.2), 64, 64), (1, 3));
        assert_eq!(floor_texel(Vec2::new(-1.5, -64.0), 64, 64), (63, 0));
        assert_eq!(floor_texel(Vec2::new(130.0, 700.0), 64, 32), (2, 28));
    }

    #[test]
    fn floor_point_walks_along_direction() {
        let p = floor_point(Vec2::new(10.0, 20.0), Vec2::from_angle(0.0), 5.0);
        assert!((p - Vec2::new(15.0, 20.0)).length() < 1e-5);
        let dir = Vec2::from_angle(std::f32::consts::FRAC_PI_2);
        let q = floor_point(Vec2::ZERO, dir, 2.0);
        assert!((q - Vec2::new(0.0, 2.0)).length() < 1e-5);
    }
}
