//! Render and simulation tunables.
//!
//! Every derived quantity (projection distance, strip width, …) is computed
//! from these fields on demand so a resized [`Config`] can never go stale.

use std::f32::consts::{FRAC_PI_3, PI};

use thiserror::Error;

use crate::engine::rays::RayFan;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("screen size {0}x{1} is empty")]
    EmptyScreen(usize, usize),

    #[error("ray count must be at least 1")]
    NoRays,

    #[error("{rays} rays do not fit into {width} screen columns")]
    TooManyRays { rays: usize, width: usize },

    #[error("field of view {0} rad must lie in (0, PI)")]
    BadFov(f32),

    #[error("tile size {0} must be positive")]
    BadTile(f32),

    #[error("texture size must be at least 1 pixel")]
    BadTextureSize,

    #[error("max depth {depth} is shorter than one tile ({tile})")]
    ShallowDepth { depth: f32, tile: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// Horizontal field of view (radians).
    pub fov: f32,
    pub num_rays: usize,
    /// Search budget of each grid-line traversal, in world units.
    pub max_depth: f32,
    /// Edge length of one grid cell in world units.
    pub tile: f32,
    /// Wall and floor textures are resampled to this square size.
    pub texture_size: usize,
    /// Multiplier folded into the projection coefficient.
    pub wall_scale: f32,
    /// Brightness weight of faces hit by the horizontal-line search.
    pub side_shade: f32,
    pub light_falloff: f32,
    pub min_light: u8,
    /// World units per tic.
    pub move_speed: f32,
    /// Radians per tic.
    pub turn_speed: f32,
    pub collision_buffer: f32,
    pub minimap_scale: usize,
    pub target_fps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fov: FRAC_PI_3,
            num_rays: 120,
            max_depth: 800.0,
            tile: 64.0,
            texture_size: 64,
            wall_scale: 120.0,
            side_shade: 0.7,
            light_falloff: 0.0001,
            min_light: 30,
            move_speed: 3.0,
            turn_speed: 0.04,
            collision_buffer: 5.0,
            minimap_scale: 5,
            target_fps: 60,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height < 2 {
            return Err(ConfigError::EmptyScreen(self.width, self.height));
        }
        if self.num_rays == 0 {
            return Err(ConfigError::NoRays);
        }
        if self.num_rays > self.width {
            return Err(ConfigError::TooManyRays {
                rays: self.num_rays,
                width: self.width,
            });
        }
        if !(self.fov > 0.0 && self.fov < PI) {
            return Err(ConfigError::BadFov(self.fov));
        }
        if !(self.tile > 0.0) {
            return Err(ConfigError::BadTile(self.tile));
        }
        if self.texture_size == 0 {
            return Err(ConfigError::BadTextureSize);
        }
        if !(self.max_depth >= self.tile) {
            return Err(ConfigError::ShallowDepth {
                depth: self.max_depth,
                tile: self.tile,
            });
        }
        Ok(())
    }

    /*──────────────────────── derived values ────────────────────────*/

    #[inline]
    pub fn half_fov(&self) -> f32 {
        self.fov * 0.5
    }

    /// Angle between two neighbouring rays.
    #[inline]
    pub fn delta_angle(&self) -> f32 {
        self.fov / self.num_rays.max(1) as f32
    }

    /// Distance of the projection plane measured in *ray* columns.
    ///
    /// ```text
    /// dist = num_rays / (2 * tan(fov/2))
    /// ```
    #[inline]
    pub fn projection_distance(&self) -> f32 {
        self.num_rays as f32 / (2.0 * self.half_fov().tan())
    }

    /// World distance → projected column height.
    #[inline]
    pub fn projection_coeff(&self) -> f32 {
        self.wall_scale * self.projection_distance()
    }

    /// Screen columns covered by one ray.
    #[inline]
    pub fn strip_width(&self) -> usize {
        self.width / self.num_rays
    }

    #[inline]
    pub fn max_column_height(&self) -> f32 {
        (self.height * 2) as f32
    }

    /// Upper bound on iterations of one grid-line search.
    #[inline]
    pub fn max_steps(&self) -> usize {
        (self.max_depth / self.tile).ceil() as usize
    }

    #[inline]
    pub fn horizon(&self) -> usize {
        self.height / 2
    }

    /// Angles of every ray for a viewer facing `heading`.
    #[inline]
    pub fn ray_fan(&self, heading: f32) -> RayFan {
        RayFan::new(heading - self.half_fov(), self.delta_angle(), self.num_rays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_derivations() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.strip_width(), 5);
        assert_eq!(cfg.horizon(), 240);
        assert_eq!(cfg.max_steps(), 13);
        assert!((cfg.projection_distance() - 103.923).abs() < 1e-2);
        assert!((cfg.projection_coeff() - 12_470.77).abs() < 1.0);
        assert!((cfg.max_column_height() - 960.0).abs() < f32::EPSILON);
    }

    #[test]
    fn fan_starts_half_fov_left_of_heading() {
        let cfg = Config::default();
        let fan = cfg.ray_fan(1.0);
        assert_eq!(fan.len(), cfg.num_rays);
        assert!((fan.angle(0) - (1.0 - cfg.half_fov())).abs() < 1e-6);
        assert!((fan.angle(1) - fan.angle(0) - cfg.delta_angle()).abs() < 1e-6);
    }

    #[test]
    fn rejects_more_rays_than_columns() {
        let cfg = Config {
            width: 100,
            num_rays: 101,
            ..Config::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::TooManyRays {
                rays: 101,
                width: 100
            })
        );
    }

    #[test]
    fn rejects_degenerate_fov_and_depth() {
        let flat = Config {
            fov: 0.0,
            ..Config::default()
        };
        assert_eq!(flat.validate(), Err(ConfigError::BadFov(0.0)));

        let shallow = Config {
            max_depth: 10.0,
            ..Config::default()
        };
        assert!(matches!(
            shallow.validate(),
            Err(ConfigError::ShallowDepth { .. })
        ));
    }
}
