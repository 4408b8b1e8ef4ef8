//! Texture loading with procedural fallbacks.

mod ppm;
mod procedural;

pub use ppm::{decode_ppm, load_ppm};
pub use procedural::{brick_wall, sky_panorama, stone_floor};

use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::{
    config::Config,
    world::{Texture, TextureError, TextureSet},
};

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("not a binary PPM (P6) image")]
    BadMagic,

    #[error("malformed PPM header: bad {0}")]
    BadHeader(&'static str),

    #[error("pixel data truncated: need {need} bytes, got {got}")]
    Truncated { need: usize, got: usize },

    #[error("image has zero size ({0}x{1})")]
    EmptyImage(usize, usize),

    #[error("decoded pixels rejected: {0}")]
    Texture(#[from] TextureError),
}

/// Optional image files for each surface; `None` means procedural.
#[derive(Clone, Debug, Default)]
pub struct TexturePaths {
    pub wall: Option<PathBuf>,
    pub floor: Option<PathBuf>,
    pub sky: Option<PathBuf>,
}

/// Load `path` if given, otherwise (or on failure) build the fallback.
fn load_or(kind: &str, path: Option<&Path>, fallback: impl FnOnce() -> Texture) -> Texture {
    let Some(path) = path else {
        return fallback();
    };
    match load_ppm(path) {
        Ok(tex) => {
            log::debug!("{kind} texture {} ({}x{})", path.display(), tex.w, tex.h);
            tex
        }
        Err(e) => {
            log::warn!("{kind} texture {}: {e}; using built-in", path.display());
            fallback()
        }
    }
}

impl TextureSet {
    /// Every surface from disk or generated.  Wall and floor are resampled
    /// to `texture_size`; the sky keeps its own size.
    pub fn load(paths: &TexturePaths, cfg: &Config) -> Self {
        let n = cfg.texture_size;
        let wall = load_or("wall", paths.wall.as_deref(), || brick_wall(n));
        let floor = load_or("floor", paths.floor.as_deref(), || stone_floor(n));
        let sky = load_or("sky", paths.sky.as_deref(), || {
            sky_panorama(cfg.width * 2, cfg.horizon())
        });
        Self {
            wall: wall.rescaled(n, n),
            floor: floor.rescaled(n, n),
            sky,
        }
    }

    /// All three surfaces generated.
    pub fn procedural(cfg: &Config) -> Self {
        Self::load(&TexturePaths::default(), cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, process};

    #[test]
    fn defaults_are_procedural() {
        let cfg = Config::default();
        let set = TextureSet::procedural(&cfg);
        assert_eq!((set.wall.w, set.wall.h), (64, 64));
        assert_eq!((set.floor.w, set.floor.h), (64, 64));
        assert_eq!((set.sky.w, set.sky.h), (1280, 240));
        assert_eq!(set.wall, brick_wall(64));
    }

    #[test]
    fn texture_errors_convert() {
        let err = AssetError::from(TextureError::Empty(0, 3));
        assert!(matches!(err, AssetError::Texture(TextureError::Empty(0, 3))));
        assert!(err.to_string().contains("0x3"));
    }

    #[test]
    fn missing_file_falls_back() {
        let cfg = Config::default();
        let paths = TexturePaths {
            wall: Some("/no/such/wall.ppm".into()),
            ..TexturePaths::default()
        };
        let set = TextureSet::load(&paths, &cfg);
        assert_eq!(set.wall, brick_wall(64));
    }

    #[test]
    fn loaded_wall_is_rescaled() {
        let cfg = Config {
            texture_size: 8,
            ..Config::default()
        };
        let path = std::env::temp_dir().join(format!("texray-wall-{}.ppm", process::id()));
        let mut bytes = b"P6 2 2 255\n".to_vec();
        bytes.extend_from_slice(&[255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255]);
        fs::write(&path, &bytes).unwrap();

        let paths = TexturePaths {
            wall: Some(path.clone()),
            ..TexturePaths::default()
        };
        let set = TextureSet::load(&paths, &cfg);
        fs::remove_file(&path).ok();

        assert_eq!((set.wall.w, set.wall.h), (8, 8));
        assert_eq!(set.wall.texel(0, 0), 0xFF0000);
        assert_eq!(set.wall.texel(7, 0), 0x00FF00);
        assert_eq!(set.wall.texel(7, 7), 0xFFFFFF);
    }
}
