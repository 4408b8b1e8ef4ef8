// Format-agnostic pixel buffers decoded by the asset loader.
// The renderer only ever reads them.

use thiserror::Error;

use crate::renderer::Rgba;

/// Pack 8-bit channels into the frame-buffer format (0x00RRGGBB).
#[inline]
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> Rgba {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Multiply every channel of `color` by `light / 255`.
///
/// `(c * light + 255) >> 8` is exact for `light == 255` and never overflows.
#[inline]
pub fn modulate(color: Rgba, light: u8) -> Rgba {
    let l = light as u32;
    let r = (((color >> 16) & 0xFF) * l + 255) >> 8;
    let g = (((color >> 8) & 0xFF) * l + 255) >> 8;
    let b = ((color & 0xFF) * l + 255) >> 8;
    (r << 16) | (g << 8) | b
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextureError {
    #[error("texture has zero size ({0}x{1})")]
    Empty(usize, usize),

    #[error("{w}x{h} texture needs {expected} pixels, got {found}")]
    SizeMismatch {
        w: usize,
        h: usize,
        expected: usize,
        found: usize,
    },
}

/// CPU-side storage: 0x00RRGGBB in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub w: usize,
    pub h: usize,
    pub pixels: Vec<Rgba>,
}

impl Texture {
    pub fn new(w: usize, h: usize, pixels: Vec<Rgba>) -> Result<Self, TextureError> {
        if w == 0 || h == 0 {
            return Err(TextureError::Empty(w, h));
        }
        if pixels.len() != w * h {
            return Err(TextureError::SizeMismatch {
                w,
                h,
                expected: w * h,
                found: pixels.len(),
            });
        }
        Ok(Self { w, h, pixels })
    }

    /// Single-colour texture.
    pub fn solid(w: usize, h: usize, color: Rgba) -> Self {
        Self {
            w: w.max(1),
            h: h.max(1),
            pixels: vec![color; w.max(1) * h.max(1)],
        }
    }

    /// Texel with coordinates clamped into the texture.
    #[inline]
    pub fn texel(&self, x: usize, y: usize) -> Rgba {
        let x = x.min(self.w - 1);
        let y = y.min(self.h - 1);
        self.pixels[y * self.w + x]
    }

    /// Nearest-neighbour resample to `w × h`.
    pub fn rescaled(&self, w: usize, h: usize) -> Self {
        if w == self.w && h == self.h {
            return self.clone();
        }
        let (w, h) = (w.max(1), h.max(1));
        let mut pixels = Vec::with_capacity(w * h);
        for y in 0..h {
            let sy = y * self.h / h;
            for x in 0..w {
                let sx = x * self.w / w;
                pixels.push(self.pixels[sy * self.w + sx]);
            }
        }
        Self { w, h, pixels }
    }
}

/// The three surfaces the ray caster paints.
#[derive(Clone, Debug)]
pub struct TextureSet {
    pub wall: Texture,
    pub floor: Texture,
    /// Panorama; keeps its own size and wraps horizontally.
    pub sky: Texture,
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulate_full_light_is_identity() {
        for c in [0x00_000000, 0x00_FFFFFF, 0x00_12_80_FE, 0x00_01_02_03] {
            assert_eq!(modulate(c, 255), c);
        }
    }

    #[test]
    fn modulate_darkens_per_channel() {
        let c = pack_rgb(200, 100, 50);
        let d = modulate(c, 128);
        assert_eq!((d >> 16) & 0xFF, 100);
        assert_eq!((d >> 8) & 0xFF, 50);
        assert_eq!(d & 0xFF, 25);
        assert_eq!(modulate(c, 0), 0);
    }

    #[test]
    fn new_checks_dimensions() {
        assert_eq!(Texture::new(0, 4, vec![]), Err(TextureError::Empty(0, 4)));
        assert_eq!(
            Texture::new(2, 2, vec![0; 3]),
            Err(TextureError::SizeMismatch {
                w: 2,
                h: 2,
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn rescale_nearest() {
        let t = Texture::new(2, 1, vec![1, 2]).unwrap();
        let big = t.rescaled(4, 2);
        assert_eq!(big.pixels, vec![1, 1, 2, 2, 1, 1, 2, 2]);
        let back = big.rescaled(2, 1);
        assert_eq!(back, t);
    }

    #[test]
    fn texel_lookup_clamps() {
        let t = Texture::new(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(t.texel(1, 0), 2);
        assert_eq!(t.texel(100, 0), 3);
        assert_eq!(t.texel(100, 100), 6);
        assert_eq!(t.texel(0, 9), 4);
    }
}
