//! Built-in textures, used when no image is supplied or loading fails.
//!
//! Deterministic: the same size always yields the same pixels.

use std::f32::consts::TAU;

use crate::world::{Texture, pack_rgb};

const MORTAR: (u8, u8, u8) = (178, 172, 160);
const BRICK: (u8, u8, u8) = (150, 62, 42);
const GROUT: (u8, u8, u8) = (40, 40, 44);
const STONE: (u8, u8, u8) = (110, 108, 100);

/// Cheap integer hash, stable across platforms.
#[inline]
fn noise(x: usize, y: usize) -> u8 {
    let mut h = (x as u32).wrapping_mul(0x9E37_79B1) ^ (y as u32).wrapping_mul(0x85EB_CA77);
    h ^= h >> 15;
    h = h.wrapping_mul(0xC2B2_AE3D);
    h ^= h >> 13;
    (h & 0xFF) as u8
}

/// Shift every channel by `d`, saturating.
#[inline]
fn shade((r, g, b): (u8, u8, u8), d: i16) -> u32 {
    let f = |c: u8| (c as i16 + d).clamp(0, 255) as u8;
    pack_rgb(f(r), f(g), f(b))
}

/// Running-bond brick courses: four rows, two bricks per row, every other
/// row shifted by half a brick.
pub fn brick_wall(size: usize) -> Texture {
    let size = size.max(4);
    let course = size / 4;
    let brick = size / 2;
    let mortar = (size / 32).max(1);

    let mut pixels = Vec::with_capacity(size * size);
    for y in 0..size {
        let row = y / course;
        let shift = if row % 2 == 1 { brick / 2 } else { 0 };
        for x in 0..size {
            let bx = (x + shift) % size;
            let seam = y % course < mortar || bx % brick < mortar;
            let px = if seam {
                shade(MORTAR, (noise(x, y) % 16) as i16 - 8)
            } else {
                // one tone per brick plus a little grain
                let tone = (noise(bx / brick, row) % 40) as i16 - 20;
                shade(BRICK, tone + (noise(x, y) % 12) as i16 - 6)
            };
            pixels.push(px);
        }
    }
    Texture {
        w: size,
        h: size,
        pixels,
    }
}

/// Square flagstones, four to a side, separated by dark grout.
pub fn stone_floor(size: usize) -> Texture {
    let size = size.max(4);
    let slab = size / 4;
    let grout = (size / 64).max(1);

    let mut pixels = Vec::with_capacity(size * size);
    for y in 0..size {
        for x in 0..size {
            let px = if x % slab < grout || y % slab < grout {
                shade(GROUT, (noise(x, y) % 8) as i16 - 4)
            } else {
                let tone = (noise(x / slab + 17, y / slab) % 48) as i16 - 24;
                shade(STONE, tone + (noise(x, y) % 16) as i16 - 8)
            };
            pixels.push(px);
        }
    }
    Texture {
        w: size,
        h: size,
        pixels,
    }
}

/// Vertical gradient with soft cloud bands.  The bands are periodic in
/// `w`, so the panorama wraps without a seam.
pub fn sky_panorama(w: usize, h: usize) -> Texture {
    let (w, h) = (w.max(1), h.max(1));
    let top = (36.0, 58.0, 120.0);
    let horizon = (150.0, 182.0, 222.0);

    let mut pixels = Vec::with_capacity(w * h);
    for y in 0..h {
        let t = y as f32 / h as f32;
        let base = (
            top.0 + (horizon.0 - top.0) * t,
            top.1 + (horizon.1 - top.1) * t,
            top.2 + (horizon.2 - top.2) * t,
        );
        for x in 0..w {
            let a = x as f32 / w as f32 * TAU;
            let band = ((a * 3.0).sin() * 0.6 + (a * 7.0 + t * 4.0).sin() * 0.4).max(0.0);
            let cloud = band * (1.0 - (t - 0.55).abs() * 2.0).max(0.0) * 70.0;
            pixels.push(pack_rgb(
                (base.0 + cloud).min(255.0) as u8,
                (base.1 + cloud).min(255.0) as u8,
                (base.2 + cloud).min(255.0) as u8,
            ));
        }
    }
    Texture { w, h, pixels }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_match_request() {
        let b = brick_wall(64);
        assert_eq!((b.w, b.h, b.pixels.len()), (64, 64, 64 * 64));
        let s = stone_floor(32);
        assert_eq!((s.w, s.h, s.pixels.len()), (32, 32, 32 * 32));
        let k = sky_panorama(300, 100);
        assert_eq!((k.w, k.h, k.pixels.len()), (300, 100, 300 * 100));
    }

    #[test]
    fn tiny_requests_are_padded() {
        assert_eq!(brick_wall(0).w, 4);
        assert_eq!(stone_floor(1).h, 4);
        assert_eq!(sky_panorama(0, 0).pixels.len(), 1);
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(brick_wall(64), brick_wall(64));
        assert_eq!(stone_floor(64), stone_floor(64));
    }

    #[test]
    fn brick_rows_are_offset() {
        let t = brick_wall(64);
        // vertical seam at x = 0 in even courses, x = 16 in odd ones
        let mortar_at = |x: usize, y: usize| {
            let px = t.pixels[y * 64 + x];
            ((px >> 16) & 0xFF) > 160 && ((px >> 8) & 0xFF) > 150
        };
        assert!(mortar_at(0, 8));
        assert!(!mortar_at(0, 24));
        assert!(mortar_at(16, 24));
    }

    #[test]
    fn sky_gets_lighter_towards_horizon() {
        let s = sky_panorama(64, 100);
        let blue = |y: usize| s.pixels[y * 64] & 0xFF;
        assert!(blue(99) > blue(0));
    }
}
