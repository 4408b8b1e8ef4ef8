//! # Binary PPM (`P6`) decoder
//!
//! * Header: magic, width, height, maxval; whitespace separated, `#`
//!   comments run to end of line.
//! * Exactly one whitespace byte separates the header from the raster.
//! * `maxval < 256` stores one byte per sample, anything larger stores
//!   big-endian `u16` samples.  Both are rescaled to 8 bits.

use byteorder::{BigEndian as BE, ReadBytesExt};
use std::{fs, path::Path};

use super::AssetError;
use crate::world::{Texture, pack_rgb};

pub fn load_ppm<P: AsRef<Path>>(path: P) -> Result<Texture, AssetError> {
    let bytes = fs::read(path)?;
    decode_ppm(&bytes)
}

pub fn decode_ppm(bytes: &[u8]) -> Result<Texture, AssetError> {
    let mut cur = bytes.strip_prefix(b"P6").ok_or(AssetError::BadMagic)?;

    let w = header_field(&mut cur, "width")?;
    let h = header_field(&mut cur, "height")?;
    let maxval = header_field(&mut cur, "maxval")?;

    if w == 0 || h == 0 {
        return Err(AssetError::EmptyImage(w, h));
    }
    if !(1..=u16::MAX as usize).contains(&maxval) {
        return Err(AssetError::BadHeader("maxval out of range"));
    }

    // single separator before the raster
    match cur.split_first() {
        Some((b, rest)) if b.is_ascii_whitespace() => cur = rest,
        Some(_) => return Err(AssetError::BadHeader("no separator after maxval")),
        None => return Err(AssetError::Truncated { need: 1, got: 0 }),
    }

    let wide = maxval > u8::MAX as usize;
    let need = w
        .checked_mul(h)
        .and_then(|n| n.checked_mul(if wide { 6 } else { 3 }))
        .ok_or(AssetError::BadHeader("image too large"))?;
    if cur.len() < need {
        return Err(AssetError::Truncated {
            need,
            got: cur.len(),
        });
    }

    let scale = |v: u32| ((v * 255 + maxval as u32 / 2) / maxval as u32).min(255) as u8;
    let mut pixels = Vec::with_capacity(w * h);
    if wide {
        for _ in 0..w * h {
            let r = cur.read_u16::<BE>()?;
            let g = cur.read_u16::<BE>()?;
            let b = cur.read_u16::<BE>()?;
            pixels.push(pack_rgb(scale(r as u32), scale(g as u32), scale(b as u32)));
        }
    } else {
        for px in cur[..need].chunks_exact(3) {
            pixels.push(pack_rgb(
                scale(px[0] as u32),
                scale(px[1] as u32),
                scale(px[2] as u32),
            ));
        }
    }

    Ok(Texture::new(w, h, pixels)?)
}

/// Next decimal header token, skipping whitespace and comments.
fn header_field(cur: &mut &[u8], what: &'static str) -> Result<usize, AssetError> {
    loop {
        match cur.first() {
            Some(b) if b.is_ascii_whitespace() => *cur = &cur[1..],
            Some(b'#') => {
                let eol = cur.iter().position(|&b| b == b'\n').unwrap_or(cur.len());
                *cur = &cur[eol..];
            }
            _ => break,
        }
    }

    let len = cur.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return Err(AssetError::BadHeader(what));
    }
    let (digits, rest) = cur.split_at(len);
    *cur = rest;

    std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or(AssetError::BadHeader(what))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ppm(header: &str, raster: &[u8]) -> Vec<u8> {
        let mut v = header.as_bytes().to_vec();
        v.extend_from_slice(raster);
        v
    }

    #[test]
    fn decodes_8bit_with_comments() {
        let bytes = ppm(
            "P6\n# made by hand\n2 1 # trailing\n255\n",
            &[255, 0, 0, 0, 128, 255],
        );
        let tex = decode_ppm(&bytes).unwrap();
        assert_eq!((tex.w, tex.h), (2, 1));
        assert_eq!(tex.pixels, vec![0xFF0000, 0x0080FF]);
    }

    #[test]
    fn decodes_16bit_big_endian() {
        let bytes = ppm("P6 1 1 65535\n", &[0xFF, 0xFF, 0x80, 0x00, 0x00, 0x00]);
        let tex = decode_ppm(&bytes).unwrap();
        assert_eq!(tex.pixels, vec![pack_rgb(255, 128, 0)]);
    }

    #[test]
    fn small_maxval_is_rescaled() {
        let bytes = ppm("P6 1 1 15\n", &[15, 0, 5]);
        let tex = decode_ppm(&bytes).unwrap();
        assert_eq!(tex.pixels, vec![pack_rgb(255, 0, 85)]);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(decode_ppm(b"P3 1 1 255\n"), Err(AssetError::BadMagic)));
        assert!(matches!(
            decode_ppm(b"P6 1 x 255\n"),
            Err(AssetError::BadHeader("height"))
        ));
        assert!(matches!(
            decode_ppm(b"P6 0 4 255\n"),
            Err(AssetError::EmptyImage(0, 4))
        ));
        assert!(matches!(
            decode_ppm(b"P6 1 1 0\n"),
            Err(AssetError::BadHeader(_))
        ));
        assert!(matches!(
            decode_ppm(b"P6 2 2 255\n\x01\x02"),
            Err(AssetError::Truncated { need: 12, got: 2 })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_ppm("/definitely/not/here.ppm").unwrap_err();
        assert!(matches!(err, AssetError::Io(_)));
    }
}
