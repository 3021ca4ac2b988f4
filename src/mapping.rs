//! Luminance mapping: reducing an averaged color to one palette character.

use crate::sampler::Pixel;

/// Compute the perceptual greyscale value of a pixel.
///
/// Uses the ITU-R BT.601 weights 0.299/0.587/0.114. Each weighted term is
/// truncated before summation, so the result tops out at 254 for pure
/// white (76 + 149 + 29). That keeps every opaque pixel at least one step
/// away from the palette's blank character, which is reserved for
/// transparency.
pub fn luminance(pixel: Pixel) -> u8 {
    let r = (0.299 * f64::from(pixel.r)) as u32;
    let g = (0.587 * f64::from(pixel.g)) as u32;
    let b = (0.114 * f64::from(pixel.b)) as u32;
    (r + g + b) as u8
}

/// Map a pixel to a character from a luminance-ranked palette.
///
/// The palette is ordered densest to sparsest, so darker pixels select
/// lower indices. Two overrides happen before the luminance computation:
///
/// * all four channels zero: the pixel is treated as unpainted rather
///   than true black and is remapped to white before weighting;
/// * alpha zero with non-zero color: the blank (last) character is
///   returned immediately.
///
/// Total function: every input yields a valid palette character.
pub fn char_for_pixel(pixel: Pixel, palette: &[char]) -> char {
    debug_assert!(!palette.is_empty());

    let pixel = if pixel.r == 0 && pixel.g == 0 && pixel.b == 0 && pixel.a == 0 {
        Pixel::new(255, 255, 255, pixel.a)
    } else if pixel.a == 0 {
        return palette[palette.len() - 1];
    } else {
        pixel
    };

    let grey = luminance(pixel);
    palette[palette_index(grey, palette.len())]
}

/// Map a greyscale value to a palette index: floor(grey * (len - 1) / 255).
///
/// Monotonic in `grey` and bounded to [0, len - 1] by construction.
fn palette_index(grey: u8, palette_len: usize) -> usize {
    (grey as usize * (palette_len - 1)) / 255
}
