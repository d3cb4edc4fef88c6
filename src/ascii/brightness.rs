//! RGB to brightness conversion.

use super::pixels::PixelGrid;

/// Brightness of a pixel: the unweighted average of its channels, truncated.
///
/// `floor((R + G + B) / 3)`, always in 0..=255.
#[inline]
pub fn brightness(r: u8, g: u8, b: u8) -> u8 {
    // Max sum is 765, so the quotient fits in a u8
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

/// Convert a whole grid to brightness values, one per pixel, row-major.
pub fn to_brightness(grid: &PixelGrid) -> Vec<u8> {
    let pixel_count = (grid.width() as usize) * (grid.height() as usize);
    let mut out = Vec::with_capacity(pixel_count);

    for rgb in grid.data().chunks_exact(3) {
        out.push(brightness(rgb[0], rgb[1], rgb[2]));
    }

    out
}
