//! Brightness to character mapping.

use super::charset::{RAMP, RAMP_LEVELS};

/// Map a brightness value to an index into [`RAMP`].
///
/// `floor(brightness * (N - 1) / 255)`, so 0 maps to the darkest glyph and
/// 255 to the lightest, with everything in between spread linearly.
#[inline]
pub fn ramp_index(brightness: u8) -> usize {
    let idx = (brightness as usize * (RAMP_LEVELS - 1)) / 255;
    idx.min(RAMP_LEVELS - 1)
}

/// Map a brightness value straight to its ramp glyph.
#[inline]
pub fn char_for_brightness(brightness: u8) -> char {
    RAMP[ramp_index(brightness)]
}

/// Map brightness values to characters.
///
/// # Arguments
/// * `brightness` - Brightness values (0-255), one per character cell
///
/// # Returns
/// A vector of characters, one per input brightness value.
///
/// # Example
/// ```
/// use ascii_image::ascii::map_to_chars;
/// let chars = map_to_chars(&[0, 128, 255]);
/// assert_eq!(chars, vec!['@', '+', ' ']);
/// ```
pub fn map_to_chars(brightness: &[u8]) -> Vec<char> {
    brightness.iter().map(|&b| char_for_brightness(b)).collect()
}
