//! Dimension calculation for aspect-ratio-correct ASCII rendering.

use super::error::RenderError;

/// Vertical compensation for character cells.
/// Monospace glyphs are typically ~2x taller than wide, so the output needs
/// about half as many rows as a square-pixel resize would give.
pub const CHAR_ASPECT_COMPENSATION: f64 = 0.5;

/// Assumed glyph width in pixels when deriving a column count from a
/// display width.
pub const DEFAULT_CHAR_PIXEL_WIDTH: u32 = 6;

/// Largest character grid (columns x rows) a render may produce.
pub const MAX_OUTPUT_CELLS: usize = 1 << 24;

/// Number of cells in a `width` x `height` output grid.
///
/// # Errors
/// `InvalidArgument` if the product overflows or exceeds [`MAX_OUTPUT_CELLS`].
pub fn output_cells(width: u32, height: u32) -> Result<usize, RenderError> {
    match (width as usize).checked_mul(height as usize) {
        Some(cells) if cells <= MAX_OUTPUT_CELLS => Ok(cells),
        _ => Err(RenderError::invalid(format!(
            "output grid {}x{} exceeds the limit of {} cells",
            width, height, MAX_OUTPUT_CELLS
        ))),
    }
}

/// Calculate the number of output rows for a given column count.
///
/// `round(img_height / img_width * target_width * 0.5)`, rounding half up,
/// and never less than 1 so a very wide image still yields one line.
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `target_width` - Output width in characters
///
/// # Errors
/// `InvalidArgument` if any argument is zero.
///
/// # Example
/// ```
/// use ascii_image::ascii::target_height;
/// // 640x480 at 80 columns: 480 / 640 * 80 * 0.5 = 30 rows
/// assert_eq!(target_height(640, 480, 80).unwrap(), 30);
/// ```
pub fn target_height(img_width: u32, img_height: u32, target_width: u32) -> Result<u32, RenderError> {
    if img_width == 0 || img_height == 0 {
        return Err(RenderError::invalid(format!(
            "image must have a non-zero area, got {}x{}",
            img_width, img_height
        )));
    }
    if target_width == 0 {
        return Err(RenderError::invalid("target width must be at least 1"));
    }

    let exact = img_height as f64 / img_width as f64
        * target_width as f64
        * CHAR_ASPECT_COMPENSATION;
    // f64::round is half-away-from-zero, which is half-up for positive values
    let rounded = exact.round();

    if rounded < 1.0 {
        log::debug!(
            "Computed height {:.3} for {}x{} at {} columns, clamping to 1",
            exact,
            img_width,
            img_height,
            target_width
        );
        return Ok(1);
    }

    Ok(rounded.min(u32::MAX as f64) as u32)
}

/// Derive a column count from an available display width in pixels.
///
/// The result is clamped to at least 1 column.
///
/// # Errors
/// `InvalidArgument` if `char_pixel_width` is zero.
pub fn columns_for_display_width(display_px: u32, char_pixel_width: u32) -> Result<u32, RenderError> {
    if char_pixel_width == 0 {
        return Err(RenderError::invalid("character pixel width must be at least 1"));
    }
    Ok((display_px / char_pixel_width).max(1))
}
