//! ASCII renderer module for converting images to text.
//!
//! The pipeline is a single synchronous pass:
//!
//! 1. **Dimensions** - pick a row count that keeps the aspect ratio
//! 2. **Resampling** - shrink (or grow) the image to the character grid
//! 3. **Brightness** - unweighted RGB average per cell
//! 4. **Character mapping** - brightness to a glyph from [`RAMP`]
//!
//! Everything here is pure; no state survives between calls.

mod brightness;
mod charset;
mod dimensions;
mod error;
mod mapping;
mod pixels;
mod render;
mod resample;

pub use brightness::{brightness, to_brightness};
pub use charset::{darkest_char, is_ramp_char, lightest_char, RAMP, RAMP_LEVELS};
pub use dimensions::{
    columns_for_display_width, output_cells, target_height, CHAR_ASPECT_COMPENSATION,
    DEFAULT_CHAR_PIXEL_WIDTH, MAX_OUTPUT_CELLS,
};
pub use error::RenderError;
pub use mapping::{char_for_brightness, map_to_chars, ramp_index};
pub use pixels::{PixelGrid, Rgb};
pub use render::{render, render_with, AsciiArt, LineEnding};
pub use resample::{resample, Sampling};
