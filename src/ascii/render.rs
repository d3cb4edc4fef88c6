//! Image to text rendering.

use std::fmt;

use super::brightness::to_brightness;
use super::dimensions::target_height;
use super::error::RenderError;
use super::mapping::map_to_chars;
use super::pixels::PixelGrid;
use super::resample::{resample, Sampling};

/// Line terminator written after each row of rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    Crlf,
    /// Whatever the current OS uses
    Native,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
            LineEnding::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }

    /// Parse a line ending name as used in the config file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "lf" | "unix" => Some(LineEnding::Lf),
            "crlf" | "windows" => Some(LineEnding::Crlf),
            "native" => Some(LineEnding::Native),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LineEnding::Lf => "lf",
            LineEnding::Crlf => "crlf",
            LineEnding::Native => "native",
        }
    }
}

/// Rendered text: `height` lines of exactly `width` ramp glyphs each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    width: u32,
    lines: Vec<String>,
}

impl AsciiArt {
    /// Number of characters per line.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of lines.
    pub fn height(&self) -> u32 {
        self.lines.len() as u32
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join the lines, terminating every line (the last one included)
    /// with `ending`.
    pub fn to_text(&self, ending: LineEnding) -> String {
        let sep = ending.as_str();
        let mut text =
            String::with_capacity(self.lines.len() * (self.width as usize + sep.len()));
        for line in &self.lines {
            text.push_str(line);
            text.push_str(sep);
        }
        text
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Render an image as text `target_width` characters wide, using
/// nearest-neighbour sampling.
///
/// The row count comes from [`target_height`]: the source aspect ratio
/// with rows halved to account for tall character cells.
///
/// # Errors
/// `InvalidArgument` if `target_width` is zero, or if the character grid
/// would exceed [`MAX_OUTPUT_CELLS`](super::MAX_OUTPUT_CELLS).
///
/// # Example
/// ```
/// use ascii_image::ascii::{render, PixelGrid, Rgb};
/// let image = PixelGrid::from_pixels(2, 2, &[Rgb::BLACK, Rgb::WHITE, Rgb::BLACK, Rgb::WHITE]).unwrap();
/// let art = render(&image, 2).unwrap();
/// assert_eq!(art.lines(), &["@ ".to_string()]);
/// ```
pub fn render(image: &PixelGrid, target_width: u32) -> Result<AsciiArt, RenderError> {
    render_with(image, target_width, Sampling::Nearest)
}

/// Same as [`render`] with an explicit sampling policy.
pub fn render_with(
    image: &PixelGrid,
    target_width: u32,
    sampling: Sampling,
) -> Result<AsciiArt, RenderError> {
    let height = target_height(image.width(), image.height(), target_width)?;
    log::debug!(
        "Rendering {}x{} image to {}x{} characters ({} sampling)",
        image.width(),
        image.height(),
        target_width,
        height,
        sampling.name()
    );

    let sampled = resample(image, target_width, height, sampling)?;

    let chars = map_to_chars(&to_brightness(&sampled));
    let lines = chars
        .chunks(target_width as usize)
        .map(|row| row.iter().collect::<String>())
        .collect();

    Ok(AsciiArt {
        width: target_width,
        lines,
    })
}
