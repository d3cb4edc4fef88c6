//! Resampling a source image to the character grid.

use super::dimensions::output_cells;
use super::error::RenderError;
use super::pixels::{PixelGrid, Rgb};

/// How source pixels are picked for each character cell.
///
/// Both policies are deterministic for fixed inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    /// Take the source pixel under the centre of each cell
    #[default]
    Nearest,
    /// Average every source pixel covered by the cell
    Average,
}

impl Sampling {
    /// Parse a sampling name as used in the config file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "nearest" => Some(Sampling::Nearest),
            "average" | "box" => Some(Sampling::Average),
            _ => None,
        }
    }

    /// Get a human-readable name for the policy.
    pub fn name(&self) -> &'static str {
        match self {
            Sampling::Nearest => "nearest",
            Sampling::Average => "average",
        }
    }
}

/// Source coordinate under the centre of output cell `i`.
///
/// `floor((2i + 1) * src / (2 * dst))`, clamped to the last source index.
#[inline]
fn centre_of(i: u32, src: u32, dst: u32) -> u32 {
    let c = ((2 * i as u128 + 1) * src as u128) / (2 * dst as u128);
    c.min(src as u128 - 1) as u32
}

/// Half-open source range `[start, end)` covered by output cell `i`.
#[inline]
fn span_of(i: u32, src: u32, dst: u32) -> (u32, u32) {
    let start = (i as u64 * src as u64) / dst as u64;
    let end = ((i as u64 + 1) * src as u64) / dst as u64;
    (start as u32, end as u32)
}

/// Resample `grid` to exactly `out_width` x `out_height` pixels.
///
/// # Errors
/// `InvalidArgument` if either output dimension is zero, or the output
/// grid is larger than [`MAX_OUTPUT_CELLS`](super::MAX_OUTPUT_CELLS).
pub fn resample(
    grid: &PixelGrid,
    out_width: u32,
    out_height: u32,
    sampling: Sampling,
) -> Result<PixelGrid, RenderError> {
    if out_width == 0 || out_height == 0 {
        return Err(RenderError::invalid(format!(
            "resample target must be non-zero, got {}x{}",
            out_width, out_height
        )));
    }

    let cells = output_cells(out_width, out_height)?;
    let mut data = Vec::with_capacity(cells * 3);

    for cy in 0..out_height {
        for cx in 0..out_width {
            let px = match sampling {
                Sampling::Nearest => nearest(grid, cx, cy, out_width, out_height),
                Sampling::Average => average(grid, cx, cy, out_width, out_height),
            };
            data.extend_from_slice(&[px.r, px.g, px.b]);
        }
    }

    PixelGrid::from_rgb(out_width, out_height, data)
}

fn nearest(grid: &PixelGrid, cx: u32, cy: u32, out_w: u32, out_h: u32) -> Rgb {
    let sx = centre_of(cx, grid.width(), out_w);
    let sy = centre_of(cy, grid.height(), out_h);
    grid.pixel(sx, sy)
}

fn average(grid: &PixelGrid, cx: u32, cy: u32, out_w: u32, out_h: u32) -> Rgb {
    let (start_x, end_x) = span_of(cx, grid.width(), out_w);
    let (start_y, end_y) = span_of(cy, grid.height(), out_h);

    // Upscaling: the cell covers less than one source pixel
    if end_x <= start_x || end_y <= start_y {
        return nearest(grid, cx, cy, out_w, out_h);
    }

    let mut sum_r = 0u64;
    let mut sum_g = 0u64;
    let mut sum_b = 0u64;
    let mut count = 0u64;

    for py in start_y..end_y {
        for px in start_x..end_x {
            let p = grid.pixel(px, py);
            sum_r += p.r as u64;
            sum_g += p.g as u64;
            sum_b += p.b as u64;
            count += 1;
        }
    }

    Rgb {
        r: (sum_r / count) as u8,
        g: (sum_g / count) as u8,
        b: (sum_b / count) as u8,
    }
}
