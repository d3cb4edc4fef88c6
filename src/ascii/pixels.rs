//! Source image representation.

use image::DynamicImage;

use super::error::RenderError;

/// A single RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A gray pixel with all three channels set to `v`.
    pub fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }
}

/// A decoded RGB image, stored row-major with 3 bytes per pixel.
///
/// Width and height are always at least 1 and `data.len()` is always
/// `width * height * 3`; the constructors reject anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Build a grid from raw RGB bytes.
    ///
    /// # Errors
    /// `InvalidArgument` if either dimension is zero or the buffer length
    /// does not match `width * height * 3`.
    pub fn from_rgb(width: u32, height: u32, data: Vec<u8>) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::invalid(format!(
                "image must have a non-zero area, got {}x{}",
                width, height
            )));
        }
        let expected = (width as usize) * (height as usize) * 3;
        if data.len() != expected {
            return Err(RenderError::invalid(format!(
                "pixel buffer holds {} bytes, expected {} for {}x{} RGB",
                data.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a grid from a row-major slice of pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: &[Rgb]) -> Result<Self, RenderError> {
        let data = pixels.iter().flat_map(|p| [p.r, p.g, p.b]).collect();
        Self::from_rgb(width, height, data)
    }

    /// A grid where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self, RenderError> {
        let count = (width as usize) * (height as usize);
        Self::from_pixels(width, height, &vec![color; count])
    }

    /// Convert a decoded image, dropping any alpha channel.
    pub fn from_image(image: &DynamicImage) -> Result<Self, RenderError> {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        Self::from_rgb(width, height, rgb.into_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Pixel at (`x`, `y`). Callers keep coordinates inside the grid.
    #[inline]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Rgb {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of bounds", x, y);
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 3;
        Rgb {
            r: self.data[idx],
            g: self.data[idx + 1],
            b: self.data[idx + 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_from_rgb_rejects_zero_area() {
        assert!(matches!(
            PixelGrid::from_rgb(0, 4, vec![]),
            Err(RenderError::InvalidArgument(_))
        ));
        assert!(matches!(
            PixelGrid::from_rgb(4, 0, vec![]),
            Err(RenderError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_from_rgb_rejects_wrong_length() {
        let err = PixelGrid::from_rgb(2, 2, vec![0; 11]).unwrap_err();
        assert!(err.to_string().contains("expected 12"));
    }

    #[test]
    fn test_pixel_lookup_is_row_major() {
        let grid = PixelGrid::from_pixels(
            2,
            2,
            &[Rgb::gray(1), Rgb::gray(2), Rgb::gray(3), Rgb::gray(4)],
        )
        .unwrap();
        assert_eq!(grid.pixel(0, 0), Rgb::gray(1));
        assert_eq!(grid.pixel(1, 0), Rgb::gray(2));
        assert_eq!(grid.pixel(0, 1), Rgb::gray(3));
        assert_eq!(grid.pixel(1, 1), Rgb::gray(4));
    }

    #[test]
    fn test_from_image_drops_alpha() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([10, 20, 30, 0]));
        img.put_pixel(1, 0, Rgba([200, 100, 50, 255]));
        let grid = PixelGrid::from_image(&DynamicImage::ImageRgba8(img)).unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.pixel(0, 0), Rgb::new(10, 20, 30));
        assert_eq!(grid.pixel(1, 0), Rgb::new(200, 100, 50));
    }

    #[test]
    fn test_filled() {
        let grid = PixelGrid::filled(3, 2, Rgb::WHITE).unwrap();
        assert_eq!(grid.data().len(), 18);
        assert!(grid.data().iter().all(|&b| b == 255));
    }
}
