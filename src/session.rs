//! Load/save command handlers.
//!
//! A [`Session`] holds the most recently rendered text, the way a text view
//! would. Loading replaces it only on success; saving never touches it.

use std::path::Path;

use image::DynamicImage;

use crate::ascii::{render_with, AsciiArt, LineEnding, PixelGrid, Sampling};
use crate::error::ConvertError;

/// Settings that shape every render and save in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSettings {
    pub sampling: Sampling,
    pub line_ending: LineEnding,
}

/// Current state of a conversion session.
#[derive(Debug, Default)]
pub struct Session {
    settings: SessionSettings,
    art: Option<AsciiArt>,
    text: String,
}

impl Session {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            settings,
            art: None,
            text: String::new(),
        }
    }

    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    /// Decode the image at `path` and render it `columns` characters wide.
    ///
    /// On error the previous text is kept as-is.
    pub fn load(&mut self, path: &Path, columns: u32) -> Result<&AsciiArt, ConvertError> {
        let image = decode_image(path)?;
        log::info!(
            "Loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        self.load_image(&image, columns)
    }

    /// Render an already decoded image `columns` characters wide.
    pub fn load_image(
        &mut self,
        image: &DynamicImage,
        columns: u32,
    ) -> Result<&AsciiArt, ConvertError> {
        let grid = PixelGrid::from_image(image)?;
        let art = render_with(&grid, columns, self.settings.sampling)?;
        self.text = art.to_text(self.settings.line_ending);
        Ok(&*self.art.insert(art))
    }

    /// Write the current text to `path`, verbatim.
    ///
    /// With nothing loaded yet this writes an empty file.
    pub fn save(&self, path: &Path) -> Result<(), ConvertError> {
        if self.art.is_none() {
            log::warn!("Nothing rendered yet, saving empty text to {}", path.display());
        }
        write_text(path, &self.text)?;
        log::info!("Saved {} bytes to {}", self.text.len(), path.display());
        Ok(())
    }

    /// The rendered text, with line endings applied.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The last successful render, if any.
    pub fn art(&self) -> Option<&AsciiArt> {
        self.art.as_ref()
    }
}

/// Decode an image file, guessing the format from its contents.
pub fn decode_image(path: &Path) -> Result<DynamicImage, ConvertError> {
    let decode = || -> Result<DynamicImage, image::ImageError> {
        let reader = image::ImageReader::open(path)?.with_guessed_format()?;
        reader.decode()
    };
    decode().map_err(|source| ConvertError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `text` to `path` as UTF-8 with no header.
pub fn write_text(path: &Path, text: &str) -> Result<(), ConvertError> {
    std::fs::write(path, text).map_err(|source| ConvertError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}
