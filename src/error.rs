//! Error types for load/save operations.

use std::path::PathBuf;

use crate::ascii::RenderError;

/// Errors that can occur while converting an image file or saving the result.
///
/// None of these are fatal to a session: the caller reports them and
/// carries on with whatever text it already had.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The file could not be read or is not a decodable raster image
    #[error("Failed to decode image '{}': {source}", .path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Zero-area image or non-positive width reached the renderer
    #[error(transparent)]
    InvalidArgument(#[from] RenderError),

    /// The destination could not be written
    #[error("Failed to write '{}': {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
