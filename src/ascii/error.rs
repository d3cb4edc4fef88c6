//! Renderer error types

/// Errors returned by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// An input that must be non-zero or well-formed was not.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl RenderError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        RenderError::InvalidArgument(msg.into())
    }
}
