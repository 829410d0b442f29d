//! Error types for the pixmap crate.

use thiserror::Error;

/// Errors that can occur while loading or manipulating pixmaps.
#[derive(Error, Debug)]
pub enum PixmapError {
    /// Failed to decode image data.
    #[error("failed to decode image: {0}")]
    Decode(String),

    /// Failed to encode image data.
    #[error("failed to encode image: {0}")]
    Encode(String),

    /// Raw pixel data did not match the declared dimensions.
    #[error("invalid pixel data size: expected {expected} bytes, got {actual}")]
    InvalidDataSize { expected: usize, actual: usize },

    /// File I/O error.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PixmapError {
    /// Create an I/O error.
    pub fn io(path: impl Into<std::path::PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for pixmap operations.
pub type PixmapResult<T> = Result<T, PixmapError>;
