//! Error types for the icon resolution crate.

use std::path::PathBuf;

/// Result type alias for icon operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the icon resolution system.
///
/// Lookup paths never surface these to callers: a failed resolution is a
/// null icon, not an error (interactive UI code must not crash because an
/// image file went missing). `Error` is reserved for the explicit load and
/// configuration entry points.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image data could not be decoded.
    #[error("failed to decode '{name}': {message}")]
    Decode { name: String, message: String },

    /// A configured search-path entry is malformed.
    #[error("invalid search path entry '{entry}': {message}")]
    InvalidSearchPath { entry: String, message: String },

    /// A bundled-resource prefix is not registered.
    #[error("unknown bundled resource namespace '{0}'")]
    UnknownNamespace(String),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a decode error.
    pub fn decode(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a search-path error.
    pub fn invalid_search_path(entry: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSearchPath {
            entry: entry.into(),
            message: message.into(),
        }
    }
}
