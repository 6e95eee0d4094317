//! Error types for the theme toolkit
//!
//! The color conversions themselves never fail: they return `Option` and
//! the palette generator falls back to a default seed. These errors cover
//! the editing and persistence layers built on top of them.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for theme documents and token editing
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A string was not a `#RGB` or `#RRGGBB` color
    #[error("Invalid hex color '{0}'. Expected #RGB or #RRGGBB.")]
    InvalidHex(String),

    /// A scheme role name that the Material scheme does not define
    #[error("Unknown color scheme role: {0}")]
    UnknownRole(String),

    /// An extended token name that is not part of the document
    #[error("Unknown extended color token: {0}")]
    UnknownToken(String),

    /// The same extended token appears more than once in a document
    #[error("Duplicate extended color token: {0}")]
    DuplicateToken(String),

    /// Failed to read or write a theme document
    #[error("IO error on '{path}': {message}")]
    IoError { path: PathBuf, message: String },

    /// Theme document JSON could not be parsed or produced
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ThemeError>;

impl ThemeError {
    pub(crate) fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        ThemeError::IoError {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
