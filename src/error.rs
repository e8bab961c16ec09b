//! Error type shared by the conversion pipeline.
//!
//! Degenerate drawings (blank or sparse canvases) are *not* errors: they
//! resolve to a low-confidence default classification. Errors are reserved
//! for inputs the pipeline cannot read at all.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The drawing surface is missing or its buffer does not match the
    /// declared dimensions.
    #[error("drawing surface unavailable: {reason}")]
    UnavailableSurface { reason: String },

    #[error("failed to decode drawing: {0}")]
    Decode(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

impl ConvertError {
    pub(crate) fn unavailable(reason: impl Into<String>) -> Self {
        Self::UnavailableSurface {
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
