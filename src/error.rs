//! Error types for linediff
//!
//! The diff engine itself cannot fail; these errors come from the boundary
//! around it (loading inputs, parsing options, exporting output).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for linediff operations
pub type Result<T> = std::result::Result<T, DiffError>;

/// Errors that can occur around a diff computation
#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}
