//! Error types for the exporters.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while delivering an export artifact.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The output directory could not be created.
    #[error("Failed to create output directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact file could not be written.
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to a stream failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
