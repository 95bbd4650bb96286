//! Errors raised while picking an image

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when selecting a file
#[derive(Debug, Error)]
pub enum SelectionError {
    /// The path does not look like an image (the picker only accepts `image/*`)
    #[error("Not an image file: {}", .0.display())]
    NotAnImage(PathBuf),

    /// The path is a directory or has no file name
    #[error("Not a file: {}", .0.display())]
    NotAFile(PathBuf),

    /// The file could not be read
    #[error("Cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preview could not be opened in the system viewer
    #[error("Cannot open preview: {0}")]
    PreviewError(String),
}

/// Result type for selection operations
pub type Result<T> = std::result::Result<T, SelectionError>;
