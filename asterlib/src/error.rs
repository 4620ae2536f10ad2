//! Error types for asterlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while selecting or reading files
#[derive(Error, Debug)]
pub enum AsterError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Directory walk failed below a root
    #[error("failed to walk '{path}': {message}")]
    Walk { path: PathBuf, message: String },
}

impl From<walkdir::Error> for AsterError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        AsterError::Walk {
            path,
            message: err.to_string(),
        }
    }
}
