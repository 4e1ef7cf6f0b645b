//! Error types for strixtlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while walking and checking paths.
///
/// Scanning a buffer never fails; everything here comes from the
/// filesystem side of a check run.
#[derive(Error, Debug)]
pub enum StrixtError {
    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Directory traversal failed
    #[error("failed to walk '{path}': {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
