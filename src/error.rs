//! Error types for the graft directory utilities.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the merge and tree-rendering operations
#[derive(Debug, Error)]
pub enum GraftError {
    #[error("Path does not exist: {0:?}")]
    PathNotFound(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Failed to walk directory: {0}")]
    Walk(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for GraftError {
    fn from(err: config::ConfigError) -> Self {
        GraftError::Config(err.to_string())
    }
}
