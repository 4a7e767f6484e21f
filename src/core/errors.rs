//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Parsing errors
    #[error("Parse error in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Files whose extension maps to no supported language
    #[error("Unsupported file type: {0}")]
    UnsupportedFile(PathBuf),

    /// Wrapped I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
