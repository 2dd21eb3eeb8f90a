//! Filesystem errors for baseline, staging and backup files.

use super::error_code::{self, GuardErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },

    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to remove {path}: {message}")]
    Remove { path: String, message: String },
}

impl GuardErrorCode for IoError {
    fn error_code(&self) -> &'static str {
        error_code::IO_ERROR
    }
}
