//! Configuration errors, including missing or unreadable baselines.

use super::error_code::{self, GuardErrorCode};

/// Errors raised while loading configuration or a stored baseline.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Baseline not found: {path}")]
    BaselineMissing { path: String },

    #[error("Baseline {path} is corrupt: {message}")]
    BaselineCorrupt { path: String, message: String },

    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl GuardErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::BaselineMissing { .. } => error_code::BASELINE_MISSING,
            Self::BaselineCorrupt { .. } => error_code::BASELINE_CORRUPT,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
