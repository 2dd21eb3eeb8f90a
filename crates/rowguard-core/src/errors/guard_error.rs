//! Top-level error aggregating every concern, used at the CLI boundary.

use super::error_code::GuardErrorCode;
use super::{ConfigError, DataAccessError, IoError};

/// Exit status for a clean run.
pub const EXIT_OK: i32 = 0;
/// Exit status when drift (or a failed integrity check) was detected.
pub const EXIT_DRIFT: i32 = 1;
/// Exit status for any failure to read inputs or write outputs.
pub const EXIT_ERROR: i32 = 2;

#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    #[error("Data access error: {0}")]
    DataAccess(#[from] DataAccessError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}

impl GuardError {
    /// Process exit status for this error. Drift is a verdict, not an
    /// error, and exits with [`EXIT_DRIFT`] from the command itself.
    pub fn exit_code(&self) -> i32 {
        EXIT_ERROR
    }
}

impl GuardErrorCode for GuardError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DataAccess(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Io(e) => e.error_code(),
        }
    }
}
