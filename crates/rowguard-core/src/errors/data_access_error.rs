//! Database access errors.

use super::error_code::{self, GuardErrorCode};

/// Errors raised while reaching or querying the SQLite database.
#[derive(Debug, thiserror::Error)]
pub enum DataAccessError {
    #[error("Cannot open database {path}: {message}")]
    Open { path: String, message: String },

    #[error("Query on {table} failed: {message}")]
    Query { table: String, message: String },

    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("Backup failed: {message}")]
    Backup { message: String },
}

impl GuardErrorCode for DataAccessError {
    fn error_code(&self) -> &'static str {
        error_code::DATA_ACCESS_ERROR
    }
}
