//! PRAGMA integrity_check, detect corruption early.

use rowguard_core::errors::DataAccessError;
use rusqlite::Connection;

use crate::to_sqlite_err;

/// Every row returned by `PRAGMA integrity_check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityReport {
    pub messages: Vec<String>,
}

impl IntegrityReport {
    /// Healthy databases report exactly one row: `ok`.
    pub fn is_ok(&self) -> bool {
        self.messages.len() == 1 && self.messages[0] == "ok"
    }
}

pub fn integrity_check(conn: &Connection) -> Result<IntegrityReport, DataAccessError> {
    let mut stmt = conn
        .prepare("PRAGMA integrity_check")
        .map_err(to_sqlite_err)?;
    let messages = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(to_sqlite_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(to_sqlite_err)?;
    Ok(IntegrityReport { messages })
}
