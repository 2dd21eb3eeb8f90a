//! rowguard-storage: SQLite side of the guards.
//!
//! Read paths open the database with `SQLITE_OPEN_READ_ONLY`; only
//! [`backup::restore_backup`] writes to it.

pub mod backup;
pub mod collector;
pub mod connection;
pub mod integrity;
pub mod schema;

pub use backup::{create_backup, list_backups, prune_backups, restore_backup, BackupInfo};
pub use collector::{count_tables, SqliteCollector};
pub use connection::{open_read_only, open_read_write};
pub use integrity::{integrity_check, IntegrityReport};
pub use schema::{schema_checksum, schema_statements};

use rowguard_core::errors::DataAccessError;

pub(crate) fn to_sqlite_err(e: rusqlite::Error) -> DataAccessError {
    DataAccessError::Sqlite {
        message: e.to_string(),
    }
}
