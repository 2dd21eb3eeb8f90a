//! Connection opening with consistent flags and pragmas.

use std::path::Path;
use std::time::Duration;

use rowguard_core::errors::DataAccessError;
use rusqlite::{Connection, OpenFlags};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open an existing database read-only. A missing file is an error; it is
/// never created.
pub fn open_read_only(path: &Path) -> Result<Connection, DataAccessError> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| open_err(path, e))?;
    conn.busy_timeout(BUSY_TIMEOUT).map_err(|e| open_err(path, e))?;
    conn.execute_batch("PRAGMA query_only = ON;").map_err(|e| open_err(path, e))?;
    Ok(conn)
}

/// Open (or create) a database for writing.
pub fn open_read_write(path: &Path) -> Result<Connection, DataAccessError> {
    let conn = Connection::open(path).map_err(|e| open_err(path, e))?;
    conn.busy_timeout(BUSY_TIMEOUT).map_err(|e| open_err(path, e))?;
    Ok(conn)
}

fn open_err(path: &Path, e: rusqlite::Error) -> DataAccessError {
    DataAccessError::Open {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}
