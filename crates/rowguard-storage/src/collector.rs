//! Count collector: `SELECT COUNT(*)` over a fixed list of tables.

use std::path::{Path, PathBuf};

use rowguard_core::errors::DataAccessError;
use rowguard_core::traits::CountSource;
use rowguard_core::types::CountRecord;
use rusqlite::Connection;
use tracing::{debug, warn};

use crate::connection::open_read_only;

/// Collects row counts from a SQLite file.
///
/// With `strict = false`, failures degrade instead of aborting: an
/// unreachable database yields an empty record and a failing table
/// counts as `0`. Every swallowed failure is logged.
#[derive(Debug, Clone)]
pub struct SqliteCollector {
    path: PathBuf,
    strict: bool,
}

impl SqliteCollector {
    pub fn new(path: impl Into<PathBuf>, strict: bool) -> Self {
        Self {
            path: path.into(),
            strict,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn collect_with(
        &self,
        tables: &[String],
        strict: bool,
    ) -> Result<CountRecord, DataAccessError> {
        let conn = match open_read_only(&self.path) {
            Ok(conn) => conn,
            Err(e) if !strict => {
                warn!(error = %e, "database unreachable, reporting empty counts");
                return Ok(CountRecord::new());
            }
            Err(e) => return Err(e),
        };
        count_tables(&conn, tables, strict)
    }
}

impl CountSource for SqliteCollector {
    fn collect(&self, tables: &[String]) -> Result<CountRecord, DataAccessError> {
        self.collect_with(tables, self.strict)
    }

    fn collect_strict(&self, tables: &[String]) -> Result<CountRecord, DataAccessError> {
        self.collect_with(tables, true)
    }
}

/// Count rows of every table in `tables` on an open connection.
pub fn count_tables(
    conn: &Connection,
    tables: &[String],
    strict: bool,
) -> Result<CountRecord, DataAccessError> {
    let mut record = CountRecord::new();
    for table in tables {
        match count_one(conn, table) {
            Ok(n) => {
                debug!(table = %table, rows = n, "counted");
                record.insert(table.as_str(), n);
            }
            Err(e) if !strict => {
                warn!(table = %table, error = %e, "count failed, recording 0");
                record.insert(table.as_str(), 0);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(record)
}

fn count_one(conn: &Connection, table: &str) -> Result<u64, DataAccessError> {
    let sql = format!("SELECT COUNT(*) FROM {}", quote_identifier(table));
    let n: i64 = conn
        .query_row(&sql, [], |row| row.get(0))
        .map_err(|e| DataAccessError::Query {
            table: table.to_string(),
            message: e.to_string(),
        })?;
    u64::try_from(n).map_err(|_| DataAccessError::Query {
        table: table.to_string(),
        message: format!("negative count {n}"),
    })
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
