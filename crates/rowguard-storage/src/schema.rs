//! Schema fingerprint over `sqlite_master`.

use rowguard_core::errors::DataAccessError;
use rowguard_core::types::SchemaChecksum;
use rusqlite::Connection;

use crate::to_sqlite_err;

const SCHEMA_SQL: &str = "SELECT sql FROM sqlite_master \
     WHERE type IN ('table','index','view','trigger') ORDER BY 1";

/// Schema statements of every table, index, view and trigger, ordered by
/// their SQL text. Objects without SQL (auto-indexes) come back as `None`.
pub fn schema_statements(conn: &Connection) -> Result<Vec<Option<String>>, DataAccessError> {
    let mut stmt = conn.prepare(SCHEMA_SQL).map_err(to_sqlite_err)?;
    let rows = stmt
        .query_map([], |row| row.get::<_, Option<String>>(0))
        .map_err(to_sqlite_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(to_sqlite_err)
}

/// SHA-256 of the schema statements joined by newlines.
pub fn schema_checksum(conn: &Connection) -> Result<SchemaChecksum, DataAccessError> {
    Ok(SchemaChecksum::from_statements(schema_statements(conn)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changes_when_schema_changes() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE vendors (id INTEGER PRIMARY KEY, name TEXT);")
            .unwrap();
        let before = schema_checksum(&conn).unwrap();
        assert_eq!(before, schema_checksum(&conn).unwrap());

        conn.execute_batch("CREATE INDEX idx_vendors_name ON vendors(name);")
            .unwrap();
        assert_ne!(before, schema_checksum(&conn).unwrap());
    }

    #[test]
    fn data_changes_do_not_affect_checksum() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE vendors (id INTEGER PRIMARY KEY);")
            .unwrap();
        let before = schema_checksum(&conn).unwrap();
        conn.execute_batch("INSERT INTO vendors DEFAULT VALUES;").unwrap();
        assert_eq!(before, schema_checksum(&conn).unwrap());
    }

    #[test]
    fn auto_index_contributes_null_statement() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (a TEXT UNIQUE);").unwrap();
        let statements = schema_statements(&conn).unwrap();
        assert_eq!(statements.len(), 2);
        assert!(statements.contains(&None));
    }
}
