//! CountSource trait: anything that can produce row counts for a table list.

use crate::errors::DataAccessError;
use crate::types::CountRecord;

/// Produces a [`CountRecord`] for the given tracked tables.
///
/// Implementations are read-only. Whether `collect` swallows failures is
/// up to the implementation's own strictness setting; `collect_strict`
/// never does.
pub trait CountSource {
    fn collect(&self, tables: &[String]) -> Result<CountRecord, DataAccessError>;

    /// Collect with every failure surfaced, regardless of configuration.
    /// Used before a baseline is replaced.
    fn collect_strict(&self, tables: &[String]) -> Result<CountRecord, DataAccessError> {
        self.collect(tables)
    }
}

impl<T: CountSource + ?Sized> CountSource for &T {
    fn collect(&self, tables: &[String]) -> Result<CountRecord, DataAccessError> {
        (**self).collect(tables)
    }

    fn collect_strict(&self, tables: &[String]) -> Result<CountRecord, DataAccessError> {
        (**self).collect_strict(tables)
    }
}
