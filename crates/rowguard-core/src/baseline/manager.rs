//! BaselineManager: refresh, accept and check for the row-count guard.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::atomic::write_atomic;
use super::store::BaselineStore;
use crate::compare::{compare_records, Verdict};
use crate::errors::GuardError;
use crate::traits::CountSource;
use crate::types::{canonicalize, CountRecord};

/// Explicit state for the row-count guard: where counts come from, which
/// tables are tracked, the committed baseline and the staging file.
pub struct BaselineManager<S: CountSource> {
    source: S,
    tables: Vec<String>,
    store: BaselineStore,
    staging: PathBuf,
}

impl<S: CountSource> BaselineManager<S> {
    pub fn new(source: S, tables: Vec<String>, store: BaselineStore, staging: PathBuf) -> Self {
        Self {
            source,
            tables,
            store,
            staging,
        }
    }

    pub fn store(&self) -> &BaselineStore {
        &self.store
    }

    pub fn staging_path(&self) -> &Path {
        &self.staging
    }

    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    /// Recompute counts and write them to the staging file only.
    pub fn refresh(&self) -> Result<CountRecord, GuardError> {
        let record = self.source.collect(&self.tables)?;
        self.stage(&record)?;
        Ok(record)
    }

    /// Refresh, then atomically replace the committed baseline.
    ///
    /// Counts are always collected strictly here: a tolerant source would
    /// otherwise turn an unreachable database into an empty baseline.
    pub fn accept(&self) -> Result<CountRecord, GuardError> {
        let record = self.source.collect_strict(&self.tables)?;
        self.stage(&record)?;
        self.store.replace(&record)?;
        info!(baseline = %self.store.path().display(), "rowcount baseline accepted");
        Ok(record)
    }

    fn stage(&self, record: &CountRecord) -> Result<(), GuardError> {
        write_atomic(&self.staging, canonicalize(record).as_bytes())?;
        debug!(
            staging = %self.staging.display(),
            tables = record.len(),
            "rowcounts refreshed"
        );
        Ok(())
    }

    /// Compare fresh counts against the committed baseline.
    ///
    /// The baseline is read first: if it is missing or corrupt the check
    /// fails with a configuration error before the database is touched.
    pub fn check(&self) -> Result<(CountRecord, Verdict), GuardError> {
        let baseline = self.store.load()?;
        let current = self.refresh()?;
        let verdict = compare_records(&baseline, &current);
        Ok((current, verdict))
    }
}
