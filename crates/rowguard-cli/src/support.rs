use std::path::PathBuf;

use rowguard_core::config::{resolve_path, CliOverrides, GuardConfig};
use rowguard_core::errors::GuardError;
use rowguard_core::{BaselineManager, BaselineStore, SchemaBaseline};
use rowguard_storage::SqliteCollector;

use crate::cli::GlobalArgs;

/// Resolved configuration plus the project root it is relative to.
pub struct Context {
    root: PathBuf,
    config: GuardConfig,
}

impl Context {
    pub fn load(global: &GlobalArgs, backup_keep: Option<u32>) -> Result<Self, GuardError> {
        let root = PathBuf::from(global.root.trim());
        let overrides = CliOverrides {
            database: global.db.clone(),
            baseline: global.baseline.clone(),
            strict: global.tolerant.then_some(false),
            backup_keep,
        };
        let config = GuardConfig::load(&root, Some(&overrides))?;
        Ok(Self { root, config })
    }

    pub fn database_path(&self) -> PathBuf {
        resolve_path(&self.root, self.config.database.effective_path())
    }

    pub fn strict(&self) -> bool {
        self.config.rowcounts.effective_strict()
    }

    pub fn rowcount_manager(&self) -> BaselineManager<SqliteCollector> {
        let rowcounts = &self.config.rowcounts;
        BaselineManager::new(
            SqliteCollector::new(self.database_path(), self.strict()),
            rowcounts.effective_tables(),
            BaselineStore::new(resolve_path(&self.root, rowcounts.effective_baseline())),
            resolve_path(&self.root, rowcounts.effective_staging()),
        )
    }

    pub fn schema_baseline(&self) -> SchemaBaseline {
        SchemaBaseline::new(resolve_path(
            &self.root,
            self.config.schema.effective_baseline(),
        ))
    }

    pub fn backup_dir(&self) -> PathBuf {
        resolve_path(&self.root, self.config.backup.effective_dir())
    }

    pub fn backup_prefix(&self) -> &str {
        self.config.backup.effective_prefix()
    }

    pub fn backup_keep(&self) -> usize {
        self.config.backup.effective_keep() as usize
    }
}
