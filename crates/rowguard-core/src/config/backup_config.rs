//! Backup configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the backup subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BackupConfig {
    /// Backup directory, relative to the project root. Default: `backups`.
    pub dir: Option<String>,
    /// File name prefix. Default: `providers`.
    pub prefix: Option<String>,
    /// Backups to keep when pruning. Default: 10.
    pub keep: Option<u32>,
}

impl BackupConfig {
    pub fn effective_dir(&self) -> &str {
        self.dir.as_deref().unwrap_or("backups")
    }

    pub fn effective_prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or("providers")
    }

    pub fn effective_keep(&self) -> u32 {
        self.keep.unwrap_or(10)
    }
}
