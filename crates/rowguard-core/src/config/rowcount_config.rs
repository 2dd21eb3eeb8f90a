//! Row-count guard configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TABLES: [&str; 3] = ["categories", "services", "vendors"];
pub const DEFAULT_BASELINE: &str = ".rowcounts.json";
pub const DEFAULT_STAGING_FILE: &str = "rowguard-rowcounts.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RowcountConfig {
    /// Tracked tables. Empty means the compiled default set.
    pub tables: Vec<String>,
    /// Baseline file, relative to the project root. Default: `.rowcounts.json`.
    pub baseline: Option<String>,
    /// Staging file for the latest computed counts. Default: in the system temp dir.
    pub staging: Option<String>,
    /// Fail on database errors instead of degrading to partial counts. Default: true.
    pub strict: Option<bool>,
}

impl RowcountConfig {
    pub fn effective_tables(&self) -> Vec<String> {
        if self.tables.is_empty() {
            DEFAULT_TABLES.iter().map(|t| t.to_string()).collect()
        } else {
            self.tables.clone()
        }
    }

    pub fn effective_baseline(&self) -> &str {
        self.baseline.as_deref().unwrap_or(DEFAULT_BASELINE)
    }

    pub fn effective_staging(&self) -> std::path::PathBuf {
        match &self.staging {
            Some(path) => std::path::PathBuf::from(path),
            None => std::env::temp_dir().join(DEFAULT_STAGING_FILE),
        }
    }

    pub fn effective_strict(&self) -> bool {
        self.strict.unwrap_or(true)
    }
}
