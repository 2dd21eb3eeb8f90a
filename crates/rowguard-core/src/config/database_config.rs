//! Database location.

use serde::{Deserialize, Serialize};

pub const DEFAULT_DATABASE_PATH: &str = "providers.db";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file path, relative to the project root. Default: `providers.db`.
    pub path: Option<String>,
}

impl DatabaseConfig {
    pub fn effective_path(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_DATABASE_PATH)
    }
}
