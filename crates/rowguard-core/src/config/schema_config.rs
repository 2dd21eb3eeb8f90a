//! Schema checksum guard configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SCHEMA_BASELINE: &str = ".schema.sha256";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SchemaConfig {
    /// Checksum baseline file. Default: `.schema.sha256`.
    pub baseline: Option<String>,
}

impl SchemaConfig {
    pub fn effective_baseline(&self) -> &str {
        self.baseline.as_deref().unwrap_or(DEFAULT_SCHEMA_BASELINE)
    }
}
