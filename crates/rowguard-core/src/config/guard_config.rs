//! Top-level rowguard configuration with layered resolution.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{BackupConfig, DatabaseConfig, RowcountConfig, SchemaConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "rowguard.toml";

/// Top-level configuration aggregating all sections.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SQLITE_PATH`, `ROWGUARD_*`)
/// 3. Project config (`rowguard.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GuardConfig {
    pub database: DatabaseConfig,
    pub rowcounts: RowcountConfig,
    pub schema: SchemaConfig,
    pub backup: BackupConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub database: Option<String>,
    pub baseline: Option<String>,
    pub strict: Option<bool>,
    pub backup_keep: Option<u32>,
}

impl GuardConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &GuardConfig) -> Result<(), ConfigError> {
        let mut seen = BTreeSet::new();
        for table in &config.rowcounts.tables {
            if !is_identifier(table) {
                return Err(ConfigError::ValidationFailed {
                    field: "rowcounts.tables".to_string(),
                    message: format!("{table:?} is not a plain SQL identifier"),
                });
            }
            if !seen.insert(table.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "rowcounts.tables".to_string(),
                    message: format!("{table:?} is listed twice"),
                });
            }
        }
        if config.backup.keep == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "backup.keep".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.database.path.as_deref() == Some("") {
            return Err(ConfigError::ValidationFailed {
                field: "database.path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut GuardConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: GuardConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut GuardConfig, other: &GuardConfig) {
        if other.database.path.is_some() {
            base.database.path = other.database.path.clone();
        }

        if !other.rowcounts.tables.is_empty() {
            base.rowcounts.tables = other.rowcounts.tables.clone();
        }
        if other.rowcounts.baseline.is_some() {
            base.rowcounts.baseline = other.rowcounts.baseline.clone();
        }
        if other.rowcounts.staging.is_some() {
            base.rowcounts.staging = other.rowcounts.staging.clone();
        }
        if other.rowcounts.strict.is_some() {
            base.rowcounts.strict = other.rowcounts.strict;
        }

        if other.schema.baseline.is_some() {
            base.schema.baseline = other.schema.baseline.clone();
        }

        if other.backup.dir.is_some() {
            base.backup.dir = other.backup.dir.clone();
        }
        if other.backup.prefix.is_some() {
            base.backup.prefix = other.backup.prefix.clone();
        }
        if other.backup.keep.is_some() {
            base.backup.keep = other.backup.keep;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(config: &mut GuardConfig) {
        if let Ok(val) = std::env::var("SQLITE_PATH") {
            if !val.is_empty() {
                config.database.path = Some(val);
            }
        }
        if let Ok(val) = std::env::var("ROWGUARD_BASELINE") {
            config.rowcounts.baseline = Some(val);
        }
        if let Ok(val) = std::env::var("ROWGUARD_STAGING") {
            config.rowcounts.staging = Some(val);
        }
        if let Ok(val) = std::env::var("ROWGUARD_STRICT") {
            match parse_flag(&val) {
                Some(v) => config.rowcounts.strict = Some(v),
                None => warn!(value = %val, "ignoring unrecognised ROWGUARD_STRICT"),
            }
        }
        if let Ok(val) = std::env::var("ROWGUARD_BACKUP_DIR") {
            config.backup.dir = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut GuardConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.database {
            config.database.path = Some(v.clone());
        }
        if let Some(ref v) = cli.baseline {
            config.rowcounts.baseline = Some(v.clone());
        }
        if let Some(v) = cli.strict {
            config.rowcounts.strict = Some(v);
        }
        if let Some(v) = cli.backup_keep {
            config.backup.keep = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Resolve a configured path against the project root. Absolute paths pass through.
pub fn resolve_path(root: &Path, value: impl AsRef<Path>) -> PathBuf {
    let value = value.as_ref();
    if value.is_absolute() {
        value.to_path_buf()
    } else {
        root.join(value)
    }
}

/// Boolean environment flag: `true/false`, `1/0`, `yes/no`, `on/off`.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert!(is_identifier("vendors"));
        assert!(is_identifier("_v2"));
        assert!(!is_identifier("2v"));
        assert!(!is_identifier("vendors; DROP TABLE x"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn flags() {
        for on in ["true", "1", "YES", " on "] {
            assert_eq!(parse_flag(on), Some(true), "{on}");
        }
        for off in ["false", "0", "no", "Off"] {
            assert_eq!(parse_flag(off), Some(false), "{off}");
        }
        assert_eq!(parse_flag("maybe"), None);
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn resolve_keeps_absolute_paths() {
        let root = Path::new("/srv/app");
        assert_eq!(resolve_path(root, "providers.db"), PathBuf::from("/srv/app/providers.db"));
        assert_eq!(resolve_path(root, "/data/p.db"), PathBuf::from("/data/p.db"));
    }
}
