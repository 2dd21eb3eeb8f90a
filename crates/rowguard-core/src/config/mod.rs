//! Configuration system for rowguard.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod backup_config;
pub mod database_config;
pub mod guard_config;
pub mod rowcount_config;
pub mod schema_config;

pub use backup_config::BackupConfig;
pub use database_config::DatabaseConfig;
pub use guard_config::{resolve_path, CliOverrides, GuardConfig, PROJECT_CONFIG_FILE};
pub use rowcount_config::RowcountConfig;
pub use schema_config::SchemaConfig;
