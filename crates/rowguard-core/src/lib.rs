//! rowguard-core: drift guards for a SQLite-backed admin database.
//!
//! - Types: `CountRecord`, `CanonicalForm`, `SchemaChecksum`
//! - Compare: byte-exact comparison of canonical forms with a unified diff
//! - Baseline: atomic baseline replacement, refresh/accept/check lifecycle
//! - Config: layered `rowguard.toml` / env / CLI configuration
//! - Errors: one `thiserror` enum per concern, with stable error codes
//! - Tracing: `ROWGUARD_LOG`-driven subscriber setup

pub mod baseline;
pub mod compare;
pub mod config;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

pub use baseline::{BaselineManager, BaselineStore, SchemaBaseline};
pub use compare::{DriftReport, TableChange, Verdict};
pub use config::GuardConfig;
pub use errors::{ConfigError, DataAccessError, GuardError, GuardErrorCode, IoError};
pub use traits::CountSource;
pub use types::{canonicalize, CanonicalForm, CountRecord, SchemaChecksum};
