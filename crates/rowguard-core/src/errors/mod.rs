//! Error handling for rowguard.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod data_access_error;
pub mod error_code;
pub mod guard_error;
pub mod io_error;

pub use config_error::ConfigError;
pub use data_access_error::DataAccessError;
pub use error_code::GuardErrorCode;
pub use guard_error::GuardError;
pub use io_error::IoError;
