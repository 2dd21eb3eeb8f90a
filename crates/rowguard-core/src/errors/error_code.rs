//! GuardErrorCode trait for machine-readable error reporting.

/// Every error enum implements this to expose a stable code string,
/// printed in front of the message on the CLI.
pub trait GuardErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const DATA_ACCESS_ERROR: &str = "DATA_ACCESS_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const BASELINE_MISSING: &str = "BASELINE_MISSING";
pub const BASELINE_CORRUPT: &str = "BASELINE_CORRUPT";
pub const IO_ERROR: &str = "IO_ERROR";
