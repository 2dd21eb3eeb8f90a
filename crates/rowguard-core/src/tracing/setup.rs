//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "ROWGUARD_LOG";

/// Filter used when `ROWGUARD_LOG` is unset or invalid. Target matching is
/// by prefix, so this covers every `rowguard_*` crate.
pub const DEFAULT_FILTER: &str = "rowguard=warn";

/// Initialize logging to stderr.
///
/// Reads `ROWGUARD_LOG` (e.g. `ROWGUARD_LOG=rowguard_storage=debug`).
/// Falls back to [`DEFAULT_FILTER`], so guard output on stdout stays
/// clean. Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter());

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}

fn default_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
