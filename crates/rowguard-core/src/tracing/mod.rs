//! Observability for rowguard.
//! `tracing` crate with an `EnvFilter` read from `ROWGUARD_LOG`.

pub mod setup;

pub use setup::init_tracing;
