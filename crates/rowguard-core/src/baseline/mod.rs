//! Baseline lifecycle: load, atomic replace, refresh/accept/check.

pub mod atomic;
pub mod manager;
pub mod schema;
pub mod store;

pub use atomic::write_atomic;
pub use manager::BaselineManager;
pub use schema::SchemaBaseline;
pub use store::BaselineStore;
