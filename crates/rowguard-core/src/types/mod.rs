//! Value types shared by the guards.

pub mod canonical;
pub mod count_record;
pub mod schema_checksum;

pub use canonical::{canonicalize, canonicalize_json, CanonicalForm};
pub use count_record::CountRecord;
pub use schema_checksum::SchemaChecksum;
