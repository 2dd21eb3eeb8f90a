//! Seams between the core guards and concrete data sources.

pub mod count_source;

pub use count_source::CountSource;
