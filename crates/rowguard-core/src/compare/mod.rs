//! Drift comparison between a stored baseline and freshly computed values.

pub mod comparator;
pub mod diff;

pub use comparator::{compare, compare_records, compare_text, DriftReport, TableChange, Verdict};
pub use diff::unified_diff;
