//! Drift comparator: OK when canonical forms are byte-identical, DRIFT otherwise.

use std::fmt;

use super::diff::unified_diff;
use crate::types::{canonicalize, CanonicalForm, CountRecord};

const BASELINE_LABEL: &str = "baseline";
const CURRENT_LABEL: &str = "current";

/// Outcome of a drift check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Drift(DriftReport),
}

impl Verdict {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Summary line for the given subject, e.g. `rowcounts: OK`.
    pub fn summary(&self, subject: &str) -> String {
        match self {
            Self::Ok => format!("{subject}: OK"),
            Self::Drift(_) => format!("{subject}: DRIFT"),
        }
    }
}

/// Per-table difference between baseline and current records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableChange {
    /// Present now, absent from the baseline.
    Added { table: String, count: u64 },
    /// Present in the baseline, absent now.
    Removed { table: String, count: u64 },
    Changed {
        table: String,
        baseline: u64,
        current: u64,
    },
}

impl fmt::Display for TableChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { table, count } => write!(f, "{table}: added ({count})"),
            Self::Removed { table, count } => write!(f, "{table}: removed ({count})"),
            Self::Changed {
                table,
                baseline,
                current,
            } => write!(f, "{table}: {baseline} -> {current}"),
        }
    }
}

/// Everything needed to inspect a detected drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftReport {
    pub baseline: String,
    pub current: String,
    /// Unified diff of the two documents.
    pub diff: String,
    /// Empty when the report was built from canonical forms alone.
    pub changes: Vec<TableChange>,
}

/// Compare two canonical forms byte for byte.
pub fn compare(baseline: &CanonicalForm, current: &CanonicalForm) -> Verdict {
    compare_text(baseline.as_str(), current.as_str())
}

/// Byte comparison of two already-normalized text documents.
pub fn compare_text(baseline: &str, current: &str) -> Verdict {
    if baseline.as_bytes() == current.as_bytes() {
        return Verdict::Ok;
    }
    Verdict::Drift(DriftReport {
        baseline: baseline.to_string(),
        current: current.to_string(),
        diff: unified_diff(baseline, current, BASELINE_LABEL, CURRENT_LABEL),
        changes: Vec::new(),
    })
}

/// Canonicalize both records, compare them, and list per-table changes.
pub fn compare_records(baseline: &CountRecord, current: &CountRecord) -> Verdict {
    match compare(&canonicalize(baseline), &canonicalize(current)) {
        Verdict::Ok => Verdict::Ok,
        Verdict::Drift(mut report) => {
            report.changes = table_changes(baseline, current);
            Verdict::Drift(report)
        }
    }
}

fn table_changes(baseline: &CountRecord, current: &CountRecord) -> Vec<TableChange> {
    let mut changes = Vec::new();
    for (table, count) in baseline.iter() {
        match current.get(table) {
            None => changes.push(TableChange::Removed {
                table: table.to_string(),
                count,
            }),
            Some(now) if now != count => changes.push(TableChange::Changed {
                table: table.to_string(),
                baseline: count,
                current: now,
            }),
            Some(_) => {}
        }
    }
    for (table, count) in current.iter() {
        if baseline.get(table).is_none() {
            changes.push(TableChange::Added {
                table: table.to_string(),
                count,
            });
        }
    }
    changes
}
