//! Canonical byte form of a CountRecord.
//!
//! Baseline files and fresh counts are produced independently and may
//! differ in indentation or key order. Both sides are rendered through
//! [`canonicalize`] so the comparison is format-insensitive but value-exact.

use std::fmt;

use super::CountRecord;

/// Deterministic serialization of a [`CountRecord`]: keys sorted, two-space
/// indentation, `": "` between key and value, one trailing newline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalForm(String);

impl CanonicalForm {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for CanonicalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render a record in canonical form. Pure; never fails.
pub fn canonicalize(record: &CountRecord) -> CanonicalForm {
    let mut out = String::from("{");
    let mut first = true;
    for (table, count) in record.as_map() {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str("\n  ");
        // serde_json string escaping keeps odd table names unambiguous.
        out.push_str(&serde_json::Value::from(table.as_str()).to_string());
        out.push_str(": ");
        out.push_str(&count.to_string());
    }
    if !first {
        out.push('\n');
    }
    out.push_str("}\n");
    CanonicalForm(out)
}

/// Decode raw JSON into a record, then canonicalize it.
pub fn canonicalize_json(text: &str) -> Result<CanonicalForm, serde_json::Error> {
    CountRecord::from_json(text).map(|record| canonicalize(&record))
}
