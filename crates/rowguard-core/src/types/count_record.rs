//! CountRecord: table name -> row count.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Row counts keyed by table name.
///
/// Backed by a `BTreeMap`, so iteration and serialization are always in
/// lexicographic key order regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountRecord(BTreeMap<String, u64>);

impl CountRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a JSON object of `table -> non-negative integer`.
    ///
    /// Rejects anything else: arrays, nested objects, floats, negative
    /// numbers and empty input all fail.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn insert(&mut self, table: impl Into<String>, count: u64) -> Option<u64> {
        self.0.insert(table.into(), count)
    }

    pub fn get(&self, table: &str) -> Option<u64> {
        self.0.get(table).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub(crate) fn as_map(&self) -> &BTreeMap<String, u64> {
        &self.0
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for CountRecord {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
