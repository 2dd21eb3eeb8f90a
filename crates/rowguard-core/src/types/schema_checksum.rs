//! SHA-256 fingerprint of a database schema.

use std::fmt;

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 over the schema statements joined by `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaChecksum(String);

impl SchemaChecksum {
    /// Hash schema statements in the order given. `None` entries (objects
    /// without SQL text, such as auto-indexes) contribute an empty line.
    pub fn from_statements<I, S>(statements: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let joined = statements
            .into_iter()
            .map(|s| s.map(|s| s.as_ref().to_owned()).unwrap_or_default())
            .collect::<Vec<_>>()
            .join("\n");
        let digest = Sha256::digest(joined.as_bytes());
        Self(digest.iter().map(|b| format!("{b:02x}")).collect())
    }

    /// Parse a stored checksum. Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let valid = trimmed.len() == 64
            && trimmed
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        valid.then(|| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SchemaChecksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_schema_hashes_empty_string() {
        let sum = SchemaChecksum::from_statements(Vec::<Option<&str>>::new());
        assert_eq!(
            sum.as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn null_statement_is_empty_line() {
        let a = SchemaChecksum::from_statements([Some("CREATE TABLE t(x)"), None]);
        let b = SchemaChecksum::from_statements([Some("CREATE TABLE t(x)"), Some("")]);
        assert_eq!(a, b);
    }

    #[test]
    fn parse_round_trip_and_rejects_garbage() {
        let sum = SchemaChecksum::from_statements([Some("CREATE TABLE t(x)")]);
        assert_eq!(SchemaChecksum::parse(&format!("  {sum}\n")), Some(sum));
        assert_eq!(SchemaChecksum::parse("not-a-digest"), None);
        assert_eq!(SchemaChecksum::parse(&"A".repeat(64)), None);
    }
}
