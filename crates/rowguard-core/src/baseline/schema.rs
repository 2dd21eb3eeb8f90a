//! Stored schema checksum baseline.

use std::path::{Path, PathBuf};

use super::atomic::write_atomic;
use crate::compare::{compare_text, Verdict};
use crate::errors::{ConfigError, IoError};
use crate::types::SchemaChecksum;

#[derive(Debug, Clone)]
pub struct SchemaBaseline {
    path: PathBuf,
}

impl SchemaBaseline {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<SchemaChecksum, ConfigError> {
        let path = self.path.display().to_string();
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::BaselineMissing { path: path.clone() }
            } else {
                ConfigError::BaselineCorrupt {
                    path: path.clone(),
                    message: e.to_string(),
                }
            }
        })?;
        SchemaChecksum::parse(&text).ok_or(ConfigError::BaselineCorrupt {
            path,
            message: "expected a 64-character lowercase hex SHA-256 digest".to_string(),
        })
    }

    pub fn replace(&self, checksum: &SchemaChecksum) -> Result<(), IoError> {
        write_atomic(&self.path, format!("{checksum}\n").as_bytes())
    }

    /// Compare `current` against the stored checksum.
    pub fn check(&self, current: &SchemaChecksum) -> Result<Verdict, ConfigError> {
        let stored = self.load()?;
        Ok(compare_text(
            &format!("{stored}\n"),
            &format!("{current}\n"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_then_check_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let baseline = SchemaBaseline::new(dir.path().join(".schema.sha256"));
        let sum = SchemaChecksum::from_statements([Some("CREATE TABLE vendors(id)")]);

        assert!(matches!(
            baseline.check(&sum),
            Err(ConfigError::BaselineMissing { .. })
        ));
        baseline.replace(&sum).unwrap();
        assert!(baseline.check(&sum).unwrap().is_ok());

        let other = SchemaChecksum::from_statements([Some("CREATE TABLE vendors(id, name)")]);
        assert!(!baseline.check(&other).unwrap().is_ok());
    }

    #[test]
    fn garbage_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".schema.sha256");
        std::fs::write(&path, "hello").unwrap();
        assert!(matches!(
            SchemaBaseline::new(path).load(),
            Err(ConfigError::BaselineCorrupt { .. })
        ));
    }
}
