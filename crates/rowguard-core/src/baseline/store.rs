//! BaselineStore: the committed row-count baseline file.

use std::path::{Path, PathBuf};

use super::atomic::write_atomic;
use crate::errors::{ConfigError, IoError};
use crate::types::{canonicalize, CountRecord};

/// Handle on the persisted baseline. Reads are strict: a missing or
/// undecodable file is a [`ConfigError`], never an empty record.
#[derive(Debug, Clone)]
pub struct BaselineStore {
    path: PathBuf,
}

impl BaselineStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn load(&self) -> Result<CountRecord, ConfigError> {
        let path = self.path.display().to_string();
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::BaselineMissing { path });
            }
            Err(e) => {
                return Err(ConfigError::BaselineCorrupt {
                    path,
                    message: e.to_string(),
                });
            }
        };
        if text.trim().is_empty() {
            return Err(ConfigError::BaselineCorrupt {
                path,
                message: "file is empty".to_string(),
            });
        }
        CountRecord::from_json(&text).map_err(|e| ConfigError::BaselineCorrupt {
            path,
            message: e.to_string(),
        })
    }

    /// Replace the whole baseline with `record`, atomically.
    pub fn replace(&self, record: &CountRecord) -> Result<(), IoError> {
        write_atomic(&self.path, canonicalize(record).as_bytes())
    }
}
