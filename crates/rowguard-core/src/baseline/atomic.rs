//! Write-temp-then-rename file replacement.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::errors::IoError;

/// Atomically replace `path` with `contents`.
///
/// The data goes to a temporary file in the same directory, is fsynced, and
/// is then renamed over `path`. If any step fails the temporary file is
/// removed and the previous content of `path` is left untouched.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), IoError> {
    write_atomic_with(path, contents, |tmp, target| {
        tmp.persist(target).map(drop).map_err(|e| e.error)
    })
}

/// `write_atomic` with the final rename supplied by the caller.
fn write_atomic_with<F>(path: &Path, contents: &[u8], persist: F) -> Result<(), IoError>
where
    F: FnOnce(NamedTempFile, &Path) -> io::Result<()>,
{
    let write_err = |message: String| IoError::Write {
        path: path.display().to_string(),
        message,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let prefix = format!(
        "{}.",
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "rowguard".to_string())
    );

    let mut tmp = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| write_err(format!("create temp file in {}: {e}", dir.display())))?;
    tmp.write_all(contents)
        .map_err(|e| write_err(format!("write temp file: {e}")))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| write_err(format!("fsync temp file: {e}")))?;
    // A temp file handed back in an error is dropped, which deletes it.
    persist(tmp, path).map_err(|e| write_err(format!("rename over target: {e}")))?;
    Ok(())
}
