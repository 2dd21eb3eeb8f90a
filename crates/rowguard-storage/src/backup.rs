//! Timestamped backups via the SQLite online backup API, plus restore and pruning.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rowguard_core::errors::{DataAccessError, GuardError, IoError};
use rusqlite::backup::Backup;
use rusqlite::Connection;
use tracing::{info, warn};

use crate::connection::{open_read_only, open_read_write};
use crate::integrity::integrity_check;

const PAGES_PER_STEP: std::os::raw::c_int = 100;
const STEP_PAUSE: Duration = Duration::from_millis(10);
const BACKUP_EXT: &str = "db";
const STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";
const STAMP_LEN: usize = "YYYYMMDD-HHMMSS".len();

/// A backup file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupInfo {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Copy `db_path` into `<backup_dir>/<prefix>-YYYYMMDD-HHMMSS.db`.
///
/// The source is opened read-only. The directory is created if needed;
/// a name collision within the same second gets a numeric suffix.
pub fn create_backup(
    db_path: &Path,
    backup_dir: &Path,
    prefix: &str,
) -> Result<BackupInfo, GuardError> {
    let src = open_read_only(db_path)?;
    std::fs::create_dir_all(backup_dir).map_err(|e| IoError::Write {
        path: backup_dir.display().to_string(),
        message: e.to_string(),
    })?;

    let stamp = chrono::Local::now().format(STAMP_FORMAT).to_string();
    let mut target = backup_dir.join(format!("{prefix}-{stamp}.{BACKUP_EXT}"));
    let mut n = 1;
    while target.exists() {
        target = backup_dir.join(format!("{prefix}-{stamp}-{n}.{BACKUP_EXT}"));
        n += 1;
    }

    let copied = Connection::open(&target)
        .map_err(|e| DataAccessError::Backup {
            message: format!("open backup dest {}: {e}", target.display()),
        })
        .and_then(|mut dst| copy_database(&src, &mut dst));
    if let Err(e) = copied {
        // A partial file would later be listed and counted as a backup.
        if let Err(rm) = std::fs::remove_file(&target) {
            warn!(
                backup = %target.display(),
                error = %rm,
                "could not remove partial backup"
            );
        }
        return Err(e.into());
    }

    let bytes = file_size(&target)?;
    info!(backup = %target.display(), bytes, "backup created");
    Ok(BackupInfo {
        path: target,
        bytes,
    })
}

/// Restore `backup_path` into `db_path`, replacing its contents.
///
/// The backup must pass `PRAGMA integrity_check` first; a damaged backup
/// is refused and `db_path` is left untouched.
pub fn restore_backup(backup_path: &Path, db_path: &Path) -> Result<(), GuardError> {
    let src = open_read_only(backup_path)?;
    let report = integrity_check(&src)?;
    if !report.is_ok() {
        return Err(DataAccessError::Backup {
            message: format!(
                "{} failed integrity check: {}",
                backup_path.display(),
                report.messages.join("; ")
            ),
        }
        .into());
    }

    let mut dst = open_read_write(db_path)?;
    copy_database(&src, &mut dst)?;
    info!(
        backup = %backup_path.display(),
        database = %db_path.display(),
        "database restored"
    );
    Ok(())
}

/// Backups in `backup_dir` with the given prefix, oldest first.
pub fn list_backups(backup_dir: &Path, prefix: &str) -> Result<Vec<BackupInfo>, GuardError> {
    let entries = match std::fs::read_dir(backup_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(IoError::Read {
                path: backup_dir.display().to_string(),
                message: e.to_string(),
            }
            .into())
        }
    };

    let name_prefix = format!("{prefix}-");
    let mut keyed: Vec<((String, u64), PathBuf)> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(BACKUP_EXT)
        })
        .filter_map(|path| {
            let stem = path.file_stem()?.to_str()?;
            let key = order_key(stem.strip_prefix(&name_prefix)?);
            Some((key, path))
        })
        .collect();
    keyed.sort();

    keyed
        .into_iter()
        .map(|(_, path)| -> Result<BackupInfo, GuardError> {
            let bytes = file_size(&path)?;
            Ok(BackupInfo { path, bytes })
        })
        .collect()
}

/// Delete the oldest backups so that at most `keep` remain.
pub fn prune_backups(
    backup_dir: &Path,
    prefix: &str,
    keep: usize,
) -> Result<Vec<PathBuf>, GuardError> {
    let backups = list_backups(backup_dir, prefix)?;
    let excess = backups.len().saturating_sub(keep);
    let mut removed = Vec::with_capacity(excess);
    for backup in backups.into_iter().take(excess) {
        std::fs::remove_file(&backup.path).map_err(|e| IoError::Remove {
            path: backup.path.display().to_string(),
            message: e.to_string(),
        })?;
        info!(backup = %backup.path.display(), "pruned old backup");
        removed.push(backup.path);
    }
    Ok(removed)
}

/// Chronological sort key for `<stamp>` or `<stamp>-<n>`.
///
/// Plain name order would put `<stamp>-1` before `<stamp>`, since `-`
/// sorts below `.`.
fn order_key(rest: &str) -> (String, u64) {
    if let Some((stamp, n)) = rest.rsplit_once('-') {
        if stamp.len() == STAMP_LEN {
            if let Ok(n) = n.parse() {
                return (stamp.to_string(), n);
            }
        }
    }
    (rest.to_string(), 0)
}

fn copy_database(src: &Connection, dst: &mut Connection) -> Result<(), DataAccessError> {
    let backup = Backup::new(src, dst).map_err(|e| DataAccessError::Backup {
        message: format!("init backup: {e}"),
    })?;
    backup
        .run_to_completion(PAGES_PER_STEP, STEP_PAUSE, None)
        .map_err(|e| DataAccessError::Backup {
            message: format!("run backup: {e}"),
        })
}

fn file_size(path: &Path) -> Result<u64, IoError> {
    std::fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| IoError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}
