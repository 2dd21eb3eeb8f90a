//! End-to-end row-count guard against real SQLite files.
//! Covers OK/DRIFT scenarios, accept semantics, missing baselines,
//! tolerant collection and the read-only guarantee.

use std::path::Path;

use rowguard_core::errors::{ConfigError, DataAccessError, GuardError};
use rowguard_core::{BaselineManager, BaselineStore, CountSource, Verdict};
use rowguard_storage::SqliteCollector;
use rusqlite::Connection;
use tempfile::tempdir;

fn create_providers_db(path: &Path, vendors: usize) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        "CREATE TABLE vendors (id INTEGER PRIMARY KEY, business_name TEXT NOT NULL);
         CREATE TABLE categories (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
         CREATE TABLE services (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
         INSERT INTO categories (name) VALUES ('Plumbing'), ('Roofing');
         INSERT INTO services (name) VALUES ('Repair');",
    )
    .unwrap();
    insert_vendors(path, vendors);
}

fn insert_vendors(path: &Path, n: usize) {
    let conn = Connection::open(path).unwrap();
    for i in 0..n {
        conn.execute(
            "INSERT INTO vendors (business_name) VALUES (?1)",
            [format!("Vendor {i}")],
        )
        .unwrap();
    }
}

fn manager(dir: &Path, strict: bool) -> BaselineManager<SqliteCollector> {
    BaselineManager::new(
        SqliteCollector::new(dir.join("providers.db"), strict),
        vec!["vendors".to_string()],
        BaselineStore::new(dir.join(".rowcounts.json")),
        dir.join("current.json"),
    )
}

#[test]
fn baseline_matches_current_counts() {
    let dir = tempdir().unwrap();
    create_providers_db(&dir.path().join("providers.db"), 120);
    std::fs::write(dir.path().join(".rowcounts.json"), r#"{"vendors": 120}"#).unwrap();

    let (current, verdict) = manager(dir.path(), true).check().unwrap();
    assert_eq!(current.get("vendors"), Some(120));
    assert_eq!(verdict, Verdict::Ok);
}

#[test]
fn inserted_row_is_drift_with_diff() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("providers.db");
    create_providers_db(&db, 120);
    std::fs::write(dir.path().join(".rowcounts.json"), r#"{"vendors": 120}"#).unwrap();
    insert_vendors(&db, 1);

    let (_, verdict) = manager(dir.path(), true).check().unwrap();
    let Verdict::Drift(report) = verdict else {
        panic!("expected drift");
    };
    assert!(report.diff.contains("-  \"vendors\": 120"));
    assert!(report.diff.contains("+  \"vendors\": 121"));
}

#[test]
fn accept_rewrites_baseline_and_next_check_is_ok() {
    let dir = tempdir().unwrap();
    create_providers_db(&dir.path().join("providers.db"), 121);
    std::fs::write(dir.path().join(".rowcounts.json"), r#"{"vendors": 120}"#).unwrap();

    let m = manager(dir.path(), true);
    m.accept().unwrap();

    let stored = std::fs::read_to_string(dir.path().join(".rowcounts.json")).unwrap();
    assert_eq!(stored, "{\n  \"vendors\": 121\n}\n");
    assert!(m.check().unwrap().1.is_ok());
}

#[test]
fn deleted_baseline_is_configuration_error() {
    let dir = tempdir().unwrap();
    create_providers_db(&dir.path().join("providers.db"), 3);
    let m = manager(dir.path(), true);
    m.accept().unwrap();
    std::fs::remove_file(m.store().path()).unwrap();

    let err = m.check().unwrap_err();
    assert!(matches!(
        err,
        GuardError::Config(ConfigError::BaselineMissing { .. })
    ));
}

#[test]
fn refresh_is_idempotent_and_leaves_baseline_alone() {
    let dir = tempdir().unwrap();
    create_providers_db(&dir.path().join("providers.db"), 7);
    let m = manager(dir.path(), true);

    let first = m.refresh().unwrap();
    let second = m.refresh().unwrap();
    assert_eq!(first, second);
    assert!(!m.store().exists());
    assert_eq!(
        std::fs::read_to_string(m.staging_path()).unwrap(),
        "{\n  \"vendors\": 7\n}\n"
    );
}

#[test]
fn failed_accept_keeps_previous_baseline() {
    let dir = tempdir().unwrap();
    create_providers_db(&dir.path().join("providers.db"), 5);
    let baseline = dir.path().join(".rowcounts.json");
    std::fs::write(&baseline, "{\"vendors\": 4}").unwrap();

    // Staging path inside a missing directory makes refresh fail before
    // the baseline is replaced.
    let m = BaselineManager::new(
        SqliteCollector::new(dir.path().join("providers.db"), true),
        vec!["vendors".to_string()],
        BaselineStore::new(&baseline),
        dir.path().join("missing").join("current.json"),
    );
    assert!(matches!(m.accept(), Err(GuardError::Io(_))));
    assert_eq!(std::fs::read_to_string(&baseline).unwrap(), "{\"vendors\": 4}");
}

#[test]
fn strict_collector_fails_on_missing_database() {
    let dir = tempdir().unwrap();
    let collector = SqliteCollector::new(dir.path().join("absent.db"), true);
    let err = collector.collect(&["vendors".to_string()]).unwrap_err();
    assert!(matches!(err, DataAccessError::Open { .. }));
    assert!(!dir.path().join("absent.db").exists());
}

#[test]
fn tolerant_collector_degrades() {
    let dir = tempdir().unwrap();
    let missing = SqliteCollector::new(dir.path().join("absent.db"), false);
    assert!(missing.collect(&["vendors".to_string()]).unwrap().is_empty());

    let db = dir.path().join("providers.db");
    create_providers_db(&db, 2);
    let partial = SqliteCollector::new(&db, false)
        .collect(&["vendors".to_string(), "ghosts".to_string()])
        .unwrap();
    assert_eq!(partial.get("vendors"), Some(2));
    assert_eq!(partial.get("ghosts"), Some(0));
}

#[test]
fn dropped_table_shows_up_as_drift_in_tolerant_mode() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("providers.db");
    create_providers_db(&db, 2);
    let m = BaselineManager::new(
        SqliteCollector::new(&db, false),
        vec!["vendors".to_string(), "services".to_string()],
        BaselineStore::new(dir.path().join(".rowcounts.json")),
        dir.path().join("current.json"),
    );
    m.accept().unwrap();
    Connection::open(&db)
        .unwrap()
        .execute_batch("DROP TABLE services;")
        .unwrap();

    assert!(!m.check().unwrap().1.is_ok());
}

#[test]
fn tolerant_accept_with_unreachable_database_keeps_baseline() {
    let dir = tempdir().unwrap();
    let baseline = dir.path().join(".rowcounts.json");
    std::fs::write(&baseline, "{\n  \"vendors\": 120\n}\n").unwrap();

    let m = BaselineManager::new(
        SqliteCollector::new(dir.path().join("typo.db"), false),
        vec!["vendors".to_string()],
        BaselineStore::new(&baseline),
        dir.path().join("current.json"),
    );
    let err = m.accept().unwrap_err();
    assert!(matches!(err, GuardError::DataAccess(DataAccessError::Open { .. })));
    assert_eq!(
        std::fs::read_to_string(&baseline).unwrap(),
        "{\n  \"vendors\": 120\n}\n"
    );
    assert!(!dir.path().join("typo.db").exists());

    // Tolerant checks still degrade instead of failing.
    assert!(!m.check().unwrap().1.is_ok());
}

#[test]
fn tolerant_accept_with_missing_table_keeps_baseline() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("providers.db");
    create_providers_db(&db, 2);
    let baseline = dir.path().join(".rowcounts.json");
    std::fs::write(&baseline, "{\"ghosts\": 9, \"vendors\": 2}").unwrap();

    let m = BaselineManager::new(
        SqliteCollector::new(&db, false),
        vec!["vendors".to_string(), "ghosts".to_string()],
        BaselineStore::new(&baseline),
        dir.path().join("current.json"),
    );
    assert!(matches!(m.accept(), Err(GuardError::DataAccess(_))));
    assert_eq!(
        std::fs::read_to_string(&baseline).unwrap(),
        "{\"ghosts\": 9, \"vendors\": 2}"
    );
}

#[cfg(unix)]
#[test]
fn failed_replace_keeps_previous_baseline_byte_identical() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    create_providers_db(&dir.path().join("providers.db"), 5);
    let committed = dir.path().join("committed");
    std::fs::create_dir(&committed).unwrap();
    let baseline = committed.join(".rowcounts.json");
    std::fs::write(&baseline, "{\n  \"vendors\": 4\n}\n").unwrap();
    std::fs::set_permissions(&committed, std::fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users ignore directory permissions; nothing to assert then.
    let writable = std::fs::write(committed.join("write-check"), b"").is_ok();
    if writable {
        std::fs::set_permissions(&committed, std::fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let m = BaselineManager::new(
        SqliteCollector::new(dir.path().join("providers.db"), true),
        vec!["vendors".to_string()],
        BaselineStore::new(&baseline),
        dir.path().join("current.json"),
    );
    let result = m.accept();
    std::fs::set_permissions(&committed, std::fs::Permissions::from_mode(0o755)).unwrap();

    assert!(matches!(result, Err(GuardError::Io(_))));
    assert!(dir.path().join("current.json").exists());
    assert_eq!(
        std::fs::read(&baseline).unwrap(),
        b"{\n  \"vendors\": 4\n}\n"
    );
    let names: Vec<String> = std::fs::read_dir(&committed)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, [".rowcounts.json"]);
}
