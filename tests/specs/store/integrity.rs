//! Startup integrity: create missing files, repair bad headers.

use hackdesk_storage::{schemas, FileStatus, Integrity};
use similar_asserts::assert_eq;
use std::fs;

#[test]
fn first_boot_creates_header_only_files() {
    let dir = tempfile::tempdir().unwrap();
    let report = Integrity::new(dir.path()).ensure_all().unwrap();

    assert_eq!(report.created.len(), schemas::all().len());
    for schema in schemas::all() {
        let content = fs::read_to_string(dir.path().join(schema.file_name)).unwrap();
        assert_eq!(content, format!("{}\n", schema.header()));
    }
}

#[test]
fn wrong_header_is_replaced_and_data_rows_survive_unmodified() {
    let dir = tempfile::tempdir().unwrap();
    let schema = &schemas::team::SCHEMA;
    let path = dir.path().join(schema.file_name);

    let rows = "T1,Rocket,,ai,u1;u2,true,2026-06-20T09:00:00Z\n\
                T2,Comet,,fintech,,false,2026-06-20T10:00:00Z\n";
    fs::write(&path, format!("name,oops\n{rows}")).unwrap();

    let report = Integrity::new(dir.path()).ensure_all().unwrap();
    assert!(report.repaired.contains(&"team"));

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, format!("{}\n{rows}", schema.header()));
}

#[test]
fn check_is_read_only() {
    let dir = tempfile::tempdir().unwrap();
    let integrity = Integrity::new(dir.path());
    let schema = &schemas::category::SCHEMA;

    assert!(!integrity.check(schema).unwrap());
    assert!(!dir.path().join(schema.file_name).exists());

    assert_eq!(integrity.ensure(schema).unwrap(), FileStatus::Created);
    assert!(integrity.check(schema).unwrap());
}
