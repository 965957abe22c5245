//! Delete semantics: precise removal, explicit NotFound.

use crate::prelude::*;
use hackdesk_storage::StoreError;
use similar_asserts::assert_eq;
use std::fs;

#[test]
fn delete_removes_only_the_named_row() {
    let (_dir, repo) = team_store();
    for (id, name) in [("T1", "Rocket"), ("T2", "Comet"), ("T3", "Lander")] {
        let mut team = rocket();
        team.id = id.to_string();
        team.name = name.to_string();
        repo.upsert(&team).unwrap();
    }

    let before = fs::read_to_string(repo.path()).unwrap();
    repo.delete("T2").unwrap();
    let after = fs::read_to_string(repo.path()).unwrap();

    // every surviving row re-serializes byte-identically
    let expected: String = before
        .lines()
        .filter(|line| !line.starts_with("T2,"))
        .map(|line| format!("{line}\n"))
        .collect();
    assert_eq!(after, expected);
}

#[test]
fn delete_of_missing_key_is_an_explicit_not_found() {
    let (_dir, repo) = team_store();
    repo.upsert(&rocket()).unwrap();

    match repo.delete("T9") {
        Err(StoreError::NotFound { entity, key }) => {
            assert_eq!(entity, "team");
            assert_eq!(key, "T9");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }

    // nothing was rewritten
    assert_eq!(repo.list_all().unwrap().len(), 1);
}

#[test]
fn deleted_key_can_be_reinserted() {
    let (_dir, repo) = team_store();
    repo.upsert(&rocket()).unwrap();
    repo.delete("T1").unwrap();
    assert!(repo.find_by_key("T1").unwrap().is_none());

    repo.upsert(&rocket()).unwrap();
    assert!(repo.find_by_key("T1").unwrap().is_some());
}
