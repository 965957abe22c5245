//! Upsert semantics: insert-or-replace by key, whole-file rewrite.

use crate::prelude::*;
use std::fs;

#[test]
fn empty_store_lists_nothing() {
    let (_dir, repo) = team_store();
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn upsert_then_find_returns_the_members() {
    let (_dir, repo) = team_store();
    repo.upsert(&rocket()).unwrap();

    let team = repo.find_by_key("T1").unwrap().unwrap();
    assert_eq!(team.members, vec!["u1", "u2"]);
}

#[test]
fn second_upsert_with_same_key_wins() {
    let (_dir, repo) = team_store();
    repo.upsert(&rocket()).unwrap();

    let mut replacement = rocket();
    replacement.members = vec!["u1".to_string(), "u3".to_string()];
    repo.upsert(&replacement).unwrap();

    // exactly one row for T1 in the file
    let content = fs::read_to_string(repo.path()).unwrap();
    let t1_rows = content.lines().filter(|l| l.starts_with("T1,")).count();
    assert_eq!(t1_rows, 1);

    let team = repo.find_by_key("T1").unwrap().unwrap();
    assert_eq!(team.members, vec!["u1", "u3"]);
}

#[test]
fn upsert_preserves_other_rows() {
    let (_dir, repo) = team_store();
    repo.upsert(&rocket()).unwrap();

    let mut other = rocket();
    other.id = "T2".to_string();
    other.name = "Comet".to_string();
    repo.upsert(&other).unwrap();

    let mut replacement = rocket();
    replacement.open_to_members = false;
    repo.upsert(&replacement).unwrap();

    let all = repo.list_all().unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().any(|t| t.id == "T2" && t.name == "Comet"));
}

#[test]
fn every_read_comes_fresh_from_disk() {
    let (_dir, repo) = team_store();
    repo.upsert(&rocket()).unwrap();

    // mutate the file behind the repository's back
    let content = fs::read_to_string(repo.path()).unwrap();
    fs::write(repo.path(), content.replace("Rocket", "Renamed")).unwrap();

    assert_eq!(repo.find_by_key("T1").unwrap().unwrap().name, "Renamed");
}
