//! Round-trip and lossy-normalization behavior.

use crate::prelude::*;
use hackdesk_core::{
    Category, Entry, FakeClock, Feedback, IdGen, Mentor, Project, ProjectStatus, SequentialIdGen,
};
use hackdesk_storage::Repository;

#[test]
fn clean_records_round_trip_exactly() {
    let (_dir, repo) = team_store();
    let team = rocket();
    repo.upsert(&team).unwrap();
    assert_eq!(repo.find_by_key("T1").unwrap().unwrap(), team);
}

#[test]
fn commas_in_free_text_normalize_to_semicolons() {
    let dir = tempfile::tempdir().unwrap();
    let repo: Repository<Feedback, FakeClock> = Repository::with_clock(dir.path(), clock());

    let mut fb = Feedback::new("f-1", "judge-2", "T1", &clock());
    fb.comment = Some("fast, focused, fun".to_string());
    repo.upsert(&fb).unwrap();

    // assert the normalized form, not the original
    let back = repo.find_by_key("f-1").unwrap().unwrap();
    assert_eq!(back.comment.as_deref(), Some("fast; focused; fun"));
}

#[test]
fn newlines_in_free_text_become_spaces() {
    let dir = tempfile::tempdir().unwrap();
    let repo: Repository<Feedback, FakeClock> = Repository::with_clock(dir.path(), clock());

    let mut fb = Feedback::new("f-2", "judge-5", "T1", &clock());
    fb.comment = Some("line one\nline two".to_string());
    repo.upsert(&fb).unwrap();

    let back = repo.find_by_key("f-2").unwrap().unwrap();
    assert_eq!(back.comment.as_deref(), Some("line one line two"));
}

#[test]
fn mentors_round_trip_under_generated_ids() {
    let dir = tempfile::tempdir().unwrap();
    let ids = SequentialIdGen::new("m");
    let repo: Repository<Mentor> = Repository::open(dir.path());

    let mut mentor = Mentor::new(ids.next(), "Grace");
    mentor.expertise = vec!["rust".to_string(), "databases".to_string()];
    mentor.assigned_teams = vec!["T1".to_string()];
    repo.upsert(&mentor).unwrap();

    let back = repo.find_by_key("m-1").unwrap().unwrap();
    assert_eq!(back, mentor);
}

#[test]
fn categories_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let repo: Repository<Category> = Repository::open(dir.path());

    let mut cat = Category::new("fintech");
    cat.description = Some("payments and ledgers".to_string());
    cat.max_teams = 8;
    repo.upsert(&cat).unwrap();

    let back = repo.find_by_key("fintech").unwrap().unwrap();
    assert_eq!(back, cat);
}

#[test]
fn projects_round_trip_with_attachments_and_status() {
    let dir = tempfile::tempdir().unwrap();
    let repo: Repository<Project, FakeClock> = Repository::with_clock(dir.path(), clock());

    let mut project = Project::new("Pathfinder", "T1", &clock());
    project.status = ProjectStatus::Building;
    project.repo_url = Some("https://example.com/rocket/pathfinder".to_string());
    project.attachments = vec![
        Entry::new("pitch.pdf", event_day()),
        Entry::new("demo.mp4", event_day()),
    ];
    repo.upsert(&project).unwrap();

    let back = repo.find_by_key("Pathfinder").unwrap().unwrap();
    assert_eq!(back, project);
}
