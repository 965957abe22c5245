//! Decode fallbacks observed through the full store stack.

use crate::prelude::*;
use hackdesk_core::{Clock, FakeClock, Participant, ParticipantRole, ProgressUpdate};
use hackdesk_storage::Repository;
use std::fs;

#[test]
fn unknown_role_reads_back_as_the_default() {
    let dir = tempfile::tempdir().unwrap();
    let repo: Repository<Participant, FakeClock> = Repository::with_clock(dir.path(), clock());

    fs::write(
        dir.path().join("participants.csv"),
        "id,name,email,role,skills,registered_at\n\
         p-1,Ada,,cheerleader,rust;embedded,2026-06-20T09:00:00Z\n",
    )
    .unwrap();

    let participant = repo.find_by_key("p-1").unwrap().unwrap();
    assert_eq!(participant.role, ParticipantRole::Hacker);
    assert_eq!(participant.skills, vec!["rust", "embedded"]);
}

#[test]
fn garbage_timestamp_with_now_policy_reads_as_the_clock_time() {
    let dir = tempfile::tempdir().unwrap();
    let clock = clock();
    let repo: Repository<Participant, FakeClock> =
        Repository::with_clock(dir.path(), clock.clone());

    fs::write(
        dir.path().join("participants.csv"),
        "id,name,email,role,skills,registered_at\n\
         p-1,Ada,,hacker,,last tuesday\n",
    )
    .unwrap();

    let participant = repo.find_by_key("p-1").unwrap().unwrap();
    assert_eq!(participant.registered_at, Some(clock.now()));
}

#[test]
fn garbage_timestamp_with_nil_policy_reads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let repo: Repository<ProgressUpdate, FakeClock> =
        Repository::with_clock(dir.path(), clock());

    fs::write(
        dir.path().join("progress.csv"),
        "id,team,note,percent,history,recorded_at\n\
         g-1,T1,api stubbed,25,scaffolding~2026-06-20T08:00:00Z,bogus\n",
    )
    .unwrap();

    let progress = repo.find_by_key("g-1").unwrap().unwrap();
    assert_eq!(progress.recorded_at, None);
    assert_eq!(progress.history.len(), 1);
    assert_eq!(progress.history[0].value, "scaffolding");
}

#[test]
fn bad_counters_and_flags_use_their_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let repo: Repository<ProgressUpdate, FakeClock> =
        Repository::with_clock(dir.path(), clock());

    fs::write(
        dir.path().join("progress.csv"),
        "id,team,note,percent,history,recorded_at\n\
         g-1,T1,,almost,,\n",
    )
    .unwrap();

    let progress = repo.find_by_key("g-1").unwrap().unwrap();
    assert_eq!(progress.percent, 0);
    assert_eq!(progress.note, None);
}
