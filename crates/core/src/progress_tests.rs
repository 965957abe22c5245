// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::clock::FakeClock;
use chrono::{Duration, TimeZone};

#[test]
fn record_sets_note_and_time() {
    let clock = FakeClock::at(Utc.with_ymd_and_hms(2026, 4, 4, 9, 0, 0).unwrap());
    let mut progress = ProgressUpdate::new("g-1", "Rocket");
    progress.record("kickoff", 5, &clock);

    assert_eq!(progress.note.as_deref(), Some("kickoff"));
    assert_eq!(progress.percent, 5);
    assert_eq!(progress.recorded_at, Some(clock.now()));
    assert!(progress.history.is_empty());
}

#[test]
fn record_pushes_previous_note_into_history() {
    let start = Utc.with_ymd_and_hms(2026, 4, 4, 9, 0, 0).unwrap();
    let clock = FakeClock::at(start);
    let mut progress = ProgressUpdate::new("g-1", "Rocket");

    progress.record("kickoff", 5, &clock);
    clock.advance(Duration::hours(6));
    progress.record("backend wired", 40, &clock);

    assert_eq!(progress.history.len(), 1);
    assert_eq!(progress.history[0].value, "kickoff");
    assert_eq!(progress.history[0].at, start);
    assert_eq!(progress.note.as_deref(), Some("backend wired"));
}

#[test]
fn percent_is_clamped() {
    let clock = FakeClock::new();
    let mut progress = ProgressUpdate::new("g-1", "Rocket");
    progress.record("done and then some", 180, &clock);
    assert_eq!(progress.percent, 100);
    progress.record("negative drift", -3, &clock);
    assert_eq!(progress.percent, 0);
}
