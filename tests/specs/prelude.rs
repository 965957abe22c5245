//! Shared helpers for store specs.

use chrono::{DateTime, TimeZone, Utc};
use hackdesk_core::{FakeClock, Team};
use hackdesk_storage::Repository;
use tempfile::TempDir;

/// A fixed instant so timestamps compare exactly across encode/decode
pub fn event_day() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 20, 9, 0, 0).unwrap()
}

pub fn clock() -> FakeClock {
    FakeClock::at(event_day())
}

/// A fresh temp data dir plus a team repository bound to it
pub fn team_store() -> (TempDir, Repository<Team, FakeClock>) {
    let dir = tempfile::tempdir().unwrap();
    let repo = Repository::with_clock(dir.path(), clock());
    (dir, repo)
}

/// The recurring fixture team: key `T1`, name `Rocket`
pub fn rocket() -> Team {
    let mut team = Team::new("T1", "Rocket", &clock());
    team.category = "ai".to_string();
    team.add_member("u1");
    team.add_member("u2");
    team
}
