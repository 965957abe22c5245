// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress update entity
//!
//! Rolling status for a team: a current note plus the history of earlier
//! notes as timestamped entries.

use crate::clock::Clock;
use crate::entry::Entry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A team's progress record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub id: String,
    pub team: String,
    pub note: Option<String>,
    pub percent: i64,
    pub history: Vec<Entry>,
    /// When the current note was recorded. Unlike other entity timestamps
    /// this stays `None` when the stored value is missing or malformed.
    pub recorded_at: Option<DateTime<Utc>>,
}

impl ProgressUpdate {
    pub fn new(id: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            team: team.into(),
            note: None,
            percent: 0,
            history: Vec::new(),
            recorded_at: None,
        }
    }

    /// Record a new note, pushing the previous one into history
    pub fn record(&mut self, note: impl Into<String>, percent: i64, clock: &impl Clock) {
        let now = clock.now();
        if let (Some(prev), Some(at)) = (self.note.take(), self.recorded_at) {
            self.history.push(Entry::new(prev, at));
        }
        self.note = Some(note.into());
        self.percent = percent.clamp(0, 100);
        self.recorded_at = Some(now);
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
