// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Team entity
//!
//! Teams are keyed by id; the display name is free text. Members are
//! participant ids.

use crate::clock::Clock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One hackathon team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub members: Vec<String>,
    pub open_to_members: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            category: String::new(),
            members: Vec::new(),
            open_to_members: true,
            created_at: Some(clock.now()),
        }
    }

    /// Add a member id unless it is already present
    pub fn add_member(&mut self, participant_id: impl Into<String>) {
        let id = participant_id.into();
        if !self.members.contains(&id) {
            self.members.push(id);
        }
    }

    /// Remove a member id; no-op if absent
    pub fn remove_member(&mut self, participant_id: &str) {
        self.members.retain(|m| m != participant_id);
    }
}

#[cfg(test)]
#[path = "team_tests.rs"]
mod tests;
