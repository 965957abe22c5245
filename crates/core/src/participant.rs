// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Participant entity
//!
//! A participant is anyone registered for the hackathon. Participants are
//! keyed by a generated id and referenced from teams by that id.

use crate::clock::Clock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The role a participant plays in the event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipantRole {
    #[default]
    Hacker,
    Organizer,
    Volunteer,
}

impl ParticipantRole {
    /// Every role name, in declaration order
    pub const NAMES: &'static [&'static str] = &["hacker", "organizer", "volunteer"];

    pub fn name(&self) -> &'static str {
        match self {
            ParticipantRole::Hacker => "hacker",
            ParticipantRole::Organizer => "organizer",
            ParticipantRole::Volunteer => "volunteer",
        }
    }

    /// Total lookup by name. Unknown or empty names map to the default
    /// role rather than failing.
    pub fn parse(name: &str) -> Self {
        match name {
            "organizer" => ParticipantRole::Organizer,
            "volunteer" => ParticipantRole::Volunteer,
            _ => ParticipantRole::Hacker,
        }
    }
}

/// One registered participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub role: ParticipantRole,
    pub skills: Vec<String>,
    pub registered_at: Option<DateTime<Utc>>,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
            role: ParticipantRole::default(),
            skills: Vec::new(),
            registered_at: Some(clock.now()),
        }
    }
}

#[cfg(test)]
#[path = "participant_tests.rs"]
mod tests;
