// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project entity
//!
//! The thing a team actually builds. Keyed by project name; `team` points
//! back at the owning team's name.

use crate::clock::Clock;
use crate::entry::Entry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a project is in its lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    Idea,
    Building,
    Submitted,
    Judged,
}

impl ProjectStatus {
    /// Every status name, in lifecycle order
    pub const NAMES: &'static [&'static str] = &["idea", "building", "submitted", "judged"];

    pub fn name(&self) -> &'static str {
        match self {
            ProjectStatus::Idea => "idea",
            ProjectStatus::Building => "building",
            ProjectStatus::Submitted => "submitted",
            ProjectStatus::Judged => "judged",
        }
    }

    /// Total lookup by name; unknown or empty names map to the default.
    pub fn parse(name: &str) -> Self {
        match name {
            "building" => ProjectStatus::Building,
            "submitted" => ProjectStatus::Submitted,
            "judged" => ProjectStatus::Judged,
            _ => ProjectStatus::Idea,
        }
    }

    /// Check if the project can still be edited by its team
    pub fn is_editable(&self) -> bool {
        matches!(self, ProjectStatus::Idea | ProjectStatus::Building)
    }
}

/// One team project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub team: String,
    pub summary: Option<String>,
    pub repo_url: Option<String>,
    pub status: ProjectStatus,
    pub attachments: Vec<Entry>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn new(name: impl Into<String>, team: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            summary: None,
            repo_url: None,
            status: ProjectStatus::default(),
            attachments: Vec::new(),
            updated_at: Some(clock.now()),
        }
    }

    /// Attach an artifact and bump the update time
    pub fn attach(&mut self, value: impl Into<String>, clock: &impl Clock) {
        let now = clock.now();
        self.attachments.push(Entry::new(value, now));
        self.updated_at = Some(now);
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
