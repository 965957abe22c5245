// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mentor entity

use serde::{Deserialize, Serialize};

/// One mentor, with the teams currently assigned to them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: String,
    pub name: String,
    pub expertise: Vec<String>,
    pub available: bool,
    pub max_teams: i64,
    pub assigned_teams: Vec<String>,
}

impl Mentor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            expertise: Vec::new(),
            available: true,
            max_teams: 3,
            assigned_teams: Vec::new(),
        }
    }

    /// Check whether the mentor can take another team
    pub fn has_capacity(&self) -> bool {
        self.available && (self.assigned_teams.len() as i64) < self.max_teams
    }
}

#[cfg(test)]
#[path = "mentor_tests.rs"]
mod tests;
