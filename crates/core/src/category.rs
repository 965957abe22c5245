// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Category entity

use serde::{Deserialize, Serialize};

/// A track teams compete in, keyed by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub description: Option<String>,
    pub max_teams: i64,
    pub open: bool,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            max_teams: 0,
            open: true,
        }
    }

    /// Check whether the category accepts another team.
    /// `max_teams == 0` means unlimited.
    pub fn accepts(&self, current_teams: i64) -> bool {
        self.open && (self.max_teams == 0 || current_teams < self.max_teams)
    }
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
