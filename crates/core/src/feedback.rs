// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Feedback entity
//!
//! Free-text feedback left for a team. The comment is the classic lossy
//! field: commas and newlines are normalized when persisted.

use crate::clock::Clock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One feedback entry for a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub author: String,
    pub team: String,
    pub comment: Option<String>,
    pub rating: i64,
    pub created_at: Option<DateTime<Utc>>,
}

impl Feedback {
    pub fn new(
        id: impl Into<String>,
        author: impl Into<String>,
        team: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            team: team.into(),
            comment: None,
            rating: 0,
            created_at: Some(clock.now()),
        }
    }
}

#[cfg(test)]
#[path = "feedback_tests.rs"]
mod tests;
