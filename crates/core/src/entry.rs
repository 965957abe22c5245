// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamped value entries
//!
//! The shared element type for structured-list fields: project attachments
//! and progress history both store a free-text value with the time it was
//! recorded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped value in a structured list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub value: String,
    pub at: DateTime<Utc>,
}

impl Entry {
    pub fn new(value: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            at,
        }
    }
}
