// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hackdesk-core: Domain types for the hackdesk hackathon manager
//!
//! This crate provides:
//! - Plain entity types (teams, projects, participants, mentors,
//!   feedback, progress updates, categories)
//! - Closed enums with named defaults for symbolic fields
//! - Clock and ID generation abstractions

pub mod clock;
pub mod id;

pub mod category;
pub mod entry;
pub mod feedback;
pub mod mentor;
pub mod participant;
pub mod progress;
pub mod project;
pub mod team;

// Re-exports
pub use category::Category;
pub use clock::{Clock, FakeClock, SystemClock};
pub use entry::Entry;
pub use feedback::Feedback;
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use mentor::Mentor;
pub use participant::{Participant, ParticipantRole};
pub use progress::ProgressUpdate;
pub use project::{Project, ProjectStatus};
pub use team::Team;
