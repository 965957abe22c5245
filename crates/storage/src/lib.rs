// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hackdesk-storage: flat-file entity stores
//!
//! One file per entity type under a data directory. Line 1 is a header
//! naming the fields; every other line is one record, fields joined by a
//! comma. Codecs keep encoding total: free text is sanitized (lossy),
//! malformed values decode to documented per-field fallbacks, and only
//! structural problems (field-count mismatch, I/O) surface as errors.
//!
//! This is not a database: full-file rewrite per mutation, linear scans,
//! no locking. Two writers on the same store race and the last rewrite
//! wins. Rewrites go through a temp file plus atomic rename so a crash
//! cannot truncate a store mid-write.

mod codec;
mod config;
mod error;
mod integrity;
mod record;
mod repository;
mod schema;
pub mod schemas;

pub use codec::{DecodeCtx, EntryFormat, FieldCodec, TimestampFallback, FIELD_SEPARATOR};
pub use config::{ConfigError, StoreConfig};
pub use error::{ParseError, StoreError};
pub use integrity::{FileStatus, Integrity, IntegrityReport};
pub use record::{Record, Value};
pub use repository::{Repository, StoreEntity};
pub use schema::{FieldDef, Schema};
