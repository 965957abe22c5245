// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the store engine

use thiserror::Error;

/// Errors that can surface from store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("not found: {entity}/{key}")]
    NotFound { entity: &'static str, key: String },
}

/// Structural decode failures. Codec-level fallbacks never raise; only a
/// line whose shape does not match the schema ends up here.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(
        "malformed row in {entity} store (line {line_no}): expected {expected} fields, found {found}: {line:?}"
    )]
    MalformedRow {
        entity: &'static str,
        line_no: usize,
        expected: usize,
        found: usize,
        line: String,
    },
}
