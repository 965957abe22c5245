// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schema declarations for every entity store
//!
//! One module per entity: the static [`Schema`] plus the
//! [`StoreEntity`](crate::StoreEntity) conversions. Canonical encoding
//! choices, applied uniformly: plain lists join on `;`, structured lists
//! join on `|` in the `value~timestamp` form. Separators and entry
//! formats remain per-field schema declarations, never inferred.

use crate::schema::Schema;

pub mod category;
pub mod feedback;
pub mod mentor;
pub mod participant;
pub mod progress;
pub mod project;
pub mod team;

/// Every known schema, in integrity-pass order
pub fn all() -> &'static [&'static Schema] {
    static ALL: [&Schema; 7] = [
        &participant::SCHEMA,
        &team::SCHEMA,
        &project::SCHEMA,
        &mentor::SCHEMA,
        &feedback::SCHEMA,
        &progress::SCHEMA,
        &category::SCHEMA,
    ];
    &ALL
}
