// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress store schema
//!
//! `recorded_at` is the one shipped field with the `Nil` timestamp
//! policy: a missing or malformed value reads back as `None`, never as
//! the current time.

use crate::codec::{EntryFormat, FieldCodec, TimestampFallback};
use crate::record::{Record, Value};
use crate::repository::StoreEntity;
use crate::schema::{FieldDef, Schema};
use hackdesk_core::ProgressUpdate;

pub static SCHEMA: Schema = Schema {
    entity: "progress",
    file_name: "progress.csv",
    fields: &[
        FieldDef {
            name: "id",
            codec: FieldCodec::NullableText,
            key: true,
        },
        FieldDef {
            name: "team",
            codec: FieldCodec::NullableText,
            key: false,
        },
        FieldDef {
            name: "note",
            codec: FieldCodec::NullableText,
            key: false,
        },
        FieldDef {
            name: "percent",
            codec: FieldCodec::Count,
            key: false,
        },
        FieldDef {
            name: "history",
            codec: FieldCodec::Entries {
                separator: '|',
                format: EntryFormat::Tuple,
            },
            key: false,
        },
        FieldDef {
            name: "recorded_at",
            codec: FieldCodec::Timestamp {
                missing: TimestampFallback::Nil,
            },
            key: false,
        },
    ],
};

impl StoreEntity for ProgressUpdate {
    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn to_record(&self) -> Record {
        Record::new()
            .with("id", Value::Text(Some(self.id.clone())))
            .with("team", Value::Text(Some(self.team.clone())))
            .with("note", Value::Text(self.note.clone()))
            .with("percent", Value::Count(self.percent))
            .with("history", Value::Entries(self.history.clone()))
            .with("recorded_at", Value::Timestamp(self.recorded_at))
    }

    fn from_record(record: &Record) -> Self {
        Self {
            id: record.text("id").unwrap_or_default(),
            team: record.text("team").unwrap_or_default(),
            note: record.text("note"),
            percent: record.count("percent"),
            history: record.entries("history"),
            recorded_at: record.timestamp("recorded_at"),
        }
    }

    fn key(&self) -> String {
        self.id.clone()
    }
}
