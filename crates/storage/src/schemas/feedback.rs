// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Feedback store schema

use crate::codec::{FieldCodec, TimestampFallback};
use crate::record::{Record, Value};
use crate::repository::StoreEntity;
use crate::schema::{FieldDef, Schema};
use hackdesk_core::Feedback;

pub static SCHEMA: Schema = Schema {
    entity: "feedback",
    file_name: "feedback.csv",
    fields: &[
        FieldDef {
            name: "id",
            codec: FieldCodec::NullableText,
            key: true,
        },
        FieldDef {
            name: "author",
            codec: FieldCodec::NullableText,
            key: false,
        },
        FieldDef {
            name: "team",
            codec: FieldCodec::NullableText,
            key: false,
        },
        FieldDef {
            name: "comment",
            codec: FieldCodec::NullableText,
            key: false,
        },
        FieldDef {
            name: "rating",
            codec: FieldCodec::Count,
            key: false,
        },
        FieldDef {
            name: "created_at",
            codec: FieldCodec::Timestamp {
                missing: TimestampFallback::Now,
            },
            key: false,
        },
    ],
};

impl StoreEntity for Feedback {
    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn to_record(&self) -> Record {
        Record::new()
            .with("id", Value::Text(Some(self.id.clone())))
            .with("author", Value::Text(Some(self.author.clone())))
            .with("team", Value::Text(Some(self.team.clone())))
            .with("comment", Value::Text(self.comment.clone()))
            .with("rating", Value::Count(self.rating))
            .with("created_at", Value::Timestamp(self.created_at))
    }

    fn from_record(record: &Record) -> Self {
        Self {
            id: record.text("id").unwrap_or_default(),
            author: record.text("author").unwrap_or_default(),
            team: record.text("team").unwrap_or_default(),
            comment: record.text("comment"),
            rating: record.count("rating"),
            created_at: record.timestamp("created_at"),
        }
    }

    fn key(&self) -> String {
        self.id.clone()
    }
}
