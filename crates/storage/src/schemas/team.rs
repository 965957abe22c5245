// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Team store schema

use crate::codec::{FieldCodec, TimestampFallback};
use crate::record::{Record, Value};
use crate::repository::StoreEntity;
use crate::schema::{FieldDef, Schema};
use hackdesk_core::Team;

pub static SCHEMA: Schema = Schema {
    entity: "team",
    file_name: "teams.csv",
    fields: &[
        FieldDef {
            name: "id",
            codec: FieldCodec::NullableText,
            key: true,
        },
        FieldDef {
            name: "name",
            codec: FieldCodec::NullableText,
            key: false,
        },
        FieldDef {
            name: "description",
            codec: FieldCodec::NullableText,
            key: false,
        },
        FieldDef {
            name: "category",
            codec: FieldCodec::NullableText,
            key: false,
        },
        FieldDef {
            name: "members",
            codec: FieldCodec::List { separator: ';' },
            key: false,
        },
        FieldDef {
            name: "open_to_members",
            codec: FieldCodec::Flag,
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

impl StoreEntity for Team {
    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn to_record(&self) -> Record {
        Record::new()
            .with("id", Value::Text(Some(self.id.clone())))
            .with("name", Value::Text(Some(self.name.clone())))
            .with("description", Value::Text(self.description.clone()))
            .with("category", Value::Text(Some(self.category.clone())))
            .with("members", Value::List(self.members.clone()))
            .with("open_to_members", Value::Flag(self.open_to_members))
            .with("created_at", Value::Timestamp(self.created_at))
    }

    fn from_record(record: &Record) -> Self {
        Self {
            id: record.text("id").unwrap_or_default(),
            name: record.text("name").unwrap_or_default(),
            description: record.text("description"),
            category: record.text("category").unwrap_or_default(),
            members: record.list("members"),
            open_to_members: record.flag("open_to_members"),
            created_at: record.timestamp("created_at"),
        }
    }

    fn key(&self) -> String {
        self.id.clone()
    }
}
