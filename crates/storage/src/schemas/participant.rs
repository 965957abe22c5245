// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Participant store schema

use crate::codec::{FieldCodec, TimestampFallback};
use crate::record::{Record, Value};
use crate::repository::StoreEntity;
use crate::schema::{FieldDef, Schema};
use hackdesk_core::{Participant, ParticipantRole};

pub static SCHEMA: Schema = Schema {
    entity: "participant",
    file_name: "participants.csv",
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
            name: "email",
            codec: FieldCodec::NullableText,
            key: false,
        },
        FieldDef {
            name: "role",
            codec: FieldCodec::Symbol {
                variants: ParticipantRole::NAMES,
                default: "hacker",
            },
            key: false,
        },
        FieldDef {
            name: "skills",
            codec: FieldCodec::List { separator: ';' },
            key: false,
        },
        FieldDef {
            name: "registered_at",
            codec: FieldCodec::Timestamp {
                missing: TimestampFallback::Now,
            },
            key: false,
        },
    ],
};

impl StoreEntity for Participant {
    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn to_record(&self) -> Record {
        Record::new()
            .with("id", Value::Text(Some(self.id.clone())))
            .with("name", Value::Text(Some(self.name.clone())))
            .with("email", Value::Text(self.email.clone()))
            .with("role", Value::Symbol(self.role.name().to_string()))
            .with("skills", Value::List(self.skills.clone()))
            .with("registered_at", Value::Timestamp(self.registered_at))
    }

    fn from_record(record: &Record) -> Self {
        Self {
            id: record.text("id").unwrap_or_default(),
            name: record.text("name").unwrap_or_default(),
            email: record.text("email"),
            role: ParticipantRole::parse(&record.symbol("role")),
            skills: record.list("skills"),
            registered_at: record.timestamp("registered_at"),
        }
    }

    fn key(&self) -> String {
        self.id.clone()
    }
}
