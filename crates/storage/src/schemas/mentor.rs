// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mentor store schema

use crate::codec::FieldCodec;
use crate::record::{Record, Value};
use crate::repository::StoreEntity;
use crate::schema::{FieldDef, Schema};
use hackdesk_core::Mentor;

pub static SCHEMA: Schema = Schema {
    entity: "mentor",
    file_name: "mentors.csv",
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
            name: "expertise",
            codec: FieldCodec::List { separator: ';' },
            key: false,
        },
        FieldDef {
            name: "available",
            codec: FieldCodec::Flag,
            key: false,
        },
        FieldDef {
            name: "max_teams",
            codec: FieldCodec::Count,
            key: false,
        },
        FieldDef {
            name: "assigned_teams",
            codec: FieldCodec::List { separator: ';' },
            key: false,
        },
    ],
};

impl StoreEntity for Mentor {
    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn to_record(&self) -> Record {
        Record::new()
            .with("id", Value::Text(Some(self.id.clone())))
            .with("name", Value::Text(Some(self.name.clone())))
            .with("expertise", Value::List(self.expertise.clone()))
            .with("available", Value::Flag(self.available))
            .with("max_teams", Value::Count(self.max_teams))
            .with("assigned_teams", Value::List(self.assigned_teams.clone()))
    }

    fn from_record(record: &Record) -> Self {
        Self {
            id: record.text("id").unwrap_or_default(),
            name: record.text("name").unwrap_or_default(),
            expertise: record.list("expertise"),
            available: record.flag("available"),
            max_teams: record.count("max_teams"),
            assigned_teams: record.list("assigned_teams"),
        }
    }

    fn key(&self) -> String {
        self.id.clone()
    }
}
