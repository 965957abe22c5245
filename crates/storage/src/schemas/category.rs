// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Category store schema

use crate::codec::FieldCodec;
use crate::record::{Record, Value};
use crate::repository::StoreEntity;
use crate::schema::{FieldDef, Schema};
use hackdesk_core::Category;

pub static SCHEMA: Schema = Schema {
    entity: "category",
    file_name: "categories.csv",
    fields: &[
        FieldDef {
            name: "name",
            codec: FieldCodec::NullableText,
            key: true,
        },
        FieldDef {
            name: "description",
            codec: FieldCodec::NullableText,
            key: false,
        },
        FieldDef {
            name: "max_teams",
            codec: FieldCodec::Count,
            key: false,
        },
        FieldDef {
            name: "open",
            codec: FieldCodec::Flag,
            key: false,
        },
    ],
};

impl StoreEntity for Category {
    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn to_record(&self) -> Record {
        Record::new()
            .with("name", Value::Text(Some(self.name.clone())))
            .with("description", Value::Text(self.description.clone()))
            .with("max_teams", Value::Count(self.max_teams))
            .with("open", Value::Flag(self.open))
    }

    fn from_record(record: &Record) -> Self {
        Self {
            name: record.text("name").unwrap_or_default(),
            description: record.text("description"),
            max_teams: record.count("max_teams"),
            open: record.flag("open"),
        }
    }

    fn key(&self) -> String {
        self.name.clone()
    }
}
