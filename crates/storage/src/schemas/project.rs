// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project store schema

use crate::codec::{EntryFormat, FieldCodec, TimestampFallback};
use crate::record::{Record, Value};
use crate::repository::StoreEntity;
use crate::schema::{FieldDef, Schema};
use hackdesk_core::{Project, ProjectStatus};

pub static SCHEMA: Schema = Schema {
    entity: "project",
    file_name: "projects.csv",
    fields: &[
        FieldDef {
            name: "name",
            codec: FieldCodec::NullableText,
            key: true,
        },
        FieldDef {
            name: "team",
            codec: FieldCodec::NullableText,
            key: false,
        },
        FieldDef {
            name: "summary",
            codec: FieldCodec::NullableText,
            key: false,
        },
        FieldDef {
            name: "repo_url",
            codec: FieldCodec::NullableText,
            key: false,
        },
        FieldDef {
            name: "status",
            codec: FieldCodec::Symbol {
                variants: ProjectStatus::NAMES,
                default: "idea",
            },
            key: false,
        },
        FieldDef {
            name: "attachments",
            codec: FieldCodec::Entries {
                separator: '|',
                format: EntryFormat::Tuple,
            },
            key: false,
        },
        FieldDef {
            name: "updated_at",
            codec: FieldCodec::Timestamp {
                missing: TimestampFallback::Now,
            },
            key: false,
        },
    ],
};

impl StoreEntity for Project {
    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn to_record(&self) -> Record {
        Record::new()
            .with("name", Value::Text(Some(self.name.clone())))
            .with("team", Value::Text(Some(self.team.clone())))
            .with("summary", Value::Text(self.summary.clone()))
            .with("repo_url", Value::Text(self.repo_url.clone()))
            .with("status", Value::Symbol(self.status.name().to_string()))
            .with("attachments", Value::Entries(self.attachments.clone()))
            .with("updated_at", Value::Timestamp(self.updated_at))
    }

    fn from_record(record: &Record) -> Self {
        Self {
            name: record.text("name").unwrap_or_default(),
            team: record.text("team").unwrap_or_default(),
            summary: record.text("summary"),
            repo_url: record.text("repo_url"),
            status: ProjectStatus::parse(&record.symbol("status")),
            attachments: record.entries("attachments"),
            updated_at: record.timestamp("updated_at"),
        }
    }

    fn key(&self) -> String {
        self.name.clone()
    }
}
