// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-entity schema descriptors
//!
//! A schema is pure static data: the ordered field list with one field
//! marked as the key, the store file name, and the derived header line.
//! The schema knows how to turn one line into a [`Record`] and back; it
//! never repairs a line whose field count does not match.

use crate::codec::{DecodeCtx, FieldCodec, FIELD_SEPARATOR};
use crate::error::ParseError;
use crate::record::Record;

/// One field: name, codec, and whether it is the unique key
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    pub codec: FieldCodec,
    pub key: bool,
}

/// Immutable descriptor for one entity type's store
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub entity: &'static str,
    pub file_name: &'static str,
    pub fields: &'static [FieldDef],
}

impl Schema {
    /// The canonical header line: comma-joined field names
    pub fn header(&self) -> String {
        self.fields
            .iter()
            .map(|f| f.name)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// The field marked as the unique key. Schemas are declared with
    /// exactly one; the first field is the fallback if a declaration
    /// ever drops the marker.
    pub fn key_field(&self) -> Option<&FieldDef> {
        self.fields
            .iter()
            .find(|f| f.key)
            .or_else(|| self.fields.first())
    }

    /// The encoded key value of a record
    pub fn key_of(&self, record: &Record) -> String {
        let Some(field) = self.key_field() else {
            return String::new();
        };
        record
            .get(field.name)
            .map(|value| field.codec.encode(value))
            .unwrap_or_default()
    }

    /// Split a data line into exactly one part per field. A count
    /// mismatch is a structural error, never repaired here.
    pub fn split_line<'a>(
        &self,
        line: &'a str,
        line_no: usize,
    ) -> Result<Vec<&'a str>, ParseError> {
        let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if parts.len() != self.fields.len() {
            return Err(ParseError::MalformedRow {
                entity: self.entity,
                line_no,
                expected: self.fields.len(),
                found: parts.len(),
                line: line.to_string(),
            });
        }
        Ok(parts)
    }

    /// Decode one data line into a record
    pub fn decode_line(
        &self,
        line: &str,
        line_no: usize,
        ctx: &DecodeCtx,
    ) -> Result<Record, ParseError> {
        let parts = self.split_line(line, line_no)?;
        let mut record = Record::new();
        for (field, raw) in self.fields.iter().zip(parts) {
            record.push(field.name, field.codec.decode(raw, ctx));
        }
        Ok(record)
    }

    /// Encode a record into one data line, fields in schema order. Total:
    /// a missing field encodes as the empty string, which decodes back to
    /// that codec's fallback.
    pub fn encode_record(&self, record: &Record) -> String {
        self.fields
            .iter()
            .map(|field| {
                record
                    .get(field.name)
                    .map(|value| field.codec.encode(value))
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>()
            .join(&FIELD_SEPARATOR.to_string())
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
