// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field codecs
//!
//! One codec per field kind. Both directions are total: `encode` always
//! produces a string free of the outer field separator and line
//! terminators, and `decode` maps malformed input to a documented
//! per-field fallback instead of failing. Free-text sanitization is
//! lossy: a semicolon read back may have been a literal semicolon or a
//! substituted comma, and nothing records which.

use crate::record::Value;
use chrono::{DateTime, SecondsFormat, Utc};
use hackdesk_core::Entry;

/// The outer separator joining fields into a line
pub const FIELD_SEPARATOR: char = ',';

/// What a timestamp field decodes to when the stored value is missing
/// or malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFallback {
    /// Decode to `None`
    Nil,
    /// Decode to the current time
    Now,
}

/// How a structured-list element is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFormat {
    /// `value~timestamp`. The canonical format for every shipped field.
    Tuple,
    /// A JSON object per element, with commas transposed to semicolons so
    /// the element never carries the field separator. Legacy format; kept
    /// schema-declarable so old fields remain readable.
    Json,
}

/// Decode-time context. The `Now` timestamp fallback takes its value from
/// here so decoding stays deterministic under test.
#[derive(Debug, Clone, Copy)]
pub struct DecodeCtx {
    pub now: DateTime<Utc>,
}

impl DecodeCtx {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

/// A total two-way string/value converter for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCodec {
    /// Empty string is `None`; text is sanitized on encode (lossy)
    NullableText,
    /// Closed name set with an explicit decode default
    Symbol {
        variants: &'static [&'static str],
        default: &'static str,
    },
    /// RFC 3339 timestamp with a per-field missing-value policy
    Timestamp { missing: TimestampFallback },
    /// `"true"` / `"false"`; anything else decodes to `false`
    Flag,
    /// Integer; parse failure decodes to `0`
    Count,
    /// Scalar strings joined by a declared separator
    List { separator: char },
    /// Timestamped entries joined by a declared separator
    Entries {
        separator: char,
        format: EntryFormat,
    },
}

impl FieldCodec {
    /// Encode a value into its stored form. Total: a value of the wrong
    /// variant encodes as the field's empty/default form.
    pub fn encode(&self, value: &Value) -> String {
        match self {
            FieldCodec::NullableText => match value {
                Value::Text(Some(text)) => sanitize(text),
                _ => String::new(),
            },
            FieldCodec::Symbol { variants, default } => match value {
                Value::Symbol(name) if variants.contains(&name.as_str()) => name.clone(),
                _ => (*default).to_string(),
            },
            FieldCodec::Timestamp { .. } => match value {
                Value::Timestamp(Some(at)) => at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
                _ => String::new(),
            },
            FieldCodec::Flag => match value {
                Value::Flag(flag) => flag.to_string(),
                _ => "false".to_string(),
            },
            FieldCodec::Count => match value {
                Value::Count(n) => n.to_string(),
                _ => "0".to_string(),
            },
            FieldCodec::List { separator } => match value {
                Value::List(items) => items
                    .iter()
                    .map(|item| sanitize_element(item, *separator))
                    .filter(|item| !item.is_empty())
                    .collect::<Vec<_>>()
                    .join(&separator.to_string()),
                _ => String::new(),
            },
            FieldCodec::Entries { separator, format } => match value {
                Value::Entries(entries) => entries
                    .iter()
                    .map(|entry| encode_entry(entry, *separator, *format))
                    .filter(|entry| !entry.is_empty())
                    .collect::<Vec<_>>()
                    .join(&separator.to_string()),
                _ => String::new(),
            },
        }
    }

    /// Decode a stored string back into a value. Total: malformed input
    /// maps to the field's documented fallback.
    pub fn decode(&self, raw: &str, ctx: &DecodeCtx) -> Value {
        match self {
            FieldCodec::NullableText => {
                if raw.is_empty() {
                    Value::Text(None)
                } else {
                    Value::Text(Some(raw.to_string()))
                }
            }
            FieldCodec::Symbol { variants, default } => {
                if variants.contains(&raw) {
                    Value::Symbol(raw.to_string())
                } else {
                    Value::Symbol((*default).to_string())
                }
            }
            FieldCodec::Timestamp { missing } => match DateTime::parse_from_rfc3339(raw) {
                Ok(at) => Value::Timestamp(Some(at.with_timezone(&Utc))),
                Err(_) => match missing {
                    TimestampFallback::Nil => Value::Timestamp(None),
                    TimestampFallback::Now => Value::Timestamp(Some(ctx.now)),
                },
            },
            FieldCodec::Flag => Value::Flag(raw == "true"),
            FieldCodec::Count => Value::Count(raw.parse().unwrap_or(0)),
            FieldCodec::List { separator } => Value::List(
                raw.split(*separator)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            FieldCodec::Entries { separator, format } => Value::Entries(
                raw.split(*separator)
                    .filter(|element| !element.is_empty())
                    .filter_map(|element| decode_entry(element, *format))
                    .collect(),
            ),
        }
    }
}

/// Free-text sanitization: comma to semicolon, line terminators to
/// spaces. The substitution is not reversible.
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            ',' => ';',
            '\n' | '\r' => ' ',
            c => c,
        })
        .collect()
}

/// Element sanitization: like [`sanitize`], plus the element separator
/// becomes a space. When the separator is itself the semicolon, commas
/// become spaces instead of semicolons.
fn sanitize_element(text: &str, separator: char) -> String {
    text.chars()
        .map(|c| match c {
            '\n' | '\r' => ' ',
            c if c == separator => ' ',
            ',' if separator == ';' => ' ',
            ',' => ';',
            c => c,
        })
        .collect()
}

fn encode_entry(entry: &Entry, separator: char, format: EntryFormat) -> String {
    match format {
        EntryFormat::Tuple => {
            let value = sanitize_element(&entry.value, separator).replace('~', " ");
            format!(
                "{}~{}",
                value,
                entry.at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
            )
        }
        EntryFormat::Json => {
            let safe = Entry::new(sanitize_element(&entry.value, separator), entry.at);
            serde_json::to_string(&safe)
                .unwrap_or_default()
                .replace(',', ";")
        }
    }
}

fn decode_entry(element: &str, format: EntryFormat) -> Option<Entry> {
    match format {
        EntryFormat::Tuple => {
            let (value, raw_at) = element.split_once('~')?;
            let at = DateTime::parse_from_rfc3339(raw_at).ok()?;
            Some(Entry::new(value, at.with_timezone(&Utc)))
        }
        EntryFormat::Json => serde_json::from_str(&element.replace(';', ",")).ok(),
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
