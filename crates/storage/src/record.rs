// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decoded field values and records
//!
//! A [`Record`] is one decoded entity instance: the schema's fields, in
//! order, each holding a [`Value`]. Records exist only in transit: built
//! by a domain type before an upsert, or reconstructed from a line on read.

use chrono::{DateTime, Utc};
use hackdesk_core::Entry;

/// One decoded field value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Free text; `None` is stored as the empty string
    Text(Option<String>),
    /// A name from a closed symbol set
    Symbol(String),
    /// An optional wall-clock instant
    Timestamp(Option<DateTime<Utc>>),
    /// A boolean flag
    Flag(bool),
    /// An integer counter
    Count(i64),
    /// A list of scalar strings
    List(Vec<String>),
    /// A list of timestamped entries
    Entries(Vec<Entry>),
}

/// An ordered mapping of field name to decoded value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(&'static str, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append of one field
    pub fn with(mut self, name: &'static str, value: Value) -> Self {
        self.fields.push((name, value));
        self
    }

    pub fn push(&mut self, name: &'static str, value: Value) {
        self.fields.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.fields.iter().map(|(n, v)| (*n, v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // Typed accessors. All total: a missing field or a mismatched variant
    // yields the same fallback its codec would produce, so conversions out
    // of a record never fail.

    pub fn text(&self, name: &str) -> Option<String> {
        match self.get(name) {
            Some(Value::Text(t)) => t.clone(),
            _ => None,
        }
    }

    pub fn symbol(&self, name: &str) -> String {
        match self.get(name) {
            Some(Value::Symbol(s)) => s.clone(),
            _ => String::new(),
        }
    }

    pub fn timestamp(&self, name: &str) -> Option<DateTime<Utc>> {
        match self.get(name) {
            Some(Value::Timestamp(t)) => *t,
            _ => None,
        }
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.get(name), Some(Value::Flag(true)))
    }

    pub fn count(&self, name: &str) -> i64 {
        match self.get(name) {
            Some(Value::Count(n)) => *n,
            _ => 0,
        }
    }

    pub fn list(&self, name: &str) -> Vec<String> {
        match self.get(name) {
            Some(Value::List(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    pub fn entries(&self, name: &str) -> Vec<Entry> {
        match self.get(name) {
            Some(Value::Entries(entries)) => entries.clone(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
