// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Generic flat-file repository
//!
//! CRUD over one store file, parameterized by an entity's schema. Every
//! call re-reads the file from disk; every mutation rewrites it whole
//! through a temp file and an atomic rename. There is no locking: two
//! concurrent writers on the same store race, and the last rewrite wins
//! (lost update).

use crate::codec::DecodeCtx;
use crate::error::StoreError;
use crate::record::Record;
use crate::schema::Schema;
use hackdesk_core::clock::{Clock, SystemClock};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// An entity that can live in a flat-file store
pub trait StoreEntity: Sized {
    /// The entity's schema descriptor
    fn schema() -> &'static Schema;
    /// Build the record to persist
    fn to_record(&self) -> Record;
    /// Rebuild the entity from a decoded record. Total: record values are
    /// produced by this schema's codecs, so every accessor has a defined
    /// fallback.
    fn from_record(record: &Record) -> Self;
    /// The entity's key value, matching the schema's key field
    fn key(&self) -> String;
}

/// A repository for one entity type, bound to a file under the data
/// directory injected at construction time.
#[derive(Debug, Clone)]
pub struct Repository<E, C = SystemClock> {
    path: PathBuf,
    clock: C,
    _entity: PhantomData<fn() -> E>,
}

impl<E: StoreEntity> Repository<E> {
    /// Open a repository rooted at the given data directory
    pub fn open(data_dir: impl AsRef<Path>) -> Self {
        Self::with_clock(data_dir, SystemClock)
    }
}

impl<E: StoreEntity, C: Clock> Repository<E, C> {
    /// Open with an explicit clock (drives the `Now` timestamp fallback)
    pub fn with_clock(data_dir: impl AsRef<Path>, clock: C) -> Self {
        Self {
            path: data_dir.as_ref().join(E::schema().file_name),
            clock,
            _entity: PhantomData,
        }
    }

    /// The store file this repository reads and rewrites
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entities, in file order. A missing file is an empty store,
    /// not an error. A malformed row aborts the whole read.
    pub fn list_all(&self) -> Result<Vec<E>, StoreError> {
        let records = self.list_records()?;
        Ok(records.iter().map(E::from_record).collect())
    }

    /// Linear scan for the entity with the given key
    pub fn find_by_key(&self, key: &str) -> Result<Option<E>, StoreError> {
        let schema = E::schema();
        Ok(self
            .list_records()?
            .iter()
            .find(|record| schema.key_of(record) == key)
            .map(E::from_record))
    }

    /// Insert or replace by key, then rewrite the whole file. Returns the
    /// entity as stored, i.e. after lossy sanitization. Last write wins.
    pub fn upsert(&self, entity: &E) -> Result<E, StoreError> {
        let stored = self.upsert_record(&entity.to_record())?;
        Ok(E::from_record(&stored))
    }

    /// Remove the entity with the given key. Deleting an absent key is an
    /// explicit `NotFound`.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        let schema = E::schema();
        let records = self.list_records()?;
        let remaining: Vec<Record> = records
            .iter()
            .filter(|record| schema.key_of(record) != key)
            .cloned()
            .collect();
        if remaining.len() == records.len() {
            return Err(StoreError::NotFound {
                entity: schema.entity,
                key: key.to_string(),
            });
        }
        self.rewrite(&remaining)?;
        tracing::debug!(entity = schema.entity, key, "deleted record");
        Ok(())
    }

    // Record-level surface, for collaborators that work untyped.

    /// All records, decoded fresh from disk
    pub fn list_records(&self) -> Result<Vec<Record>, StoreError> {
        let schema = E::schema();
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let ctx = DecodeCtx::new(self.clock.now());
        let mut records = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            // line 1 is the header; blank lines carry nothing
            if index == 0 || line.trim().is_empty() {
                continue;
            }
            records.push(schema.decode_line(&line, index + 1, &ctx)?);
        }
        tracing::debug!(
            entity = schema.entity,
            rows = records.len(),
            path = %self.path.display(),
            "read store file"
        );
        Ok(records)
    }

    /// Insert or replace a raw record by its encoded key. Returns the
    /// record as it will read back from disk.
    pub fn upsert_record(&self, record: &Record) -> Result<Record, StoreError> {
        let schema = E::schema();
        // Encode-then-decode normalizes the record exactly the way a
        // later read would see it (sanitized text, defaulted symbols).
        let line = schema.encode_record(record);
        let ctx = DecodeCtx::new(self.clock.now());
        let stored = schema.decode_line(&line, 0, &ctx)?;
        let key = schema.key_of(&stored);

        let mut records = self.list_records()?;
        records.retain(|existing| schema.key_of(existing) != key);
        records.push(stored.clone());
        self.rewrite(&records)?;
        tracing::debug!(entity = schema.entity, key, "upserted record");
        Ok(stored)
    }

    /// Rewrite the whole file: header plus one line per record, written
    /// to a temp file and swapped in with an atomic rename.
    fn rewrite(&self, records: &[Record]) -> Result<(), StoreError> {
        let schema = E::schema();
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("tmp");
        {
            let mut file = File::create(&tmp)?;
            writeln!(file, "{}", schema.header())?;
            for record in records {
                writeln!(file, "{}", schema.encode_record(record))?;
            }
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;
