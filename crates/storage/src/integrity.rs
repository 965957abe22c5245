// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Startup integrity pass over every known store file
//!
//! Creates missing files with exactly their header line and repairs a
//! wrong first line, leaving every other line byte-untouched. Repair does
//! not re-validate existing rows against the schema's field count; a
//! schema change can leave stale rows behind the repaired header.

use crate::error::StoreError;
use crate::schema::Schema;
use crate::schemas;
use std::fs;
use std::path::{Path, PathBuf};

/// What the integrity pass did to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// File existed with a correct header
    Ok,
    /// File was missing and has been created, header only
    Created,
    /// First line differed from the schema header and was replaced
    Repaired,
}

/// Summary of one `ensure_all` run
#[derive(Debug, Default)]
pub struct IntegrityReport {
    pub created: Vec<&'static str>,
    pub repaired: Vec<&'static str>,
    pub checked: usize,
}

/// Startup-time verifier for the data directory
#[derive(Debug, Clone)]
pub struct Integrity {
    data_dir: PathBuf,
}

impl Integrity {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Create or repair every known store file
    pub fn ensure_all(&self) -> Result<IntegrityReport, StoreError> {
        let mut report = IntegrityReport::default();
        for schema in schemas::all() {
            match self.ensure(schema)? {
                FileStatus::Ok => {}
                FileStatus::Created => report.created.push(schema.entity),
                FileStatus::Repaired => report.repaired.push(schema.entity),
            }
            report.checked += 1;
        }
        tracing::info!(
            checked = report.checked,
            created = report.created.len(),
            repaired = report.repaired.len(),
            "store integrity pass complete"
        );
        Ok(report)
    }

    /// Create or repair one store file
    pub fn ensure(&self, schema: &Schema) -> Result<FileStatus, StoreError> {
        let path = self.path_for(schema);
        let header = schema.header();

        if !path.exists() {
            fs::create_dir_all(&self.data_dir)?;
            fs::write(&path, format!("{header}\n"))?;
            tracing::info!(entity = schema.entity, path = %path.display(), "created store file");
            return Ok(FileStatus::Created);
        }

        let content = fs::read_to_string(&path)?;
        let (first, rest) = match content.split_once('\n') {
            Some((first, rest)) => (first, Some(rest)),
            None => (content.as_str(), None),
        };
        if first == header {
            return Ok(FileStatus::Ok);
        }

        // Replace line 1 only; data lines stay byte-identical.
        let repaired = match rest {
            Some(rest) => format!("{header}\n{rest}"),
            None => format!("{header}\n"),
        };
        fs::write(&path, repaired)?;
        tracing::warn!(
            entity = schema.entity,
            found = first,
            "repaired store file header"
        );
        Ok(FileStatus::Repaired)
    }

    /// Read-only header check; a missing file fails the check
    pub fn check(&self, schema: &Schema) -> Result<bool, StoreError> {
        let path = self.path_for(schema);
        if !path.exists() {
            return Ok(false);
        }
        let content = fs::read_to_string(&path)?;
        let first = content.split('\n').next().unwrap_or_default();
        Ok(first == schema.header())
    }

    fn path_for(&self, schema: &Schema) -> PathBuf {
        self.data_dir.join(schema.file_name)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
#[path = "integrity_tests.rs"]
mod tests;
