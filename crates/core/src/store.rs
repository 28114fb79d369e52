//! Whole-document JSON persistence for the board aggregate.
//!
//! The store reads and writes one JSON file matching the [`Aggregate`]
//! shape. Every mutation rewrites the full document; there is no partial
//! update, no versioning and no retry - an I/O failure propagates to the
//! request that triggered the save.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::board::Aggregate;

/// Persistent store error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the data file failed.
    #[error("data file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file exists but does not parse as an aggregate.
    #[error("data file parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// JSON-file-backed store for the single board aggregate.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store backed by the given file path.
    ///
    /// The file is not touched until the first [`load`](Self::load) or
    /// [`save`](Self::save).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing data file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted aggregate.
    ///
    /// A missing file yields the default aggregate. Fields absent from an
    /// older persisted shape are backfilled by their serde defaults, so
    /// schema migration happens by field presence rather than by version.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file exists but cannot be read or
    /// parsed.
    pub fn load(&self) -> Result<Aggregate, StoreError> {
        if !self.path.exists() {
            return Ok(Aggregate::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Persist the full aggregate, overwriting any prior copy.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the write fails.
    pub fn save(&self, aggregate: &Aggregate) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(aggregate)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
