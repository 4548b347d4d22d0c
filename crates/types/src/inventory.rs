//! Per-scan file inventory
//!
//! One `Inventory` is built per folder per run and discarded after the
//! folder has been processed; the filesystem itself is the only durable
//! state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A retained regular file observed during a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub modified_at: DateTime<Utc>,
    pub size_bytes: u64,
}

/// A file that has been deleted, either as expired or as an eviction victim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiredFile {
    pub path: PathBuf,
    pub modified_at: DateTime<Utc>,
}

impl From<&FileRecord> for ExpiredFile {
    fn from(record: &FileRecord) -> Self {
        Self {
            path: record.path.clone(),
            modified_at: record.modified_at,
        }
    }
}

/// Result of scanning one upload directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    /// Files within the age cutoff, in encounter order
    pub retained: Vec<FileRecord>,
    /// Sum of retained file sizes
    pub total_bytes: u64,
    /// Files already deleted because they were past the age cutoff
    pub expired: Vec<ExpiredFile>,
}

impl Inventory {
    /// True when the scan saw no files at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.retained.is_empty() && self.expired.is_empty()
    }
}
