//! Inventory scanner
//!
//! Walks a directory tree and partitions every regular file into expired
//! (modified before the cutoff) and retained. `classify` is pure; `scan`
//! additionally deletes the expired files and returns the inventory the
//! rest of the pipeline works on.

use chrono::{DateTime, Utc};
use std::path::Path;
use upkeep_errors::{Error, StorageError};
use upkeep_types::{ExpiredFile, FileRecord, Inventory};
use walkdir::WalkDir;

use crate::fsops;

/// Pure partition of a directory tree at a given cutoff
#[derive(Debug, Clone, Default)]
pub struct Partition {
    /// Files modified before the cutoff, in encounter order
    pub expired: Vec<FileRecord>,
    /// Files within the cutoff, in encounter order
    pub retained: Vec<FileRecord>,
    /// Sum of retained file sizes
    pub total_bytes: u64,
}

/// Recursively visit every regular file under `root` and classify it
/// against `cutoff`.
///
/// # Errors
///
/// Returns an error if the walk fails or a file cannot be stat'd;
/// mid-walk filesystem errors are not isolated (spec: the run terminates).
pub fn classify(root: &Path, cutoff: DateTime<Utc>) -> Result<Partition, Error> {
    let mut partition = Partition::default();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| StorageError::IoError {
            message: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let metadata = entry
            .metadata()
            .map_err(|e| StorageError::IoError {
                message: format!("{}: {e}", entry.path().display()),
            })?;
        let modified_at: DateTime<Utc> = metadata
            .modified()
            .map_err(|e| StorageError::from_io_with_path(&e, entry.path()))?
            .into();

        let record = FileRecord {
            path: entry.path().to_path_buf(),
            modified_at,
            size_bytes: metadata.len(),
        };

        if modified_at < cutoff {
            partition.expired.push(record);
        } else {
            partition.total_bytes += record.size_bytes;
            partition.retained.push(record);
        }
    }

    Ok(partition)
}

/// Build the inventory for one folder, deleting expired files as they are
/// found.
///
/// # Errors
///
/// Returns an error if the walk fails or a deletion is refused by the OS.
pub async fn scan(root: &Path, cutoff: DateTime<Utc>) -> Result<Inventory, Error> {
    let partition = classify(root, cutoff)?;

    let mut expired = Vec::with_capacity(partition.expired.len());
    for record in &partition.expired {
        fsops::remove_file(&record.path).await?;
        expired.push(ExpiredFile::from(record));
    }

    Ok(Inventory {
        retained: partition.retained,
        total_bytes: partition.total_bytes,
        expired,
    })
}
