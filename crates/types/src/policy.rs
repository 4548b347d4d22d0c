//! Validated per-folder retention policy and notifier credentials

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Retention policy for a single configured upload directory.
///
/// Produced by configuration validation; thresholds are already converted
/// to bytes and `upload_path` has been checked to be an existing directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderPolicy {
    /// Human-readable folder name used in report headers
    pub name: String,
    /// Root of the directory tree to scan
    pub upload_path: PathBuf,
    /// Files modified more than this many days ago are expired
    pub max_age_days: u32,
    /// Hard cap on aggregate retained storage
    pub max_storage_bytes: u64,
    /// Advisory threshold; when set it is also the eviction target
    pub warn_storage_bytes: Option<u64>,
}

impl FolderPolicy {
    /// Age cutoff for a scan starting at `now`: files modified before this
    /// instant are expired.
    #[must_use]
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(i64::from(self.max_age_days))
    }

    /// Byte threshold eviction must bring total usage under: the warning
    /// threshold if present, else the hard maximum.
    #[must_use]
    pub fn eviction_target(&self) -> u64 {
        self.warn_storage_bytes.unwrap_or(self.max_storage_bytes)
    }
}

/// Slack credentials, present only when both token and channel are configured
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackAuth {
    pub token: String,
    pub channel: String,
}
