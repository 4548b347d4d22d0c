//! Eviction selector
//!
//! Selects and deletes the minimum-count oldest-first prefix of the
//! retained files so that the remaining total drops to the target.

use upkeep_errors::Error;
use upkeep_types::{ExpiredFile, FileRecord};

use crate::fsops;

/// Select the files eviction must delete, oldest first.
///
/// Records are ordered ascending by modification time with ties keeping
/// their encounter order (stable sort); the prefix stops as soon as the
/// running total is at or under `target`. When `total_bytes <= target` no
/// victims are selected.
#[must_use]
pub fn select_victims(retained: &[FileRecord], total_bytes: u64, target: u64) -> Vec<FileRecord> {
    let mut by_age: Vec<&FileRecord> = retained.iter().collect();
    by_age.sort_by_key(|record| record.modified_at);

    let mut remaining = total_bytes;
    let mut victims = Vec::new();
    for record in by_age {
        if remaining <= target {
            break;
        }
        remaining = remaining.saturating_sub(record.size_bytes);
        victims.push(record.clone());
    }
    victims
}

/// Result of applying an eviction
#[derive(Debug, Clone, Default)]
pub struct Eviction {
    /// Deletion report entries, in deletion order
    pub deleted: Vec<ExpiredFile>,
    /// Bytes freed by the deletions
    pub freed_bytes: u64,
}

/// Delete enough oldest-first files to get under the size limit.
///
/// # Errors
///
/// Returns an error if the OS refuses a removal; eviction does not resume.
pub async fn evict(
    retained: &[FileRecord],
    total_bytes: u64,
    target: u64,
) -> Result<Eviction, Error> {
    let victims = select_victims(retained, total_bytes, target);

    let mut eviction = Eviction::default();
    for victim in &victims {
        fsops::remove_file(&victim.path).await?;
        eviction.freed_bytes += victim.size_bytes;
        eviction.deleted.push(ExpiredFile::from(victim));
    }
    Ok(eviction)
}
