//! Filesystem mutation helpers

use std::path::Path;
use tracing::debug;
use upkeep_errors::{Error, StorageError};

/// Hard-delete a file; there is no trash and no retry. A refusal from the
/// OS fails the whole run.
pub(crate) async fn remove_file(path: &Path) -> Result<(), Error> {
    tokio::fs::remove_file(path)
        .await
        .map_err(|e| StorageError::from_io_with_path(&e, path))?;
    debug!(path = %path.display(), "deleted file");
    Ok(())
}
