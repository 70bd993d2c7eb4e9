use crate::storage::{SnapshotStore, StoreError};

use std::fmt::Display;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Failed to read local snapshot {}: {source}", .path.display())]
    LocalFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The object did not exist and was created from the local snapshot.
    Created,
    Unchanged,
    /// Stored content differed and was overwritten.
    Updated,
}

impl SyncOutcome {
    /// Only a content difference counts as an update; creation does not.
    pub fn updated(&self) -> bool {
        matches!(self, SyncOutcome::Updated)
    }
}

impl Display for SyncOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncOutcome::Created => write!(f, "created"),
            SyncOutcome::Unchanged => write!(f, "unchanged"),
            SyncOutcome::Updated => write!(f, "updated"),
        }
    }
}

pub async fn read_snapshot(path: impl AsRef<Path>) -> Result<String, SyncError> {
    let path = path.as_ref();
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SyncError::LocalFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Brings the stored object at `key` in line with `local_content`.
///
/// Issues one probe, at most one read and at most one write. Equality is an
/// exact string comparison.
pub async fn synchronize<S: SnapshotStore>(
    store: &S,
    key: &str,
    local_content: &str,
) -> Result<SyncOutcome, SyncError> {
    if !store.exists(key).await? {
        log::info!("No stored snapshot at '{}', creating it", key);
        store.write(key, local_content).await?;
        return Ok(SyncOutcome::Created);
    }

    let stored = store.read(key).await?;
    if stored == local_content {
        log::info!("Stored snapshot at '{}' is up to date", key);
        return Ok(SyncOutcome::Unchanged);
    }

    log::info!("Stored snapshot at '{}' differs, overwriting it", key);
    store.write(key, local_content).await?;
    Ok(SyncOutcome::Updated)
}
