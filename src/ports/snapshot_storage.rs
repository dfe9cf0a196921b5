//! Snapshot Storage Port - Interface for loading and saving a whole store.
//!
//! Repositories never update storage incrementally. Each operation loads
//! the full snapshot, mutates it in memory and saves it back, so swapping
//! the backing technology only requires a new adapter.

use async_trait::async_trait;
use std::path::PathBuf;

/// Errors that can occur while reading or writing a snapshot.
///
/// A failed write may leave the backing file in an unknown state.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error on {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("Failed to serialize snapshot for {path}: {message}")]
    SerializationFailed { path: PathBuf, message: String },

    #[error("Failed to parse snapshot {path}: {message}")]
    DeserializationFailed { path: PathBuf, message: String },
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Port for persisting one snapshot of type `S`.
#[async_trait]
pub trait SnapshotStorage<S>: Send + Sync
where
    S: Send + Sync,
{
    /// Load the current snapshot.
    ///
    /// If nothing has been stored yet, the default snapshot is persisted
    /// and returned.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::DeserializationFailed` when stored content
    /// exists but cannot be parsed. It is never replaced by a default.
    async fn load(&self) -> Result<S, StorageError>;

    /// Replace the stored snapshot with `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the write fails.
    async fn save(&self, snapshot: &S) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn snapshot_storage_is_object_safe() {
        fn _accepts_dyn(_storage: &dyn SnapshotStorage<String>) {}
    }

    #[test]
    fn storage_error_io_names_the_path() {
        let err = StorageError::io(
            "/data/workouts.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/data/workouts.json"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn storage_error_deserialization_mentions_parse() {
        let err = StorageError::DeserializationFailed {
            path: PathBuf::from("t.json"),
            message: "expected value".to_string(),
        };
        assert!(err.to_string().contains("Failed to parse"));
    }
}
