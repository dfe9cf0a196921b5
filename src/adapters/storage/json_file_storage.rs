//! File-based Snapshot Storage Adapter
//!
//! Stores a whole snapshot as one pretty-printed JSON file. Writes go to a
//! sibling temporary file that is then renamed over the target, so readers
//! never see a half-written snapshot.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::ports::{SnapshotStorage, StorageError};

/// JSON file storage for a snapshot of type `S`.
#[derive(Debug)]
pub struct JsonFileStorage<S> {
    path: PathBuf,
    _snapshot: PhantomData<fn() -> S>,
}

impl<S> Clone for JsonFileStorage<S> {
    fn clone(&self) -> Self {
        Self::new(&self.path)
    }
}

impl<S> JsonFileStorage<S> {
    /// Create a storage backed by the file at `path`
    ///
    /// # Example
    /// ```ignore
    /// let storage: JsonFileStorage<WorkoutStore> = JsonFileStorage::new("./data/workouts.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            _snapshot: PhantomData,
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file used for atomic replacement
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Ensure the parent directory exists
    async fn ensure_parent_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StorageError::io(parent, e))?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<S> SnapshotStorage<S> for JsonFileStorage<S>
where
    S: Serialize + DeserializeOwned + Default + Send + Sync,
{
    async fn load(&self) -> Result<S, StorageError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "Initializing empty snapshot");
                let snapshot = S::default();
                self.save(&snapshot).await?;
                return Ok(snapshot);
            }
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        let snapshot =
            serde_json::from_str(&raw).map_err(|e| StorageError::DeserializationFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        debug!(path = %self.path.display(), bytes = raw.len(), "Loaded snapshot");
        Ok(snapshot)
    }

    async fn save(&self, snapshot: &S) -> Result<(), StorageError> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(snapshot).map_err(|e| {
            StorageError::SerializationFailed {
                path: self.path.clone(),
                message: e.to_string(),
            }
        })?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, &json)
            .await
            .map_err(|e| StorageError::io(&temp_path, e))?;

        // Rename to final location (atomic operation on Unix)
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| StorageError::io(&self.path, e))?;

        debug!(path = %self.path.display(), bytes = json.len(), "Saved snapshot");
        Ok(())
    }
}
