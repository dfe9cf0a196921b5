//! In-Memory Snapshot Storage Adapter
//!
//! Keeps the snapshot in memory. Useful for testing and development.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{SnapshotStorage, StorageError};

/// In-memory storage for a snapshot of type `S`
#[derive(Debug, Clone)]
pub struct InMemorySnapshotStorage<S> {
    snapshot: Arc<RwLock<Option<S>>>,
    saves: Arc<AtomicUsize>,
    fail_saves: Arc<AtomicBool>,
}

impl<S> InMemorySnapshotStorage<S> {
    /// Create an empty storage; the first load yields `S::default()`
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(None)),
            saves: Arc::new(AtomicUsize::new(0)),
            fail_saves: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a storage pre-populated with `snapshot`
    pub fn with_snapshot(snapshot: S) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(Some(snapshot))),
            ..Self::new()
        }
    }

    /// Make every subsequent save fail (useful for tests)
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl<S: Clone> InMemorySnapshotStorage<S> {
    /// Current snapshot, if one has been stored
    pub async fn snapshot(&self) -> Option<S> {
        self.snapshot.read().await.clone()
    }
}

impl<S> Default for InMemorySnapshotStorage<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<S> SnapshotStorage<S> for InMemorySnapshotStorage<S>
where
    S: Clone + Default + Send + Sync,
{
    async fn load(&self) -> Result<S, StorageError> {
        let mut guard = self.snapshot.write().await;
        Ok(guard.get_or_insert_with(S::default).clone())
    }

    async fn save(&self, snapshot: &S) -> Result<(), StorageError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Io {
                path: PathBuf::from("memory"),
                message: "simulated write failure".to_string(),
            });
        }
        *self.snapshot.write().await = Some(snapshot.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_from_empty_storage_returns_default() {
        let storage: InMemorySnapshotStorage<Vec<u32>> = InMemorySnapshotStorage::new();

        assert!(storage.load().await.unwrap().is_empty());
        assert_eq!(storage.snapshot().await, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_save_replaces_snapshot() {
        let storage = InMemorySnapshotStorage::with_snapshot(vec![1u32]);

        storage.save(&vec![2, 3]).await.unwrap();

        assert_eq!(storage.load().await.unwrap(), vec![2, 3]);
        assert_eq!(storage.save_count(), 1);
    }

    #[tokio::test]
    async fn test_failing_saves_keep_previous_snapshot() {
        let storage = InMemorySnapshotStorage::with_snapshot(vec![1u32]);
        storage.fail_saves(true);

        let result = storage.save(&vec![9]).await;

        assert!(matches!(result, Err(StorageError::Io { .. })));
        assert_eq!(storage.load().await.unwrap(), vec![1]);
        assert_eq!(storage.save_count(), 0);
    }
}
