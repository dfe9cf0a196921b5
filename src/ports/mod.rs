//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SnapshotStorage` - Load/save boundary for a whole store snapshot

mod snapshot_storage;

pub use snapshot_storage::{SnapshotStorage, StorageError};
