//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - Snapshot storage implementations (JSON file, in-memory)

pub mod storage;

pub use storage::{InMemorySnapshotStorage, JsonFileStorage};
