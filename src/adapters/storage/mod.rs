//! Storage Adapters
//!
//! Implementations of the SnapshotStorage port.
//!
//! ## Available Adapters
//!
//! - **JsonFileStorage** - Stores a snapshot as a JSON file on disk
//! - **InMemorySnapshotStorage** - Stores a snapshot in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemorySnapshotStorage, JsonFileStorage};
//!
//! // Production: file-based storage
//! let storage: JsonFileStorage<WorkoutStore> = JsonFileStorage::new("./data/workouts.json");
//!
//! // Testing: in-memory storage
//! let storage: InMemorySnapshotStorage<WorkoutStore> = InMemorySnapshotStorage::new();
//! ```

mod in_memory_storage;
mod json_file_storage;

pub use in_memory_storage::InMemorySnapshotStorage;
pub use json_file_storage::JsonFileStorage;
