//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the training log domain.

mod errors;
mod ids;
mod timestamp;
mod training_date;

pub use errors::{DomainError, EntityKind, ErrorCode, ValidationError};
pub use ids::{ExerciseId, TemplateId, WorkoutId};
pub use timestamp::Timestamp;
pub use training_date::TrainingDate;
