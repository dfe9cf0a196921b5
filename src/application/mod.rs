//! Application layer - Repositories and workflows.
//!
//! This layer orchestrates domain operations over the storage port. Each
//! operation runs one full load, mutate, save cycle against a snapshot.

mod errors;
mod template_repository;
mod template_workflow;
mod training_log;
mod workout_repository;

pub use errors::RepositoryError;
pub use template_repository::TemplateRepository;
pub use template_workflow::{ExerciseOverride, StartedWorkout, TemplateWorkflow};
pub use training_log::TrainingLog;
pub use workout_repository::{AddExerciseResult, WorkoutRepository};
