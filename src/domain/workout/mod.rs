//! Workout domain module.
//!
//! Sessions own their exercise records. The `WorkoutStore` root aggregate
//! holds every session together with the personal record ledger.

mod exercise;
mod session;
mod store;

pub use exercise::{ExerciseDraft, ExercisePatch, ExerciseRecord, RawExerciseInput};
pub use session::{WorkoutSession, WorkoutSummary};
pub use store::{ExerciseAdded, WorkoutStore};
