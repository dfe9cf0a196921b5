//! WorkoutRepository - Operations over workout sessions and personal records.
//!
//! Every operation loads the whole store snapshot, works on the in-memory
//! copy and, for mutations, writes the whole snapshot back. Nothing is
//! cached between calls.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::errors::RepositoryError;
use crate::domain::analytics::{HistoryAnalyzer, HistoryEntry};
use crate::domain::foundation::{DomainError, ExerciseId, TrainingDate, WorkoutId};
use crate::domain::records::{PersonalRecordLedger, RecordOutcome};
use crate::domain::workout::{
    ExerciseDraft, ExercisePatch, RawExerciseInput, WorkoutSession, WorkoutStore,
    WorkoutSummary,
};
use crate::ports::SnapshotStorage;

/// Result of adding an exercise to a workout.
pub use crate::domain::workout::ExerciseAdded as AddExerciseResult;

/// Repository for workout sessions.
///
/// Clones share one write lock, so mutations issued through any clone run
/// their load, mutate, save cycles one at a time.
#[derive(Clone)]
pub struct WorkoutRepository {
    storage: Arc<dyn SnapshotStorage<WorkoutStore>>,
    write_lock: Arc<Mutex<()>>,
}

impl WorkoutRepository {
    pub fn new(storage: Arc<dyn SnapshotStorage<WorkoutStore>>) -> Self {
        Self {
            storage,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Runs one load, mutate, save cycle under the write lock.
    ///
    /// Nothing is saved when `apply` fails.
    async fn mutate<T, F>(&self, apply: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut WorkoutStore) -> Result<T, DomainError> + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut store = self.storage.load().await?;
        let value = apply(&mut store)?;
        self.storage.save(&store).await?;
        Ok(value)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Workouts
    // ════════════════════════════════════════════════════════════════════════════

    /// Creates a workout on the given `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name is blank or the date is empty or malformed
    pub async fn create_workout(
        &self,
        name: &str,
        date: &str,
    ) -> Result<WorkoutSession, RepositoryError> {
        let date = TrainingDate::parse(date)?;
        self.create_workout_on(name, date).await
    }

    /// Creates a workout dated today (local time).
    pub async fn create_workout_today(&self, name: &str) -> Result<WorkoutSession, RepositoryError> {
        self.create_workout_on(name, TrainingDate::today()).await
    }

    async fn create_workout_on(
        &self,
        name: &str,
        date: TrainingDate,
    ) -> Result<WorkoutSession, RepositoryError> {
        let session = self
            .mutate(|store| Ok(store.create_workout(name, date)?.clone()))
            .await?;

        info!(workout_id = %session.id(), date = %session.date(), "Workout created");
        Ok(session)
    }

    pub async fn get_workout(
        &self,
        workout_id: &WorkoutId,
    ) -> Result<Option<WorkoutSession>, RepositoryError> {
        let store = self.storage.load().await?;
        Ok(store.workout(workout_id).cloned())
    }

    /// Summaries of all workouts in insertion order.
    pub async fn list_workouts(&self) -> Result<Vec<WorkoutSummary>, RepositoryError> {
        let store = self.storage.load().await?;
        Ok(store.summaries())
    }

    /// Full sessions, exercises included, for analytics.
    pub async fn all_sessions(&self) -> Result<Vec<WorkoutSession>, RepositoryError> {
        let store = self.storage.load().await?;
        Ok(store.sessions().to_vec())
    }

    /// Removes a workout and its exercises, returning it.
    ///
    /// Personal records it contributed are left in place.
    pub async fn remove_workout(
        &self,
        workout_id: &WorkoutId,
    ) -> Result<WorkoutSession, RepositoryError> {
        let removed = self
            .mutate(|store| store.remove_workout(workout_id))
            .await?;

        info!(
            workout_id = %workout_id,
            exercises = removed.exercise_count(),
            "Workout deleted"
        );
        Ok(removed)
    }

    /// Idempotent delete: `Ok(false)` if no such workout exists.
    pub async fn delete_workout(&self, workout_id: &WorkoutId) -> Result<bool, RepositoryError> {
        match self.remove_workout(workout_id).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => {
                debug!(workout_id = %workout_id, "Delete of unknown workout ignored");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Exercises
    // ════════════════════════════════════════════════════════════════════════════

    /// Appends an exercise and updates the personal record for its name.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the workout does not exist
    pub async fn add_exercise(
        &self,
        workout_id: &WorkoutId,
        draft: ExerciseDraft,
    ) -> Result<AddExerciseResult, RepositoryError> {
        let added = self
            .mutate(|store| store.add_exercise(workout_id, draft))
            .await?;

        debug!(
            workout_id = %workout_id,
            exercise_id = %added.exercise.id,
            name = %added.exercise.name,
            "Exercise added"
        );
        if let RecordOutcome::NewRecord { previous } = added.record {
            info!(
                name = %added.exercise.name,
                weight = added.exercise.weight,
                previous = ?previous,
                "New personal record"
            );
        }

        Ok(added)
    }

    /// Coerces untyped input and appends the resulting exercise.
    ///
    /// # Errors
    ///
    /// - `Validation` if a required field is missing or a number is malformed
    /// - `NotFound` if the workout does not exist
    pub async fn add_exercise_input(
        &self,
        workout_id: &WorkoutId,
        input: RawExerciseInput,
    ) -> Result<AddExerciseResult, RepositoryError> {
        let draft = input.into_draft()?;
        self.add_exercise(workout_id, draft).await
    }

    /// Merges the fields present in `patch` into one exercise.
    pub async fn update_exercise(
        &self,
        workout_id: &WorkoutId,
        exercise_id: &ExerciseId,
        patch: &ExercisePatch,
    ) -> Result<WorkoutSession, RepositoryError> {
        let session = self
            .mutate(|store| Ok(store.update_exercise(workout_id, exercise_id, patch)?.clone()))
            .await?;

        debug!(workout_id = %workout_id, exercise_id = %exercise_id, "Exercise updated");
        Ok(session)
    }

    pub async fn delete_exercise(
        &self,
        workout_id: &WorkoutId,
        exercise_id: &ExerciseId,
    ) -> Result<WorkoutSession, RepositoryError> {
        let session = self
            .mutate(|store| Ok(store.remove_exercise(workout_id, exercise_id)?.clone()))
            .await?;

        debug!(workout_id = %workout_id, exercise_id = %exercise_id, "Exercise deleted");
        Ok(session)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Records and history
    // ════════════════════════════════════════════════════════════════════════════

    pub async fn get_personal_records(&self) -> Result<PersonalRecordLedger, RepositoryError> {
        let store = self.storage.load().await?;
        Ok(store.personal_records().clone())
    }

    /// Every occurrence of the exactly-named exercise, oldest first.
    pub async fn get_exercise_history(
        &self,
        name: &str,
    ) -> Result<Vec<HistoryEntry>, RepositoryError> {
        let store = self.storage.load().await?;
        Ok(HistoryAnalyzer::exercise_history(store.sessions(), name))
    }
}
