//! Workout session aggregate.
//!
//! A session is a dated, named collection of exercise records. It is created
//! once and then mutated in place until it is deleted.

use serde::{Deserialize, Serialize};

use super::exercise::{ExercisePatch, ExerciseRecord};
use crate::domain::foundation::{
    DomainError, EntityKind, ExerciseId, Timestamp, TrainingDate, ValidationError, WorkoutId,
};

/// Workout session aggregate.
///
/// # Invariants
///
/// - `id` is globally unique and never changes
/// - `name` is non-empty
/// - `exercises` keeps insertion order across edits and deletes of others
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    id: WorkoutId,
    name: String,
    date: TrainingDate,
    created_at: Timestamp,
    #[serde(default)]
    exercises: Vec<ExerciseRecord>,
}

impl WorkoutSession {
    /// Create a new, empty session.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name is blank
    pub fn new(name: &str, date: TrainingDate) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        Ok(Self {
            id: WorkoutId::new(),
            name: name.to_string(),
            date,
            created_at: Timestamp::now(),
            exercises: Vec::new(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> TrainingDate {
        self.date
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn exercises(&self) -> &[ExerciseRecord] {
        &self.exercises
    }

    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    pub fn exercise(&self, exercise_id: &ExerciseId) -> Option<&ExerciseRecord> {
        self.exercises.iter().find(|e| &e.id == exercise_id)
    }

    /// Listing view of this session without its exercises.
    pub fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            date: self.date,
            created_at: self.created_at,
            exercise_count: self.exercises.len(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends an exercise record.
    pub fn push_exercise(&mut self, exercise: ExerciseRecord) {
        self.exercises.push(exercise);
    }

    /// Merges `patch` into one exercise, in place.
    ///
    /// # Errors
    ///
    /// - `Validation` if a present field is invalid
    /// - `NotFound` if the exercise is not part of this session
    pub fn update_exercise(
        &mut self,
        exercise_id: &ExerciseId,
        patch: &ExercisePatch,
    ) -> Result<&ExerciseRecord, DomainError> {
        patch.validate()?;

        let exercise = self
            .exercises
            .iter_mut()
            .find(|e| &e.id == exercise_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Exercise, exercise_id))?;

        patch.apply_to(exercise);
        Ok(exercise)
    }

    /// Removes one exercise, keeping the order of the others.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the exercise is not part of this session
    pub fn remove_exercise(&mut self, exercise_id: &ExerciseId) -> Result<ExerciseRecord, DomainError> {
        let index = self
            .exercises
            .iter()
            .position(|e| &e.id == exercise_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Exercise, exercise_id))?;

        Ok(self.exercises.remove(index))
    }
}

/// Session listing entry: everything but the exercises, plus their count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSummary {
    pub id: WorkoutId,
    pub name: String,
    pub date: TrainingDate,
    pub created_at: Timestamp,
    pub exercise_count: usize,
}
