//! Root aggregate persisted in the primary store file.

use serde::{Deserialize, Serialize};

use super::exercise::{ExerciseDraft, ExercisePatch, ExerciseRecord};
use super::session::{WorkoutSession, WorkoutSummary};
use crate::domain::foundation::{
    DomainError, EntityKind, ExerciseId, TrainingDate, ValidationError, WorkoutId,
};
use crate::domain::records::{PersonalRecordLedger, RecordOutcome};

/// All workout sessions plus the personal record ledger, saved as one unit.
///
/// Every mutation validates and looks up first, so a failed call leaves the
/// store unchanged.
///
/// Files written by earlier versions load as-is but are normalized on the
/// next save: the `workouts` key is rewritten as `sessions`, `isNew` markers
/// are dropped, whole-number weights gain a fraction (`60` becomes `60.0`)
/// and timestamps are re-emitted without trailing zero fractions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStore {
    #[serde(default, alias = "workouts")]
    sessions: Vec<WorkoutSession>,
    #[serde(default)]
    personal_records: PersonalRecordLedger,
}

/// Result of appending an exercise to a session.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseAdded {
    /// The session after the append.
    pub session: WorkoutSession,
    pub exercise: ExerciseRecord,
    pub record: RecordOutcome,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sessions(&self) -> &[WorkoutSession] {
        &self.sessions
    }

    pub fn personal_records(&self) -> &PersonalRecordLedger {
        &self.personal_records
    }

    pub fn workout(&self, id: &WorkoutId) -> Option<&WorkoutSession> {
        self.sessions.iter().find(|s| s.id() == id)
    }

    /// Listing of all sessions in insertion order.
    pub fn summaries(&self) -> Vec<WorkoutSummary> {
        self.sessions.iter().map(WorkoutSession::summary).collect()
    }

    /// Creates and appends a new session.
    pub fn create_workout(
        &mut self,
        name: &str,
        date: TrainingDate,
    ) -> Result<&WorkoutSession, ValidationError> {
        let session = WorkoutSession::new(name, date)?;
        self.sessions.push(session);
        Ok(&self.sessions[self.sessions.len() - 1])
    }

    /// Appends an exercise and updates the personal record for its name.
    pub fn add_exercise(
        &mut self,
        workout_id: &WorkoutId,
        draft: ExerciseDraft,
    ) -> Result<ExerciseAdded, DomainError> {
        let session = self
            .sessions
            .iter_mut()
            .find(|s| s.id() == workout_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Workout, workout_id))?;

        let exercise = ExerciseRecord::from_draft(draft);
        session.push_exercise(exercise.clone());
        let record = self
            .personal_records
            .observe(&exercise, session.date(), session.id());

        Ok(ExerciseAdded {
            session: session.clone(),
            exercise,
            record,
        })
    }

    /// Merges a partial update into one exercise.
    ///
    /// Personal records are not revisited; only insertion feeds the ledger.
    pub fn update_exercise(
        &mut self,
        workout_id: &WorkoutId,
        exercise_id: &ExerciseId,
        patch: &ExercisePatch,
    ) -> Result<&WorkoutSession, DomainError> {
        let session = self.workout_mut(workout_id)?;
        session.update_exercise(exercise_id, patch)?;
        Ok(session)
    }

    pub fn remove_exercise(
        &mut self,
        workout_id: &WorkoutId,
        exercise_id: &ExerciseId,
    ) -> Result<&WorkoutSession, DomainError> {
        let session = self.workout_mut(workout_id)?;
        session.remove_exercise(exercise_id)?;
        Ok(session)
    }

    /// Removes a session and all of its exercises.
    ///
    /// Personal records it contributed are kept.
    pub fn remove_workout(&mut self, workout_id: &WorkoutId) -> Result<WorkoutSession, DomainError> {
        let index = self
            .sessions
            .iter()
            .position(|s| s.id() == workout_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Workout, workout_id))?;

        Ok(self.sessions.remove(index))
    }

    fn workout_mut(&mut self, workout_id: &WorkoutId) -> Result<&mut WorkoutSession, DomainError> {
        self.sessions
            .iter_mut()
            .find(|s| s.id() == workout_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Workout, workout_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> TrainingDate {
        TrainingDate::parse(s).unwrap()
    }

    fn draft(name: &str, weight: f64) -> ExerciseDraft {
        ExerciseDraft::new(name, weight, 3, 8).unwrap()
    }

    #[test]
    fn add_exercise_reports_record_outcome() {
        let mut store = WorkoutStore::new();
        let id = store.create_workout("Push Day", day("2024-01-01")).unwrap().id().clone();

        let first = store.add_exercise(&id, draft("Bench", 60.0)).unwrap();
        let second = store.add_exercise(&id, draft("Bench", 50.0)).unwrap();

        assert!(first.record.is_new());
        assert_eq!(second.record, RecordOutcome::Unchanged { best: 60.0 });
        assert_eq!(second.session.exercise_count(), 2);
        assert_eq!(store.personal_records().get("Bench").unwrap().date, day("2024-01-01"));
    }

    #[test]
    fn add_exercise_to_unknown_workout_leaves_store_untouched() {
        let mut store = WorkoutStore::new();
        let before = store.clone();

        let err = store.add_exercise(&WorkoutId::new(), draft("Bench", 60.0)).unwrap_err();

        assert!(matches!(err, DomainError::NotFound { entity: EntityKind::Workout, .. }));
        assert_eq!(store, before);
    }

    #[test]
    fn remove_workout_keeps_personal_records() {
        let mut store = WorkoutStore::new();
        let id = store.create_workout("Leg Day", day("2024-01-02")).unwrap().id().clone();
        store.add_exercise(&id, draft("Squat", 100.0)).unwrap();

        let removed = store.remove_workout(&id).unwrap();

        assert_eq!(removed.exercise_count(), 1);
        assert!(store.sessions().is_empty());
        assert_eq!(store.personal_records().get("Squat").unwrap().weight, 100.0);
        assert!(store.remove_workout(&id).is_err());
    }

    #[test]
    fn update_and_remove_exercise_require_known_ids() {
        let mut store = WorkoutStore::new();
        let id = store.create_workout("Pull Day", day("2024-01-03")).unwrap().id().clone();
        let added = store.add_exercise(&id, draft("Row", 50.0)).unwrap();
        let exercise_id = added.exercise.id;

        let updated = store
            .update_exercise(&id, &exercise_id, &ExercisePatch::default().reps(12))
            .unwrap();
        assert_eq!(updated.exercises()[0].reps, 12);

        assert!(store
            .update_exercise(&WorkoutId::new(), &exercise_id, &ExercisePatch::default())
            .is_err());
        assert!(store.remove_exercise(&id, &ExerciseId::new()).is_err());
        assert!(store.remove_exercise(&id, &exercise_id).unwrap().exercises().is_empty());
    }

    #[test]
    fn update_does_not_touch_personal_records() {
        let mut store = WorkoutStore::new();
        let id = store.create_workout("Push", day("2024-01-01")).unwrap().id().clone();
        let added = store.add_exercise(&id, draft("Bench", 60.0)).unwrap();

        store
            .update_exercise(&id, &added.exercise.id, &ExercisePatch::default().weight(200.0))
            .unwrap();

        assert_eq!(store.personal_records().get("Bench").unwrap().weight, 60.0);
    }

    #[test]
    fn empty_store_serializes_to_default_layout() {
        let json = serde_json::to_value(WorkoutStore::new()).unwrap();
        assert_eq!(json, serde_json::json!({ "sessions": [], "personalRecords": {} }));
    }

    #[test]
    fn legacy_workouts_key_loads_as_sessions() {
        let json = r#"{"workouts":[{"id":"w1","name":"Old","date":"2023-12-31","createdAt":"2023-12-31T08:00:00.000Z","exercises":[]}]}"#;
        let store: WorkoutStore = serde_json::from_str(json).unwrap();
        assert_eq!(store.sessions().len(), 1);
        assert!(store.personal_records().is_empty());
    }
}
