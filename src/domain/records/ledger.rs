//! Name-keyed ledger of best-ever lifts.
//!
//! The ledger is a historical high-water mark: entries are only ever created
//! or raised, never lowered or removed, even when the originating workout
//! is deleted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{TrainingDate, WorkoutId};
use crate::domain::workout::ExerciseRecord;

/// Best lift recorded for one exercise name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecord {
    pub weight: f64,
    pub sets: u32,
    pub reps: u32,
    pub date: TrainingDate,
    pub workout_id: WorkoutId,
}

/// What adding an exercise did to the ledger.
///
/// Returned to the caller of the write that produced it; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordOutcome {
    /// The exercise set a new record. `previous` is the old best, if any.
    NewRecord { previous: Option<f64> },
    /// The existing record stands.
    Unchanged { best: f64 },
}

impl RecordOutcome {
    pub fn is_new(&self) -> bool {
        matches!(self, RecordOutcome::NewRecord { .. })
    }
}

/// Personal records keyed by trimmed exercise name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonalRecordLedger(BTreeMap<String, PersonalRecord>);

impl PersonalRecordLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Considers `exercise` as a record candidate.
    ///
    /// Installs it when no record exists for the name or its weight is
    /// strictly greater than the stored one. Ties keep the existing entry.
    pub fn observe(
        &mut self,
        exercise: &ExerciseRecord,
        date: TrainingDate,
        workout_id: &WorkoutId,
    ) -> RecordOutcome {
        let key = exercise.name.trim();
        let previous = self.0.get(key).map(|r| r.weight);

        match previous {
            Some(best) if exercise.weight <= best => RecordOutcome::Unchanged { best },
            _ => {
                self.0.insert(
                    key.to_string(),
                    PersonalRecord {
                        weight: exercise.weight,
                        sets: exercise.sets,
                        reps: exercise.reps,
                        date,
                        workout_id: workout_id.clone(),
                    },
                );
                RecordOutcome::NewRecord { previous }
            }
        }
    }

    /// Record for an exercise name (trimmed before lookup).
    pub fn get(&self, name: &str) -> Option<&PersonalRecord> {
        self.0.get(name.trim())
    }

    /// Records in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PersonalRecord)> {
        self.0.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Records sorted by descending weight; equal weights stay in name order.
    pub fn ranked_by_weight(&self) -> Vec<(&str, &PersonalRecord)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.weight.total_cmp(&a.1.weight));
        ranked
    }

    /// Exercise names with a record, in name order.
    pub fn exercise_names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::workout::ExerciseDraft;
    use proptest::prelude::*;

    fn lift(name: &str, weight: f64, sets: u32, reps: u32) -> ExerciseRecord {
        ExerciseRecord::from_draft(ExerciseDraft::new(name, weight, sets, reps).unwrap())
    }

    fn day(s: &str) -> TrainingDate {
        TrainingDate::parse(s).unwrap()
    }

    #[test]
    fn first_lift_sets_a_record() {
        let mut ledger = PersonalRecordLedger::new();
        let workout = WorkoutId::new();

        let outcome = ledger.observe(&lift("Bench", 60.0, 3, 8), day("2024-01-01"), &workout);

        assert_eq!(outcome, RecordOutcome::NewRecord { previous: None });
        let record = ledger.get("Bench").unwrap();
        assert_eq!(record.weight, 60.0);
        assert_eq!(record.workout_id, workout);
    }

    #[test]
    fn heavier_lift_replaces_record() {
        let mut ledger = PersonalRecordLedger::new();
        let workout = WorkoutId::new();
        ledger.observe(&lift("Bench", 60.0, 3, 8), day("2024-01-01"), &workout);

        let outcome = ledger.observe(&lift("Bench", 80.0, 1, 1), day("2024-01-08"), &workout);

        assert_eq!(outcome, RecordOutcome::NewRecord { previous: Some(60.0) });
        let record = ledger.get("Bench").unwrap();
        assert_eq!(record.weight, 80.0);
        assert_eq!(record.date, day("2024-01-08"));
    }

    #[test]
    fn lighter_lift_keeps_record() {
        let mut ledger = PersonalRecordLedger::new();
        let workout = WorkoutId::new();
        ledger.observe(&lift("Squat", 80.0, 5, 5), day("2024-01-01"), &workout);

        let outcome = ledger.observe(&lift("Squat", 70.0, 5, 5), day("2024-01-02"), &workout);

        assert_eq!(outcome, RecordOutcome::Unchanged { best: 80.0 });
        assert_eq!(ledger.get("Squat").unwrap().weight, 80.0);
    }

    #[test]
    fn tie_does_not_overwrite_sets_reps_or_date() {
        let mut ledger = PersonalRecordLedger::new();
        let workout = WorkoutId::new();
        ledger.observe(&lift("Deadlift", 140.0, 1, 3), day("2024-01-01"), &workout);

        let outcome =
            ledger.observe(&lift("Deadlift", 140.0, 5, 5), day("2024-02-01"), &WorkoutId::new());

        assert!(!outcome.is_new());
        let record = ledger.get("Deadlift").unwrap();
        assert_eq!((record.sets, record.reps), (1, 3));
        assert_eq!(record.date, day("2024-01-01"));
        assert_eq!(record.workout_id, workout);
    }

    #[test]
    fn lookup_trims_name() {
        let mut ledger = PersonalRecordLedger::new();
        let mut record = lift("Row", 50.0, 3, 10);
        record.name = " Row ".to_string();
        ledger.observe(&record, day("2024-01-01"), &WorkoutId::new());

        assert!(ledger.get("Row").is_some());
        assert!(ledger.get("  Row").is_some());
        assert_eq!(ledger.exercise_names(), vec!["Row"]);
    }

    #[test]
    fn ranked_by_weight_sorts_descending() {
        let mut ledger = PersonalRecordLedger::new();
        let workout = WorkoutId::new();
        ledger.observe(&lift("Curl", 20.0, 3, 10), day("2024-01-01"), &workout);
        ledger.observe(&lift("Squat", 120.0, 5, 5), day("2024-01-01"), &workout);
        ledger.observe(&lift("Bench", 80.0, 5, 5), day("2024-01-01"), &workout);

        let names: Vec<_> = ledger.ranked_by_weight().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Squat", "Bench", "Curl"]);
    }

    #[test]
    fn ledger_serializes_as_name_keyed_object() {
        let mut ledger = PersonalRecordLedger::new();
        let workout = WorkoutId::parse("w1").unwrap();
        ledger.observe(&lift("Bench", 60.0, 3, 8), day("2024-01-01"), &workout);

        let json = serde_json::to_value(&ledger).unwrap();
        assert_eq!(json["Bench"]["workoutId"], "w1");
        assert_eq!(json["Bench"]["date"], "2024-01-01");
        assert!(json["Bench"].get("isNew").is_none());
    }

    #[test]
    fn ledger_ignores_legacy_is_new_marker() {
        let json = r#"{"Bench":{"weight":60,"sets":3,"reps":8,"date":"2024-01-01","workoutId":"w1","isNew":true}}"#;
        let ledger: PersonalRecordLedger = serde_json::from_str(json).unwrap();
        assert_eq!(ledger.get("Bench").unwrap().weight, 60.0);
    }

    proptest! {
        #[test]
        fn record_is_first_maximum(weights in prop::collection::vec(1u32..300, 1..20)) {
            let mut ledger = PersonalRecordLedger::new();
            let workout = WorkoutId::new();
            for (i, w) in weights.iter().enumerate() {
                ledger.observe(&lift("Press", f64::from(*w), 1, i as u32 + 1), day("2024-01-01"), &workout);
            }

            let max = *weights.iter().max().unwrap();
            let first_max = weights.iter().position(|w| *w == max).unwrap();
            let record = ledger.get("Press").unwrap();
            prop_assert_eq!(record.weight, f64::from(max));
            prop_assert_eq!(record.reps, first_max as u32 + 1);
        }
    }
}
