//! Volume computation and per-session summaries.

use serde::Serialize;

use crate::domain::workout::{ExerciseRecord, WorkoutSession};

/// The heaviest exercise of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaviestLift {
    pub name: String,
    pub weight: f64,
}

/// Derived figures for one session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub total_volume: f64,
    pub exercise_count: usize,
    pub heaviest_lift: Option<HeaviestLift>,
    pub formatted_date: String,
}

/// Volume and summary functions.
pub struct VolumeAnalyzer;

impl VolumeAnalyzer {
    /// Sum of weight × sets × reps. Zero for an empty slice.
    pub fn compute_volume(exercises: &[ExerciseRecord]) -> f64 {
        exercises.iter().fold(0.0, |total, e| total + e.volume())
    }

    /// Summarizes a session.
    ///
    /// # Edge Cases
    /// - No exercises: volume 0, no heaviest lift
    /// - Equal top weights: the earliest exercise wins
    pub fn summarize(session: &WorkoutSession) -> SessionSummary {
        let exercises = session.exercises();

        let heaviest = exercises.iter().fold(None::<&ExerciseRecord>, |best, e| match best {
            Some(b) if e.weight <= b.weight => Some(b),
            _ => Some(e),
        });

        SessionSummary {
            total_volume: Self::compute_volume(exercises),
            exercise_count: exercises.len(),
            heaviest_lift: heaviest.map(|e| HeaviestLift {
                name: e.name.clone(),
                weight: e.weight,
            }),
            formatted_date: session.date().long_form(),
        }
    }
}
