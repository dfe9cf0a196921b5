//! Per-exercise history timelines and progress trends.

use serde::Serialize;

use crate::domain::foundation::{TrainingDate, WorkoutId};
use crate::domain::workout::WorkoutSession;

/// One occurrence of an exercise in a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub date: TrainingDate,
    pub weight: f64,
    pub sets: u32,
    pub reps: u32,
    pub workout_name: String,
    pub workout_id: WorkoutId,
}

/// Weight change of a history entry relative to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "direction", content = "delta", rename_all = "lowercase")]
pub enum Trend {
    /// First entry; nothing to compare against.
    Baseline,
    Up(f64),
    Down(f64),
    Flat,
}

/// History and trend functions.
pub struct HistoryAnalyzer;

impl HistoryAnalyzer {
    /// Every exercise named exactly `name`, oldest first.
    ///
    /// Entries on the same date keep their storage order.
    pub fn exercise_history(sessions: &[WorkoutSession], name: &str) -> Vec<HistoryEntry> {
        let mut entries: Vec<HistoryEntry> = sessions
            .iter()
            .flat_map(|session| {
                session
                    .exercises()
                    .iter()
                    .filter(move |e| e.name == name)
                    .map(move |e| HistoryEntry {
                        date: session.date(),
                        weight: e.weight,
                        sets: e.sets,
                        reps: e.reps,
                        workout_name: session.name().to_string(),
                        workout_id: session.id().clone(),
                    })
            })
            .collect();

        // sort_by_key is stable
        entries.sort_by_key(|e| e.date);
        entries
    }

    /// Trend of each entry, parallel to `history`.
    pub fn progress_trend(history: &[HistoryEntry]) -> Vec<Trend> {
        let mut trends = Vec::with_capacity(history.len());
        let mut previous: Option<f64> = None;

        for entry in history {
            let trend = match previous {
                None => Trend::Baseline,
                Some(prev) if entry.weight > prev => Trend::Up(entry.weight - prev),
                Some(prev) if entry.weight < prev => Trend::Down(entry.weight - prev),
                Some(_) => Trend::Flat,
            };
            trends.push(trend);
            previous = Some(entry.weight);
        }

        trends
    }
}
