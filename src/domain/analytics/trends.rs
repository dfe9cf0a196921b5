//! Cross-session aggregates: weekly volume, exercise frequency, totals.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use super::volume::VolumeAnalyzer;
use crate::domain::foundation::TrainingDate;
use crate::domain::workout::WorkoutSession;

/// Total volume of the sessions in one Monday-anchored week.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyVolume {
    pub week_start: TrainingDate,
    pub volume: f64,
}

/// How many times an exercise name was logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseFrequency {
    pub name: String,
    pub count: usize,
}

/// Whole-history totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingOverview {
    pub total_workouts: usize,
    pub total_exercises: usize,
    pub total_volume: f64,
    pub first_date: Option<TrainingDate>,
    pub last_date: Option<TrainingDate>,
}

/// Trend functions over a set of sessions.
pub struct TrendAnalyzer;

impl TrendAnalyzer {
    /// Volume per week, chronological, limited to the latest `window` weeks.
    ///
    /// # Algorithm
    /// Each session is bucketed by the Monday starting its week (Sunday
    /// belongs to the preceding Monday). Weeks without sessions are absent.
    pub fn weekly_volume(sessions: &[WorkoutSession], window: usize) -> Vec<WeeklyVolume> {
        let mut weeks: BTreeMap<TrainingDate, f64> = BTreeMap::new();
        for session in sessions {
            *weeks.entry(session.date().week_start()).or_insert(0.0) +=
                VolumeAnalyzer::compute_volume(session.exercises());
        }

        let skip = weeks.len().saturating_sub(window);
        weeks
            .into_iter()
            .skip(skip)
            .map(|(week_start, volume)| WeeklyVolume { week_start, volume })
            .collect()
    }

    /// Exercise names ranked by occurrence count, highest first.
    ///
    /// Equal counts keep first-seen order.
    pub fn exercise_frequency(sessions: &[WorkoutSession]) -> Vec<ExerciseFrequency> {
        let mut ranking: Vec<ExerciseFrequency> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for exercise in sessions.iter().flat_map(|s| s.exercises()) {
            match index.get(exercise.name.as_str()) {
                Some(&i) => ranking[i].count += 1,
                None => {
                    index.insert(exercise.name.as_str(), ranking.len());
                    ranking.push(ExerciseFrequency {
                        name: exercise.name.clone(),
                        count: 1,
                    });
                }
            }
        }

        ranking.sort_by(|a, b| b.count.cmp(&a.count));
        ranking
    }

    pub fn overview(sessions: &[WorkoutSession]) -> TrainingOverview {
        TrainingOverview {
            total_workouts: sessions.len(),
            total_exercises: sessions.iter().map(WorkoutSession::exercise_count).sum(),
            total_volume: sessions.iter().fold(0.0, |total, s| {
                total + VolumeAnalyzer::compute_volume(s.exercises())
            }),
            first_date: sessions.iter().map(WorkoutSession::date).min(),
            last_date: sessions.iter().map(WorkoutSession::date).max(),
        }
    }
}
