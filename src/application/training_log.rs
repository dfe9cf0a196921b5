//! TrainingLog - Wires repositories, workflows and analytics together.

use std::sync::Arc;
use tracing::info;

use super::errors::RepositoryError;
use super::template_repository::TemplateRepository;
use super::template_workflow::TemplateWorkflow;
use super::workout_repository::WorkoutRepository;
use crate::adapters::storage::JsonFileStorage;
use crate::config::{AnalyticsConfig, AppConfig, StorageConfig};
use crate::domain::analytics::{
    ExerciseFrequency, HistoryAnalyzer, HistoryEntry, SessionSummary, TrainingOverview,
    TrendAnalyzer, Trend, VolumeAnalyzer, WeeklyVolume,
};
use crate::domain::foundation::WorkoutId;
use crate::domain::template::TemplateStore;
use crate::domain::workout::WorkoutStore;
use crate::ports::SnapshotStorage;

/// Entry point to the training log.
#[derive(Clone)]
pub struct TrainingLog {
    workouts: WorkoutRepository,
    templates: TemplateRepository,
    workflow: TemplateWorkflow,
    analytics: AnalyticsConfig,
}

impl TrainingLog {
    /// Build a log over arbitrary storage backends
    pub fn new(
        workout_storage: Arc<dyn SnapshotStorage<WorkoutStore>>,
        template_storage: Arc<dyn SnapshotStorage<TemplateStore>>,
        analytics: AnalyticsConfig,
    ) -> Self {
        let workouts = WorkoutRepository::new(workout_storage);
        let templates = TemplateRepository::new(template_storage);
        let workflow = TemplateWorkflow::new(workouts.clone(), templates.clone());
        Self {
            workouts,
            templates,
            workflow,
            analytics,
        }
    }

    /// Build a log backed by JSON files at the configured locations
    pub fn with_files(storage: &StorageConfig, analytics: AnalyticsConfig) -> Self {
        info!(
            workouts = %storage.workouts_path().display(),
            templates = %storage.templates_path().display(),
            "Opening training log"
        );
        Self::new(
            Arc::new(JsonFileStorage::<WorkoutStore>::new(storage.workouts_path())),
            Arc::new(JsonFileStorage::<TemplateStore>::new(storage.templates_path())),
            analytics,
        )
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_files(&config.storage, config.analytics.clone())
    }

    pub fn workouts(&self) -> &WorkoutRepository {
        &self.workouts
    }

    pub fn templates(&self) -> &TemplateRepository {
        &self.templates
    }

    pub fn workflow(&self) -> &TemplateWorkflow {
        &self.workflow
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Analytics over the current snapshot
    // ════════════════════════════════════════════════════════════════════════════

    /// Volume summary of one workout, or `None` if it does not exist
    pub async fn summarize_workout(
        &self,
        workout_id: &WorkoutId,
    ) -> Result<Option<SessionSummary>, RepositoryError> {
        let workout = self.workouts.get_workout(workout_id).await?;
        Ok(workout.as_ref().map(VolumeAnalyzer::summarize))
    }

    /// Volume of the most recent weeks, using the configured window
    pub async fn weekly_volume(&self) -> Result<Vec<WeeklyVolume>, RepositoryError> {
        let sessions = self.workouts.all_sessions().await?;
        Ok(TrendAnalyzer::weekly_volume(
            &sessions,
            self.analytics.weekly_window,
        ))
    }

    /// Most frequently logged exercises, limited to the configured count
    pub async fn top_exercises(&self) -> Result<Vec<ExerciseFrequency>, RepositoryError> {
        let sessions = self.workouts.all_sessions().await?;
        let mut ranking = TrendAnalyzer::exercise_frequency(&sessions);
        ranking.truncate(self.analytics.top_exercises);
        Ok(ranking)
    }

    pub async fn overview(&self) -> Result<TrainingOverview, RepositoryError> {
        let sessions = self.workouts.all_sessions().await?;
        Ok(TrendAnalyzer::overview(&sessions))
    }

    /// History of an exercise paired with the change from the previous entry
    pub async fn exercise_progress(
        &self,
        name: &str,
    ) -> Result<Vec<(HistoryEntry, Trend)>, RepositoryError> {
        let history = self.workouts.get_exercise_history(name).await?;
        let trend = HistoryAnalyzer::progress_trend(&history);
        Ok(history.into_iter().zip(trend).collect())
    }
}
