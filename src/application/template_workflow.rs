//! TemplateWorkflow - Moves exercises between workouts and templates.

use tracing::info;

use super::errors::RepositoryError;
use super::template_repository::TemplateRepository;
use super::workout_repository::WorkoutRepository;
use crate::domain::foundation::{EntityKind, TemplateId, TrainingDate, ValidationError, WorkoutId};
use crate::domain::records::RecordOutcome;
use crate::domain::template::Template;
use crate::domain::workout::{ExerciseDraft, WorkoutSession};

/// Per-exercise changes applied when starting a workout from a template.
///
/// Absent fields keep the template's value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExerciseOverride {
    pub weight: Option<f64>,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
}

impl ExerciseOverride {
    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn sets(mut self, sets: u32) -> Self {
        self.sets = Some(sets);
        self
    }

    pub fn reps(mut self, reps: u32) -> Self {
        self.reps = Some(reps);
        self
    }
}

/// Result of starting a workout from a template.
#[derive(Debug, Clone, PartialEq)]
pub struct StartedWorkout {
    /// The new workout with every template exercise recorded.
    pub session: WorkoutSession,
    /// Record outcome per exercise, in template order.
    pub records: Vec<RecordOutcome>,
}

impl StartedWorkout {
    /// Names of the exercises that set a new personal record.
    pub fn new_records(&self) -> Vec<&str> {
        self.session
            .exercises()
            .iter()
            .zip(&self.records)
            .filter(|(_, outcome)| outcome.is_new())
            .map(|(exercise, _)| exercise.name.as_str())
            .collect()
    }
}

/// Workflows spanning both repositories.
#[derive(Clone)]
pub struct TemplateWorkflow {
    workouts: WorkoutRepository,
    templates: TemplateRepository,
}

impl TemplateWorkflow {
    pub fn new(workouts: WorkoutRepository, templates: TemplateRepository) -> Self {
        Self {
            workouts,
            templates,
        }
    }

    /// Saves an existing workout's exercises as a template.
    ///
    /// A blank `name` falls back to the workout's name.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the workout does not exist
    /// - `Validation` if the workout has no exercises
    pub async fn save_workout_as_template(
        &self,
        workout_id: &WorkoutId,
        name: &str,
    ) -> Result<Template, RepositoryError> {
        let workout = self
            .workouts
            .get_workout(workout_id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound {
                entity: EntityKind::Workout,
                id: workout_id.to_string(),
            })?;

        let name = if name.trim().is_empty() {
            workout.name()
        } else {
            name
        };

        self.templates.save_template(name, workout.exercises()).await
    }

    /// Creates a workout and records every template exercise in it.
    ///
    /// `overrides` applies by position; missing entries keep the template's
    /// values. Exercises go through the regular add path, so personal
    /// records update. A blank `name` falls back to the template's name.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the template does not exist
    /// - `Validation` if the date or any overridden value is invalid; nothing
    ///   is written in that case
    pub async fn start_workout_from_template(
        &self,
        template_id: &TemplateId,
        name: &str,
        date: &str,
        overrides: &[ExerciseOverride],
    ) -> Result<StartedWorkout, RepositoryError> {
        let template = self
            .templates
            .get_template(template_id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound {
                entity: EntityKind::Template,
                id: template_id.to_string(),
            })?;

        let date = TrainingDate::parse(date)?;
        let drafts = template
            .exercises()
            .iter()
            .enumerate()
            .map(|(i, exercise)| {
                let adjust = overrides.get(i).copied().unwrap_or_default();
                ExerciseDraft::new(
                    &exercise.name,
                    adjust.weight.unwrap_or(exercise.weight),
                    adjust.sets.unwrap_or(exercise.sets),
                    adjust.reps.unwrap_or(exercise.reps),
                )
                .map(|draft| draft.with_note(exercise.note.clone()))
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        let name = if name.trim().is_empty() {
            template.name()
        } else {
            name
        };
        let mut session = self
            .workouts
            .create_workout(name, &date.to_string())
            .await?;

        let mut records = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let added = self.workouts.add_exercise(session.id(), draft).await?;
            records.push(added.record);
            session = added.session;
        }

        info!(
            template_id = %template_id,
            workout_id = %session.id(),
            exercises = records.len(),
            "Workout started from template"
        );
        Ok(StartedWorkout { session, records })
    }
}
