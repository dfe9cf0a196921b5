//! Template aggregate and its separately persisted store.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainError, EntityKind, TemplateId, Timestamp, ValidationError,
};
use crate::domain::workout::ExerciseRecord;

/// Blueprint of one exercise. Carries no identity of its source record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateExercise {
    pub name: String,
    pub weight: f64,
    pub sets: u32,
    pub reps: u32,
    #[serde(default)]
    pub note: String,
}

impl From<&ExerciseRecord> for TemplateExercise {
    fn from(record: &ExerciseRecord) -> Self {
        Self {
            name: record.name.clone(),
            weight: record.weight,
            sets: record.sets,
            reps: record.reps,
            note: record.note.clone(),
        }
    }
}

/// Reusable, session-independent list of exercises.
///
/// Immutable once created; it can only be deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    id: TemplateId,
    name: String,
    created_at: Timestamp,
    exercises: Vec<TemplateExercise>,
}

impl Template {
    /// # Errors
    ///
    /// - `EmptyField` if name is blank or there are no exercises
    pub fn new(name: &str, exercises: Vec<TemplateExercise>) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if exercises.is_empty() {
            return Err(ValidationError::empty_field("exercises"));
        }

        Ok(Self {
            id: TemplateId::new(),
            name: name.to_string(),
            created_at: Timestamp::now(),
            exercises,
        })
    }

    pub fn id(&self) -> &TemplateId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn exercises(&self) -> &[TemplateExercise] {
        &self.exercises
    }

    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            created_at: self.created_at,
            exercise_count: self.exercises.len(),
        }
    }
}

/// Template listing entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: TemplateId,
    pub name: String,
    pub created_at: Timestamp,
    pub exercise_count: usize,
}

/// Root aggregate of the template file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateStore {
    #[serde(default)]
    templates: Vec<Template>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn template(&self, id: &TemplateId) -> Option<&Template> {
        self.templates.iter().find(|t| t.id() == id)
    }

    pub fn summaries(&self) -> Vec<TemplateSummary> {
        self.templates.iter().map(Template::summary).collect()
    }

    pub fn add(
        &mut self,
        name: &str,
        exercises: Vec<TemplateExercise>,
    ) -> Result<&Template, ValidationError> {
        let template = Template::new(name, exercises)?;
        self.templates.push(template);
        Ok(&self.templates[self.templates.len() - 1])
    }

    pub fn remove(&mut self, id: &TemplateId) -> Result<Template, DomainError> {
        let index = self
            .templates
            .iter()
            .position(|t| t.id() == id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Template, id))?;

        Ok(self.templates.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::workout::ExerciseDraft;

    fn exercises() -> Vec<TemplateExercise> {
        let squat = ExerciseRecord::from_draft(ExerciseDraft::new("Squat", 100.0, 5, 5).unwrap());
        let lunge = ExerciseRecord::from_draft(
            ExerciseDraft::new("Lunge", 20.0, 3, 12).unwrap().with_note("per leg"),
        );
        vec![TemplateExercise::from(&squat), TemplateExercise::from(&lunge)]
    }

    #[test]
    fn template_copies_fields_without_ids() {
        let template = Template::new("Leg Day", exercises()).unwrap();
        let json = serde_json::to_value(&template).unwrap();

        assert_eq!(json["exercises"][1]["note"], "per leg");
        assert!(json["exercises"][0].get("id").is_none());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn template_requires_name_and_exercises() {
        assert_eq!(
            Template::new(" ", exercises()).unwrap_err(),
            ValidationError::empty_field("name")
        );
        assert_eq!(
            Template::new("Leg Day", Vec::new()).unwrap_err(),
            ValidationError::empty_field("exercises")
        );
    }

    #[test]
    fn store_adds_lists_and_removes() {
        let mut store = TemplateStore::new();
        let id = store.add("Leg Day", exercises()).unwrap().id().clone();

        let summaries = store.summaries();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].exercise_count, 2);
        assert!(store.template(&id).is_some());

        store.remove(&id).unwrap();
        assert!(store.templates().is_empty());
        assert!(matches!(
            store.remove(&id),
            Err(DomainError::NotFound { entity: EntityKind::Template, .. })
        ));
    }
}
