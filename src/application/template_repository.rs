//! TemplateRepository - Operations over reusable exercise templates.
//!
//! Templates live in their own snapshot, independent of workout sessions.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::errors::RepositoryError;
use crate::domain::foundation::{DomainError, TemplateId};
use crate::domain::template::{Template, TemplateExercise, TemplateStore, TemplateSummary};
use crate::domain::workout::ExerciseRecord;
use crate::ports::SnapshotStorage;

/// Repository for templates.
///
/// Clones share one write lock; mutations never interleave.
#[derive(Clone)]
pub struct TemplateRepository {
    storage: Arc<dyn SnapshotStorage<TemplateStore>>,
    write_lock: Arc<Mutex<()>>,
}

impl TemplateRepository {
    pub fn new(storage: Arc<dyn SnapshotStorage<TemplateStore>>) -> Self {
        Self {
            storage,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn mutate<T, F>(&self, apply: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut TemplateStore) -> Result<T, DomainError> + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut store = self.storage.load().await?;
        let value = apply(&mut store)?;
        self.storage.save(&store).await?;
        Ok(value)
    }

    /// Saves a template copied from `exercises`, dropping their ids.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name is blank or `exercises` is empty
    pub async fn save_template(
        &self,
        name: &str,
        exercises: &[ExerciseRecord],
    ) -> Result<Template, RepositoryError> {
        let blueprint: Vec<TemplateExercise> = exercises.iter().map(TemplateExercise::from).collect();

        let template = self
            .mutate(|store| Ok(store.add(name, blueprint)?.clone()))
            .await?;

        info!(
            template_id = %template.id(),
            exercises = template.exercises().len(),
            "Template saved"
        );
        Ok(template)
    }

    /// Summaries of all templates in creation order.
    pub async fn get_templates(&self) -> Result<Vec<TemplateSummary>, RepositoryError> {
        let store = self.storage.load().await?;
        Ok(store.summaries())
    }

    pub async fn get_template(
        &self,
        template_id: &TemplateId,
    ) -> Result<Option<Template>, RepositoryError> {
        let store = self.storage.load().await?;
        Ok(store.template(template_id).cloned())
    }

    pub async fn remove_template(
        &self,
        template_id: &TemplateId,
    ) -> Result<Template, RepositoryError> {
        let removed = self.mutate(|store| store.remove(template_id)).await?;

        info!(template_id = %template_id, "Template deleted");
        Ok(removed)
    }

    /// Idempotent delete: `Ok(false)` if no such template exists.
    pub async fn delete_template(&self, template_id: &TemplateId) -> Result<bool, RepositoryError> {
        match self.remove_template(template_id).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => {
                debug!(template_id = %template_id, "Delete of unknown template ignored");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySnapshotStorage;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::workout::ExerciseDraft;

    fn repository() -> (TemplateRepository, InMemorySnapshotStorage<TemplateStore>) {
        let storage = InMemorySnapshotStorage::new();
        let repo = TemplateRepository::new(Arc::new(storage.clone()));
        (repo, storage)
    }

    fn record(name: &str, weight: f64) -> ExerciseRecord {
        ExerciseRecord::from_draft(ExerciseDraft::new(name, weight, 5, 5).unwrap())
    }

    #[tokio::test]
    async fn save_template_strips_exercise_ids() {
        let (repo, _) = repository();
        let exercises = vec![record("Squat", 100.0), record("Lunge", 30.0)];

        let saved = repo.save_template("Leg Day", &exercises).await.unwrap();
        let loaded = repo.get_template(saved.id()).await.unwrap().unwrap();

        assert_eq!(loaded.name(), "Leg Day");
        assert_eq!(loaded.exercises().len(), 2);
        assert_eq!(loaded.exercises()[0].name, "Squat");
        assert_eq!(loaded.exercises()[1].weight, 30.0);
        let json = serde_json::to_value(&loaded).unwrap();
        assert!(json["exercises"][0].get("id").is_none());
    }

    #[tokio::test]
    async fn save_template_validates_before_writing() {
        let (repo, storage) = repository();

        let blank = repo.save_template("  ", &[record("Squat", 100.0)]).await.unwrap_err();
        let empty = repo.save_template("Leg Day", &[]).await.unwrap_err();

        assert_eq!(blank.code(), ErrorCode::ValidationFailed);
        assert_eq!(empty.code(), ErrorCode::ValidationFailed);
        assert_eq!(storage.save_count(), 0);
    }

    #[tokio::test]
    async fn get_templates_lists_summaries_in_creation_order() {
        let (repo, _) = repository();
        repo.save_template("Leg Day", &[record("Squat", 100.0)]).await.unwrap();
        repo.save_template("Push Day", &[record("Bench", 60.0), record("Dips", 20.0)])
            .await
            .unwrap();

        let summaries = repo.get_templates().await.unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "Leg Day");
        assert_eq!(summaries[1].exercise_count, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_saves_are_all_persisted() {
        let (repo, _) = repository();

        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..6 {
            let repo = repo.clone();
            let exercises = vec![record("Squat", 100.0 + f64::from(i))];
            tasks.spawn(async move {
                repo.save_template(&format!("Variation {}", i), &exercises).await
            });
        }
        while let Some(joined) = tasks.join_next().await {
            joined.unwrap().unwrap();
        }

        assert_eq!(repo.get_templates().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn delete_template_is_idempotent() {
        let (repo, _) = repository();
        let saved = repo.save_template("Leg Day", &[record("Squat", 100.0)]).await.unwrap();

        assert!(repo.delete_template(saved.id()).await.unwrap());
        assert!(!repo.delete_template(saved.id()).await.unwrap());
        assert!(repo.get_template(saved.id()).await.unwrap().is_none());

        let err = repo.remove_template(saved.id()).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::TemplateNotFound);
    }
}
