//! Errors surfaced by repository operations.

use thiserror::Error;

use crate::domain::foundation::{DomainError, EntityKind, ErrorCode, ValidationError};
use crate::ports::StorageError;

/// Typed failure of a repository operation.
///
/// Validation and not-found failures are raised before anything is written,
/// so the stored snapshot is left untouched. Storage failures abort the
/// operation in progress.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl RepositoryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RepositoryError::Validation(_) => ErrorCode::ValidationFailed,
            RepositoryError::NotFound { entity, .. } => ErrorCode::not_found(*entity),
            RepositoryError::Storage(_) => ErrorCode::StorageError,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

impl From<DomainError> for RepositoryError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(e) => RepositoryError::Validation(e),
            DomainError::NotFound { entity, id } => RepositoryError::NotFound { entity, id },
        }
    }
}
