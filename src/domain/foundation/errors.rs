//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised when input fails validation, before any mutation happens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be positive, got {actual}")]
    NotPositive { field: String, actual: f64 },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a non-positive value validation error.
    pub fn not_positive(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::NotPositive {
            field: field.into(),
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::NotPositive { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Kind of entity a lookup failed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Workout,
    Exercise,
    Template,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Workout => "Workout",
            EntityKind::Exercise => "Exercise",
            EntityKind::Template => "Template",
        };
        write!(f, "{}", s)
    }
}

/// Failure of an in-memory store mutation. Raised before anything changes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: String },
}

impl DomainError {
    /// Creates a not-found error for the given entity.
    pub fn not_found(entity: EntityKind, id: impl fmt::Display) -> Self {
        DomainError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(_) => ErrorCode::ValidationFailed,
            DomainError::NotFound { entity, .. } => ErrorCode::not_found(*entity),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    WorkoutNotFound,
    ExerciseNotFound,
    TemplateNotFound,

    // Infrastructure errors
    StorageError,
}

impl ErrorCode {
    /// Not-found code for an entity kind.
    pub fn not_found(entity: EntityKind) -> Self {
        match entity {
            EntityKind::Workout => ErrorCode::WorkoutNotFound,
            EntityKind::Exercise => ErrorCode::ExerciseNotFound,
            EntityKind::Template => ErrorCode::TemplateNotFound,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::WorkoutNotFound => "WORKOUT_NOT_FOUND",
            ErrorCode::ExerciseNotFound => "EXERCISE_NOT_FOUND",
            ErrorCode::TemplateNotFound => "TEMPLATE_NOT_FOUND",
            ErrorCode::StorageError => "STORAGE_ERROR",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("name");
        assert_eq!(format!("{}", err), "Field 'name' cannot be empty");
    }

    #[test]
    fn validation_error_not_positive_displays_correctly() {
        let err = ValidationError::not_positive("weight", -5.0);
        assert_eq!(format!("{}", err), "Field 'weight' must be positive, got -5");
    }

    #[test]
    fn validation_error_reports_its_field() {
        let err = ValidationError::invalid_format("sets", "not a number");
        assert_eq!(err.field(), "sets");
    }

    #[test]
    fn domain_error_not_found_displays_entity_and_id() {
        let err = DomainError::not_found(EntityKind::Template, "tpl-9");
        assert_eq!(format!("{}", err), "Template not found: tpl-9");
        assert_eq!(err.code(), ErrorCode::TemplateNotFound);
    }

    #[test]
    fn domain_error_wraps_validation_transparently() {
        let err: DomainError = ValidationError::empty_field("name").into();
        assert_eq!(format!("{}", err), "Field 'name' cannot be empty");
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::WorkoutNotFound), "WORKOUT_NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::StorageError), "STORAGE_ERROR");
    }
}
