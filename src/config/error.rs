//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ConfigValidationError),

    #[error("Tracing initialization failed: {0}")]
    TracingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Workouts and templates must be stored in different files")]
    SharedStoreFile,

    #[error("Weekly volume window must be at least one week")]
    InvalidWeeklyWindow,

    #[error("Top exercise count must be at least one")]
    InvalidTopExercises,

    #[error("Invalid log filter: {0}")]
    InvalidLogLevel(String),
}
