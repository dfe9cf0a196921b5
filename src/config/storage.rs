//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ConfigValidationError;

/// Where the store files live
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding both store files; created on first use
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// File name of the workout store (sessions and personal records)
    #[serde(default = "default_workouts_file")]
    pub workouts_file: String,

    /// File name of the template store
    #[serde(default = "default_templates_file")]
    pub templates_file: String,
}

impl StorageConfig {
    /// Full path of the workout store file
    pub fn workouts_path(&self) -> PathBuf {
        self.data_dir.join(&self.workouts_file)
    }

    /// Full path of the template store file
    pub fn templates_path(&self) -> PathBuf {
        self.data_dir.join(&self.templates_file)
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigValidationError::MissingRequired("storage.data_dir"));
        }
        if self.workouts_file.trim().is_empty() {
            return Err(ConfigValidationError::MissingRequired("storage.workouts_file"));
        }
        if self.templates_file.trim().is_empty() {
            return Err(ConfigValidationError::MissingRequired("storage.templates_file"));
        }
        if self.workouts_path() == self.templates_path() {
            return Err(ConfigValidationError::SharedStoreFile);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            workouts_file: default_workouts_file(),
            templates_file: default_templates_file(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_workouts_file() -> String {
    "workouts.json".to_string()
}

fn default_templates_file() -> String {
    "templates.json".to_string()
}
