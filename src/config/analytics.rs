//! Analytics configuration

use serde::Deserialize;

use super::error::ConfigValidationError;

/// Defaults for the derived statistics views
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Number of most recent weeks reported by weekly volume
    #[serde(default = "default_weekly_window")]
    pub weekly_window: usize,

    /// Number of exercises reported by the frequency ranking
    #[serde(default = "default_top_exercises")]
    pub top_exercises: usize,
}

impl AnalyticsConfig {
    /// Validate analytics configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.weekly_window == 0 {
            return Err(ConfigValidationError::InvalidWeeklyWindow);
        }
        if self.top_exercises == 0 {
            return Err(ConfigValidationError::InvalidTopExercises);
        }
        Ok(())
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            weekly_window: default_weekly_window(),
            top_exercises: default_top_exercises(),
        }
    }
}

fn default_weekly_window() -> usize {
    8
}

fn default_top_exercises() -> usize {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analytics_config_defaults() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.weekly_window, 8);
        assert_eq!(config.top_exercises, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_window_rejected() {
        let config = AnalyticsConfig {
            weekly_window: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidWeeklyWindow));
    }
}
