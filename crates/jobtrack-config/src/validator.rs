//! Runtime validation of a loaded configuration.

use crate::loader::ConfigError;
use crate::schema::{AnalysisSettings, ColorSettings, Config};

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        jobtrack_common::validate_filter(&config.logging.level).map_err(|_| ConfigError::Invalid {
            field: "logging.level".to_string(),
            message: format!("'{}' is not a valid filter directive", config.logging.level),
        })?;

        Self::validate_analysis(&config.analysis)?;
        Self::validate_colors(&config.projection.colors)?;
        Ok(())
    }

    fn validate_analysis(analysis: &AnalysisSettings) -> Result<(), ConfigError> {
        let markers = [
            ("analysis.remote_marker", &analysis.remote_marker),
            ("analysis.onsite_marker", &analysis.onsite_marker),
            ("analysis.pending_status", &analysis.pending_status),
            ("analysis.rejected_status", &analysis.rejected_status),
            ("analysis.not_available_status", &analysis.not_available_status),
        ];
        for (field, value) in markers {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid(field, "must not be empty"));
            }
        }

        if analysis
            .remote_marker
            .trim()
            .eq_ignore_ascii_case(analysis.onsite_marker.trim())
        {
            return Err(ConfigError::invalid(
                "analysis.onsite_marker",
                "must differ from analysis.remote_marker",
            ));
        }

        Ok(())
    }

    fn validate_colors(colors: &ColorSettings) -> Result<(), ConfigError> {
        if colors.monthly_bar.trim().is_empty() {
            return Err(ConfigError::invalid("projection.colors.monthly_bar", "must not be empty"));
        }

        let tables: [(&str, &[String]); 3] = [
            ("projection.colors.status", colors.status.as_slice()),
            ("projection.colors.work_mode", colors.work_mode.as_slice()),
            ("projection.colors.top_roles", colors.top_roles.as_slice()),
        ];
        for (field, table) in tables {
            if let Some(index) = table.iter().position(|color| color.trim().is_empty()) {
                return Err(ConfigError::invalid(field, format!("entry {index} must not be empty")));
            }
        }

        Ok(())
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigValidator::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_empty_marker_is_rejected() {
        let mut config = Config::default();
        config.analysis.pending_status = "  ".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref field, .. } if field == "analysis.pending_status"));
    }

    #[test]
    fn test_identical_work_mode_markers_are_rejected() {
        let mut config = Config::default();
        config.analysis.onsite_marker = "yes".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_palette_entry_is_rejected() {
        let mut config = Config::default();
        config.projection.colors.status[3] = String::new();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("entry 3"));
    }

    #[test]
    fn test_bad_log_level_is_rejected() {
        let mut config = Config::default();
        config.logging.level = "jobtrack=shouting".to_string();

        assert!(config.validate().is_err());
    }
}
