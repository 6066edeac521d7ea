//! Configuration loading utilities

use crate::schema::Config;
use jobtrack_common::{JobTrackError, LogFormat};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "JOBTRACK_CONFIG_PATH";
/// Environment variable overriding `logging.level`.
pub const LOG_LEVEL_ENV: &str = "JOBTRACK_LOG_LEVEL";
/// Environment variable overriding `logging.format`.
pub const LOG_FORMAT_ENV: &str = "JOBTRACK_LOG_FORMAT";
/// Environment variable overriding `projection.top_roles_limit`.
pub const TOP_ROLES_LIMIT_ENV: &str = "JOBTRACK_TOP_ROLES_LIMIT";

/// File names searched in the working directory when no path is given.
const DEFAULT_FILE_NAMES: [&str; 2] = ["jobtrack.yaml", "jobtrack.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {message}")]
    EnvParse { var: String, message: String },

    /// Configuration validation error
    #[error("Invalid configuration value for '{field}': {message}")]
    Invalid { field: String, message: String },
}

impl ConfigError {
    /// Create a new validation error for `field`
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<ConfigError> for JobTrackError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Invalid { field, message } => Self::validation_field(message, field),
            other => Self::config_with_source("configuration loading failed", other),
        }
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads, overrides and validates configuration.
    ///
    /// Resolution order: `explicit`, then `JOBTRACK_CONFIG_PATH`, then
    /// `jobtrack.yaml`/`jobtrack.yml` in the working directory, then defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        let env_path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        let path = explicit
            .map(Path::to_path_buf)
            .or(env_path)
            .or_else(|| {
                DEFAULT_FILE_NAMES
                    .iter()
                    .map(PathBuf::from)
                    .find(|candidate| candidate.exists())
            });

        let mut config = match path {
            Some(path) => Self::read_file(&path)?,
            None => {
                debug!("No configuration file found, using defaults");
                Config::default()
            }
        };

        Self::apply_overrides(&mut config, |var| std::env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates configuration from a specific file, without
    /// environment overrides.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let config = Self::read_file(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml(content: &str) -> Result<Config, ConfigError> {
        // An empty document deserializes to unit, not to a defaulted struct.
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    fn read_file(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Applies overrides read through `lookup`, normally the process
    /// environment.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            config.logging.level = level;
        }

        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            config.logging.format =
                format
                    .parse::<LogFormat>()
                    .map_err(|e| ConfigError::EnvParse {
                        var: LOG_FORMAT_ENV.to_string(),
                        message: e.to_string(),
                    })?;
        }

        if let Some(limit) = lookup(TOP_ROLES_LIMIT_ENV) {
            config.projection.top_roles_limit =
                limit.trim().parse().map_err(|e: std::num::ParseIntError| ConfigError::EnvParse {
                    var: TOP_ROLES_LIMIT_ENV.to_string(),
                    message: e.to_string(),
                })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ConfigLoader::from_yaml("projection:\n  top_roles_limit: 5\n").unwrap();
        assert_eq!(config.projection.top_roles_limit, 5);
        assert_eq!(config.projection.colors, crate::ColorSettings::default());
        assert_eq!(config.analysis, crate::AnalysisSettings::default());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(ConfigLoader::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(matches!(
            ConfigLoader::from_yaml("projection:\n  top_n: 5\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_short_palette_is_rejected() {
        let yaml = "projection:\n  colors:\n    work_mode: [\"#000000\"]\n";
        assert!(ConfigLoader::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        let lookup = lookup_from(&[
            (LOG_LEVEL_ENV, "debug"),
            (LOG_FORMAT_ENV, "json"),
            (TOP_ROLES_LIMIT_ENV, " 3 "),
        ]);

        ConfigLoader::apply_overrides(&mut config, lookup).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.projection.top_roles_limit, 3);
    }

    #[test]
    fn test_bad_env_override_names_the_variable() {
        let mut config = Config::default();
        let err = ConfigLoader::apply_overrides(&mut config, lookup_from(&[(TOP_ROLES_LIMIT_ENV, "ten")]))
            .unwrap_err();

        assert!(matches!(err, ConfigError::EnvParse { ref var, .. } if var == TOP_ROLES_LIMIT_ENV));
    }

    #[test]
    fn test_invalid_converts_to_validation_error() {
        let err: JobTrackError = ConfigError::invalid("analysis.remote_marker", "must not be empty").into();
        assert!(matches!(
            err,
            JobTrackError::Validation { field: Some(ref f), .. } if f == "analysis.remote_marker"
        ));
    }
}
