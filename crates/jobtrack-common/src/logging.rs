//! Structured logging infrastructure for jobtrack

use crate::{JobTrackError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;
use tracing_subscriber::{
    fmt::{self as tracing_fmt, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Output format of the fmt layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human readable output
    #[default]
    Pretty,
    /// Single-line human readable output
    Compact,
    /// Newline-delimited JSON objects
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for LogFormat {
    type Err = JobTrackError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(JobTrackError::validation_field(
                format!("unknown log format '{other}', expected pretty, compact or json"),
                "format",
            )),
        }
    }
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive (e.g., "info", "jobtrack_stats=debug")
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Optional file to append to instead of stderr
    pub file_path: Option<PathBuf>,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file_path: None,
            include_targets: true,
        }
    }
}

/// Checks that `directive` is a valid `EnvFilter` directive.
pub fn validate_filter(directive: &str) -> Result<()> {
    EnvFilter::try_new(directive)
        .map(|_| ())
        .map_err(|e| JobTrackError::config_with_source(format!("invalid log filter '{directive}'"), e))
}

/// Initialize the global tracing subscriber.
///
/// Logs go to stderr unless a file is configured, so stdout stays free for
/// command output.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.level).map_err(|e| {
        JobTrackError::config_with_source(format!("invalid log filter '{}'", config.level), e)
    })?;

    let (writer, ansi) = match &config.file_path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(
                tracing_fmt::layer()
                    .json()
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                tracing_fmt::layer()
                    .pretty()
                    .with_ansi(ansi)
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                tracing_fmt::layer()
                    .compact()
                    .with_ansi(ansi)
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init(),
    };

    result.map_err(|e| JobTrackError::config_with_source("failed to install tracing subscriber", e))?;

    tracing::debug!(level = %config.level, format = %config.format, "Logging initialized");
    Ok(())
}
