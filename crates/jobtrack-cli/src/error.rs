//! Application-wide error types using thiserror.

use jobtrack_common::JobTrackError;
use jobtrack_config::ConfigError;
use std::path::PathBuf;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Analysis or projection error.
    #[error(transparent)]
    JobTrack(#[from] JobTrackError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An input file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the CLI application.
pub type CliResult<T> = Result<T, CliError>;
