//! Error types and utilities for jobtrack

use thiserror::Error;

/// Result type alias for jobtrack operations
pub type Result<T> = std::result::Result<T, JobTrackError>;

/// Main error type for jobtrack operations
#[derive(Error, Debug)]
pub enum JobTrackError {
    /// A month key could not be parsed into a (year, month) pair
    #[error("Malformed month key '{key}': {reason}")]
    MalformedKey { key: String, reason: String },

    /// A negative or non-integer count reached a projection stage
    #[error("Invalid count {count} for '{key}' in {field}")]
    InvalidCount {
        field: String,
        key: String,
        count: String,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Spreadsheet ingestion errors
    #[error("Ingest error: {message}")]
    Ingest {
        message: String,
        row: Option<u64>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },
}

impl JobTrackError {
    /// Create a new malformed month key error
    pub fn malformed_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedKey {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a new invalid count error for `key` inside the mapping `field`.
    /// `count` is the offending value as received.
    pub fn invalid_count(
        field: impl Into<String>,
        key: impl Into<String>,
        count: impl Into<String>,
    ) -> Self {
        Self::InvalidCount {
            field: field.into(),
            key: key.into(),
            count: count.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new ingest error
    pub fn ingest(msg: impl Into<String>) -> Self {
        Self::Ingest {
            message: msg.into(),
            row: None,
            source: None,
        }
    }

    /// Create a new ingest error with source, tied to a spreadsheet line when known
    pub fn ingest_with_source(
        msg: impl Into<String>,
        row: Option<u64>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Ingest {
            message: msg.into(),
            row,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Whether the error is a data-quality condition a projection stage may
    /// recover from locally.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::MalformedKey { .. })
    }
}
