//! Configuration schema definitions using serde.

use jobtrack_common::{LogFormat, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for jobtrack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logging configuration.
    pub logging: LoggingSettings,
    /// Spreadsheet analysis configuration.
    pub analysis: AnalysisSettings,
    /// Projection and chart configuration.
    pub projection: ProjectionSettings,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `jobtrack_stats=debug`.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
    /// File to append logs to instead of stderr.
    pub file: Option<PathBuf>,
}

impl LoggingSettings {
    /// Converts the settings into the subscriber configuration.
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            format: self.format,
            file_path: self.file.clone(),
            ..LoggingConfig::default()
        }
    }
}

/// Cell values the analyzer recognizes in the spreadsheet.
///
/// Matching trims whitespace and is exact unless `ignore_marker_case` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisSettings {
    /// `Is_Remote` value for remote applications.
    pub remote_marker: String,
    /// `Is_Remote` value for onsite applications.
    pub onsite_marker: String,
    /// `Response_Status` value for applications awaiting a reply.
    pub pending_status: String,
    /// `Response_Status` value for rejections.
    pub rejected_status: String,
    /// `Response_Status` value for applications with no status available.
    pub not_available_status: String,
    /// Compare markers ignoring ASCII case, so `yes` counts as `Yes`.
    pub ignore_marker_case: bool,
}

/// Projection and chart configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectionSettings {
    /// How many role titles the top-N breakdown keeps.
    pub top_roles_limit: usize,
    /// Chart color tables.
    pub colors: ColorSettings,
}

/// Index-aligned chart color tables.
///
/// Colors are assigned by position, never by value, so the same slot always
/// gets the same color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorSettings {
    /// Color repeated across every bar of the monthly chart.
    pub monthly_bar: String,
    /// Total, Pending, Rejected, Remote, Onsite.
    pub status: [String; 5],
    /// Remote, Onsite.
    pub work_mode: [String; 2],
    /// One color per rank, wrapping when more than ten roles are ranked.
    pub top_roles: [String; 10],
}
