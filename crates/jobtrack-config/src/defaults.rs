//! Default values, including the fixed chart palettes.

use crate::schema::{AnalysisSettings, ColorSettings, LoggingSettings, ProjectionSettings};
use jobtrack_common::LogFormat;

/// Number of role titles kept by the top-N breakdown.
pub const DEFAULT_TOP_ROLES_LIMIT: usize = 10;

/// Bar color of the monthly applications chart.
pub const MONTHLY_BAR_COLOR: &str = "rgba(75, 192, 192, 0.6)";

/// Status chart palette: Total, Pending, Rejected, Remote, Onsite.
pub const STATUS_PALETTE: [&str; 5] = ["#36A2EB", "#FFCE56", "#FF6384", "#4BC0C0", "#9966FF"];

/// Work-mode proportion palette: Remote, Onsite.
pub const WORK_MODE_PALETTE: [&str; 2] = ["#4BC0C0", "#9966FF"];

/// Top roles palette, one color per rank.
pub const TOP_ROLES_PALETTE: [&str; 10] = [
    "#e74c3c", // #1 - Red
    "#f39c12", // #2 - Orange
    "#f1c40f", // #3 - Yellow
    "#2ecc71", // #4 - Green
    "#3498db", // #5 - Blue
    "#9b59b6", // #6 - Purple
    "#1abc9c", // #7 - Teal
    "#34495e", // #8 - Dark gray
    "#95a5a6", // #9 - Gray
    "#7f8c8d", // #10 - Light gray
];

fn owned<const N: usize>(palette: [&str; N]) -> [String; N] {
    palette.map(str::to_string)
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file: None,
        }
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            remote_marker: "Yes".to_string(),
            onsite_marker: "No".to_string(),
            pending_status: "Waiting...".to_string(),
            rejected_status: "Rejected".to_string(),
            not_available_status: "N/A".to_string(),
            ignore_marker_case: false,
        }
    }
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            top_roles_limit: DEFAULT_TOP_ROLES_LIMIT,
            colors: ColorSettings::default(),
        }
    }
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            monthly_bar: MONTHLY_BAR_COLOR.to_string(),
            status: owned(STATUS_PALETTE),
            work_mode: owned(WORK_MODE_PALETTE),
            top_roles: owned(TOP_ROLES_PALETTE),
        }
    }
}
