//! Fixed summary counters and the summary table.

use jobtrack_common::AnalysisRecord;
use serde::Serialize;
use std::fmt::Write;

/// One of the fixed counters of an [`AnalysisRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryCounter {
    /// `totalApplications`
    Total,
    /// `pendingApplications`
    Pending,
    /// `notAvailableApplications`
    NotAvailable,
    /// `rejectedApplications`
    Rejected,
    /// `remoteApplications`
    Remote,
    /// `onsiteApplications`
    Onsite,
}

/// Row order of the summary table.
pub const SUMMARY_TABLE_ORDER: [SummaryCounter; 6] = [
    SummaryCounter::Total,
    SummaryCounter::Pending,
    SummaryCounter::NotAvailable,
    SummaryCounter::Rejected,
    SummaryCounter::Remote,
    SummaryCounter::Onsite,
];

impl SummaryCounter {
    /// Table label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Total => "Total Applications",
            Self::Pending => "Pending Applications",
            Self::NotAvailable => "Not Available Applications",
            Self::Rejected => "Rejected Applications",
            Self::Remote => "Remote Applications",
            Self::Onsite => "Onsite Applications",
        }
    }

    /// Chart axis label.
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Total => "Total",
            Self::Pending => "Pending",
            Self::NotAvailable => "Not Available",
            Self::Rejected => "Rejected",
            Self::Remote => "Remote",
            Self::Onsite => "Onsite",
        }
    }

    /// Reads the counter from `record`.
    pub const fn value(self, record: &AnalysisRecord) -> u64 {
        match self {
            Self::Total => record.total_applications,
            Self::Pending => record.pending_applications,
            Self::NotAvailable => record.not_available_applications,
            Self::Rejected => record.rejected_applications,
            Self::Remote => record.remote_applications,
            Self::Onsite => record.onsite_applications,
        }
    }
}

/// A (label, value) row of the summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    /// Counter label.
    pub label: String,
    /// Counter value.
    pub value: u64,
}

/// Builds the summary table in [`SUMMARY_TABLE_ORDER`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryTableBuilder;

impl SummaryTableBuilder {
    /// Create a new builder
    pub const fn new() -> Self {
        Self
    }

    /// Builds the six rows for `record`.
    pub fn build(&self, record: &AnalysisRecord) -> Vec<SummaryRow> {
        SUMMARY_TABLE_ORDER
            .iter()
            .map(|counter| SummaryRow {
                label: counter.label().to_string(),
                value: counter.value(record),
            })
            .collect()
    }
}

/// Renders rows as aligned `label  value` lines.
pub fn render_rows(rows: &[SummaryRow]) -> String {
    let width = rows.iter().map(|row| row.label.len()).max().unwrap_or(0);
    let mut out = String::new();
    for row in rows {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{:<width$}  {}", row.label, row.value);
    }
    out
}
