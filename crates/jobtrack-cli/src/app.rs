//! Command execution.

use crate::cli::{Command, OutputFormat};
use crate::error::{CliError, CliResult};
use jobtrack_analysis::ApplicationAnalyzer;
use jobtrack_common::AnalysisRecord;
use jobtrack_config::Config;
use jobtrack_stats::{render_rows, Projection, ProjectionPipeline, SummaryRow};
use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;
use tracing::{info, instrument};

/// Runs commands against a loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct App {
    config: Config,
}

impl App {
    /// Creates an application from validated configuration.
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Executes `command`, writing its output to `out` unless the command
    /// names its own destination.
    #[instrument(skip_all)]
    pub fn run<W: Write>(&self, command: &Command, out: &mut W) -> CliResult<()> {
        match command {
            Command::Analyze { csv, out: target } => {
                let record = self.analyzer().analyze_path(csv)?;
                let json = record.to_json_pretty()?;
                match target {
                    Some(path) => {
                        std::fs::write(path, format!("{json}\n"))?;
                        info!(path = %path.display(), "Wrote analysis record");
                    }
                    None => writeln!(out, "{json}")?,
                }
                Ok(())
            }
            Command::Project { record, format, top } => {
                let record = read_record(record)?;
                self.emit(&record, *format, *top, out)
            }
            Command::Report { csv, format, top } => {
                let record = self.analyzer().analyze_path(csv)?;
                self.emit(&record, *format, *top, out)
            }
        }
    }

    fn analyzer(&self) -> ApplicationAnalyzer {
        ApplicationAnalyzer::new(self.config.analysis.clone())
    }

    fn pipeline(&self, top: Option<usize>) -> ProjectionPipeline {
        let mut settings = self.config.projection.clone();
        if let Some(limit) = top {
            settings.top_roles_limit = limit;
        }
        ProjectionPipeline::new(&settings)
    }

    fn emit<W: Write>(
        &self,
        record: &AnalysisRecord,
        format: OutputFormat,
        top: Option<usize>,
        out: &mut W,
    ) -> CliResult<()> {
        let projection = self.pipeline(top).run(record)?;
        match format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&projection)?)?,
            OutputFormat::Table => write!(out, "{}", render_table(&projection))?,
        }
        Ok(())
    }
}

/// Reads an analysis record JSON file.
pub fn read_record(path: &Path) -> CliResult<AnalysisRecord> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(AnalysisRecord::from_json(&content)?)
}

/// Renders the summary table followed by a listing of every chart.
pub fn render_table(projection: &Projection) -> String {
    let mut out = String::new();
    if let Some(filename) = &projection.filename {
        let _ = writeln!(out, "File: {filename}\n");
    }

    out.push_str("Summary\n");
    out.push_str(&render_rows(&projection.summary));

    for (id, chart) in projection.charts() {
        out.push('\n');
        out.push_str(chart_title(id));
        out.push('\n');
        if chart.is_empty() {
            out.push_str("(none)\n");
            continue;
        }
        let rows: Vec<SummaryRow> = chart
            .iter()
            .map(|(label, value, _)| SummaryRow {
                label: label.to_string(),
                value,
            })
            .collect();
        out.push_str(&render_rows(&rows));
    }
    out
}

fn chart_title(id: &'static str) -> &'static str {
    match id {
        "monthly" => "Applications by Month",
        "status" => "Application Status",
        "work_mode" => "Remote vs Onsite",
        "top_roles" => "Top Role Titles",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobtrack_common::test_utils::record_fixtures;

    #[test]
    fn test_render_table() {
        let projection = ProjectionPipeline::default()
            .run(&record_fixtures::sample_record())
            .unwrap();

        insta::assert_snapshot!(render_table(&projection), @r"
        File: applications.csv

        Summary
        Total Applications          9
        Pending Applications        3
        Not Available Applications  2
        Rejected Applications       4
        Remote Applications         4
        Onsite Applications         5

        Applications by Month
        Dec 2023  5
        Jan 2024  3
        Feb 2024  1

        Application Status
        Total     9
        Pending   3
        Rejected  4
        Remote    4
        Onsite    5

        Remote vs Onsite
        Remote  4
        Onsite  5

        Top Role Titles
        Analyst   5
        Engineer  5
        Manager   2
        ");
    }

    #[test]
    fn test_render_table_marks_empty_charts() {
        let projection = ProjectionPipeline::default()
            .run(&record_fixtures::legacy_record())
            .unwrap();
        let table = render_table(&projection);

        assert!(!table.starts_with("File:"));
        assert!(table.contains("Applications by Month\n(none)\n"));
        assert!(table.contains("Top Role Titles\n(none)\n"));
    }

    #[test]
    fn test_top_override_limits_ranking() {
        let mut out = Vec::new();
        let app = App::default();
        let projection = app
            .pipeline(Some(1))
            .run(&record_fixtures::sample_record())
            .unwrap();
        assert_eq!(projection.top_roles.len(), 1);

        app.emit(&record_fixtures::sample_record(), OutputFormat::Json, Some(0), &mut out)
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["topRoles"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_missing_record_file_is_read_error() {
        let err = read_record(Path::new("/nonexistent/record.json")).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/record.json"));
    }
}
