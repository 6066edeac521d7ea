//! Spreadsheet analysis producing aggregate counts.
//!
//! The analyzer reads the tracking spreadsheet, either as a workbook or as a
//! CSV export, drops rows that lack the essential cells or carry an
//! unreadable date, and counts the rest into an [`AnalysisRecord`].

use crate::dates::parse_application_date;
use crate::row::ApplicationRow;
use crate::workbook;
use chrono::Datelike;
use csv::{ReaderBuilder, Trim};
use jobtrack_common::{AnalysisRecord, CountMap, JobTrackError, RawCount, Result};
use jobtrack_config::AnalysisSettings;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Counts job application rows into an [`AnalysisRecord`].
#[derive(Debug, Clone, Default)]
pub struct ApplicationAnalyzer {
    settings: AnalysisSettings,
}

impl ApplicationAnalyzer {
    /// Create an analyzer that recognizes the given cell markers
    pub const fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    /// Marker settings in use.
    pub const fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Analyzes a spreadsheet file. Workbook extensions (`.xlsx`, `.xls`,
    /// `.ods`, ...) are read from their first sheet, anything else as CSV.
    /// The record's `filename` is the file name of `path`.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub fn analyze_path(&self, path: &Path) -> Result<AnalysisRecord> {
        let mut record = if workbook::is_workbook(path) {
            self.analyze_rows(workbook::read_first_sheet(path)?)
        } else {
            self.analyze_reader(File::open(path)?)?
        };
        record.filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        info!(
            total = record.total_applications,
            filename = record.filename.as_deref().unwrap_or_default(),
            "Analyzed application spreadsheet"
        );
        Ok(record)
    }

    /// Analyzes CSV data with a header row. Header names are ignored.
    pub fn analyze_reader<R: Read>(&self, reader: R) -> Result<AnalysisRecord> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result.map_err(|e| {
                let line = e.position().map(csv::Position::line);
                JobTrackError::ingest_with_source("Failed to read CSV row", line, e)
            })?;
            rows.push(ApplicationRow::from_record(&record));
        }

        debug!(rows = rows.len(), "Read CSV rows");
        Ok(self.analyze_rows(rows))
    }

    /// Counts already-parsed rows.
    pub fn analyze_rows<I>(&self, rows: I) -> AnalysisRecord
    where
        I: IntoIterator<Item = ApplicationRow>,
    {
        let mut record = AnalysisRecord::default();
        let mut months: BTreeMap<String, i64> = BTreeMap::new();
        let mut roles: BTreeMap<String, i64> = BTreeMap::new();
        let mut dropped = 0_usize;

        for (index, row) in rows.into_iter().enumerate() {
            // Data rows start on line 2, below the header.
            let line = index + 2;

            let (Some(_), Some(role), Some(date_cell)) =
                (&row.company, &row.role_title, &row.application_date)
            else {
                dropped += 1;
                debug!(line, "Dropping row without company, role or date");
                continue;
            };
            let Some(date) = parse_application_date(date_cell) else {
                dropped += 1;
                warn!(line, date = %date_cell, "Dropping row with unreadable application date");
                continue;
            };

            record.total_applications += 1;

            let remote = row.is_remote.as_deref();
            if self.matches(remote, &self.settings.remote_marker) {
                record.remote_applications += 1;
            } else if self.matches(remote, &self.settings.onsite_marker) {
                record.onsite_applications += 1;
            }

            let status = row.response_status.as_deref();
            if self.matches(status, &self.settings.pending_status) {
                record.pending_applications += 1;
            } else if self.matches(status, &self.settings.rejected_status) {
                record.rejected_applications += 1;
            } else if self.matches(status, &self.settings.not_available_status) {
                record.not_available_applications += 1;
            }

            let month = format!("{}-{:02}", date.year(), date.month());
            *months.entry(month).or_insert(0) += 1;
            *roles.entry(role.clone()).or_insert(0) += 1;
        }

        record.applications_by_month = into_count_map(months);
        record.applications_by_role_title = into_count_map(roles);

        if dropped > 0 {
            warn!(dropped, kept = record.total_applications, "Dropped incomplete rows");
        }
        debug!(
            months = record.applications_by_month.len(),
            roles = record.applications_by_role_title.len(),
            "Aggregated application counts"
        );
        record
    }

    fn matches(&self, cell: Option<&str>, marker: &str) -> bool {
        marker_matches(cell, marker, self.settings.ignore_marker_case)
    }
}

fn marker_matches(cell: Option<&str>, marker: &str, ignore_case: bool) -> bool {
    cell.is_some_and(|value| {
        let (value, marker) = (value.trim(), marker.trim());
        if ignore_case {
            value.eq_ignore_ascii_case(marker)
        } else {
            value == marker
        }
    })
}

fn into_count_map(counts: BTreeMap<String, i64>) -> CountMap {
    counts
        .into_iter()
        .map(|(key, count)| (key, RawCount::Int(count)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobtrack_common::test_utils::{count_map, init_test_logging};

    const SHEET: &str = "\
Company,Role_Title,Salary_Rate,Job_Link,Application_Date,Is_Remote,Is_Referral,Contact_Info,Interview_Stage,Interview_Info,Response_Status
Acme,Engineer,$60/h,https://acme.example,2024-01-15,Yes,No,,Screen,,Waiting...
Globex,Engineer,,,01/20/2024,no,No,,,,rejected
Initech,Analyst,,,2023-12-02,YES,Yes,,,,N/A
Umbrella,Analyst,,,not a date,Yes,No,,,,Waiting...
,Manager,,,2024-02-01,No,No,,,,Rejected
Hooli,Manager,,,February 3, 2024
";

    fn row(company: &str, role: &str, date: &str) -> ApplicationRow {
        ApplicationRow {
            company: Some(company.to_string()),
            role_title: Some(role.to_string()),
            application_date: Some(date.to_string()),
            ..ApplicationRow::default()
        }
    }

    fn case_folding_analyzer() -> ApplicationAnalyzer {
        ApplicationAnalyzer::new(AnalysisSettings {
            ignore_marker_case: true,
            ..AnalysisSettings::default()
        })
    }

    #[test]
    fn test_default_markers_match_exactly() {
        init_test_logging();

        let record = ApplicationAnalyzer::default()
            .analyze_reader(SHEET.as_bytes())
            .unwrap();

        // "no", "YES" and "rejected" differ in case from the defaults.
        assert_eq!(record.total_applications, 3);
        assert_eq!(record.remote_applications, 1);
        assert_eq!(record.onsite_applications, 0);
        assert_eq!(record.pending_applications, 1);
        assert_eq!(record.rejected_applications, 0);
        assert_eq!(record.not_available_applications, 1);
    }

    #[test]
    fn test_counts_markers_case_insensitively() {
        let record = case_folding_analyzer()
            .analyze_reader(SHEET.as_bytes())
            .unwrap();

        assert_eq!(record.total_applications, 3);
        assert_eq!(record.remote_applications, 2);
        assert_eq!(record.onsite_applications, 1);
        assert_eq!(record.pending_applications, 1);
        assert_eq!(record.rejected_applications, 1);
        assert_eq!(record.not_available_applications, 1);
        assert_eq!(record.filename, None);
    }

    #[test]
    fn test_month_and_role_mappings() {
        let record = ApplicationAnalyzer::default()
            .analyze_reader(SHEET.as_bytes())
            .unwrap();

        assert_eq!(
            record.applications_by_month,
            count_map(&[("2024-01", 2), ("2023-12", 1)])
        );
        assert_eq!(
            record.applications_by_role_title,
            count_map(&[("Engineer", 2), ("Analyst", 1)])
        );
    }

    #[test]
    fn test_short_rows_are_padded() {
        // The quoted date keeps its comma inside one cell.
        let sheet = "h1,h2,h3,h4,h5\nHooli,Manager,,,\"February 3, 2024\"\n";
        let record = ApplicationAnalyzer::default()
            .analyze_reader(sheet.as_bytes())
            .unwrap();

        assert_eq!(record.total_applications, 1);
        assert_eq!(record.remote_applications + record.onsite_applications, 0);
        assert_eq!(record.applications_by_month, count_map(&[("2024-02", 1)]));
    }

    #[test]
    fn test_custom_markers() {
        let settings = AnalysisSettings {
            remote_marker: "Remote".to_string(),
            onsite_marker: "Office".to_string(),
            ignore_marker_case: true,
            ..AnalysisSettings::default()
        };
        let mut remote = row("Acme", "Engineer", "2024-03-01");
        remote.is_remote = Some("remote".to_string());
        let mut onsite = row("Acme", "Engineer", "2024-03-02");
        onsite.is_remote = Some("Yes".to_string());

        let record = ApplicationAnalyzer::new(settings).analyze_rows([remote, onsite]);

        assert_eq!(record.total_applications, 2);
        assert_eq!(record.remote_applications, 1);
        assert_eq!(record.onsite_applications, 0);
    }

    #[test]
    fn test_no_rows_gives_empty_record() {
        let record = ApplicationAnalyzer::default().analyze_rows(Vec::new());
        assert_eq!(record, AnalysisRecord::default());
    }

    #[test]
    fn test_workbook_path_is_not_read_as_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("applications.XLSX");
        std::fs::write(&path, "Company,Role\nAcme,Engineer\n").unwrap();

        let err = ApplicationAnalyzer::default().analyze_path(&path).unwrap_err();
        assert!(matches!(err, JobTrackError::Ingest { .. }));
    }

    #[test]
    fn test_marker_matching() {
        assert!(marker_matches(Some("  Waiting... "), "Waiting...", false));
        assert!(!marker_matches(Some("waiting..."), "Waiting...", false));
        assert!(marker_matches(Some("waiting..."), "Waiting...", true));
        assert!(!marker_matches(None, "Yes", true));
        assert!(!marker_matches(Some("Yess"), "Yes", true));
    }
}
