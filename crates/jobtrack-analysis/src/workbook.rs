//! First-sheet reading of Excel and OpenDocument workbooks.

use crate::row::ApplicationRow;
use calamine::{open_workbook_auto, Data, DataType, Range, Reader};
use jobtrack_common::{JobTrackError, Result};
use std::path::Path;
use tracing::debug;

/// File extensions read as workbooks rather than CSV.
pub const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Whether `path` names a workbook, judged by its extension.
pub fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Reads the data rows of the first worksheet. The first used row is the
/// header and is skipped.
pub fn read_first_sheet(path: &Path) -> Result<Vec<ApplicationRow>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        JobTrackError::ingest_with_source(
            format!("Failed to open workbook {}", path.display()),
            None,
            e,
        )
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| JobTrackError::ingest("Workbook has no worksheets"))?
        .map_err(|e| JobTrackError::ingest_with_source("Failed to read the first worksheet", None, e))?;

    let rows = rows_from_range(&range);
    debug!(rows = rows.len(), "Read worksheet rows");
    Ok(rows)
}

/// Converts a worksheet range into rows, keeping column A at position 0 even
/// when the used range starts further right.
pub fn rows_from_range(range: &Range<Data>) -> Vec<ApplicationRow> {
    let leading = range
        .start()
        .and_then(|(_, column)| usize::try_from(column).ok())
        .unwrap_or(0);

    range
        .rows()
        .skip(1)
        .map(|cells| {
            ApplicationRow::from_cells(
                std::iter::repeat(None)
                    .take(leading)
                    .chain(cells.iter().map(cell_text)),
            )
        })
        .collect()
}

/// Text of one cell. Date cells are written as `YYYY-MM-DD`.
pub fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(value) => Some(value.clone()),
        Data::DateTime(_) | Data::DateTimeIso(_) => Some(
            cell.as_date()
                .map_or_else(|| cell.to_string(), |date| date.format("%Y-%m-%d").to_string()),
        ),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workbook_extensions() {
        assert!(is_workbook(Path::new("applications.xlsx")));
        assert!(is_workbook(Path::new("APPLICATIONS.XLS")));
        assert!(is_workbook(Path::new("sheet.ods")));
        assert!(!is_workbook(Path::new("applications.csv")));
        assert!(!is_workbook(Path::new("applications")));
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::Empty), None);
        assert_eq!(cell_text(&Data::String("Acme".to_string())), Some("Acme".to_string()));
        assert_eq!(cell_text(&Data::Int(7)), Some("7".to_string()));
        assert_eq!(
            cell_text(&Data::DateTimeIso("2024-03-05T10:00:00".to_string())),
            Some("2024-03-05".to_string())
        );
    }

    #[test]
    fn test_rows_from_range_skips_header_and_pads_offset() {
        // Used range starting at column B: the role title lands in column B.
        let mut range = Range::new((0, 1), (1, 4));
        range.set_value((0, 1), Data::String("Role_Title".to_string()));
        range.set_value((1, 1), Data::String("Engineer".to_string()));
        range.set_value((1, 4), Data::String("2024-01-15".to_string()));

        let rows = rows_from_range(&range);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].company, None);
        assert_eq!(rows[0].role_title.as_deref(), Some("Engineer"));
        assert_eq!(rows[0].application_date.as_deref(), Some("2024-01-15"));
    }

    #[test]
    fn test_unreadable_workbook_is_ingest_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"not a zip archive").unwrap();

        let err = read_first_sheet(&path).unwrap_err();
        assert!(matches!(err, JobTrackError::Ingest { row: None, .. }));
    }
}
