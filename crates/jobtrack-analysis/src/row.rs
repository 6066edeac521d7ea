//! One spreadsheet row, read by column position.

use csv::StringRecord;

/// Column order of the tracking spreadsheet. Header names are ignored.
pub const COLUMNS: [&str; 11] = [
    "Company",
    "Role_Title",
    "Salary_Rate",
    "Job_Link",
    "Application_Date",
    "Is_Remote",
    "Is_Referral",
    "Contact_Info",
    "Interview_Stage",
    "Interview_Info",
    "Response_Status",
];

/// A job application as entered in the spreadsheet.
///
/// Blank cells and cells missing from short rows are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationRow {
    pub company: Option<String>,
    pub role_title: Option<String>,
    pub salary_rate: Option<String>,
    pub job_link: Option<String>,
    pub application_date: Option<String>,
    pub is_remote: Option<String>,
    pub is_referral: Option<String>,
    pub contact_info: Option<String>,
    pub interview_stage: Option<String>,
    pub interview_info: Option<String>,
    pub response_status: Option<String>,
}

impl ApplicationRow {
    /// Reads a row from a CSV record by position.
    pub fn from_record(record: &StringRecord) -> Self {
        Self::from_cells(record.iter().map(|value| Some(value.to_string())))
    }

    /// Builds a row from cells in [`COLUMNS`] order. Cells are trimmed and
    /// blank cells become `None`; cells past the last column are ignored.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let mut cells = cells.into_iter().map(|cell| {
            cell.map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        });
        let mut next = || cells.next().flatten();

        Self {
            company: next(),
            role_title: next(),
            salary_rate: next(),
            job_link: next(),
            application_date: next(),
            is_remote: next(),
            is_referral: next(),
            contact_info: next(),
            interview_stage: next(),
            interview_info: next(),
            response_status: next(),
        }
    }
}
