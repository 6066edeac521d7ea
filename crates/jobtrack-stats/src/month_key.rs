//! Parsing of `YYYY-M` / `YYYY-MM` month keys.

use jobtrack_common::{JobTrackError, Result};
use serde::Serialize;
use std::str::FromStr;

/// Month abbreviations used in series labels. September is "Sept".
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// A calendar month, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    /// Four-digit year.
    pub year: i32,
    /// Month in `1..=12`.
    pub month: u32,
}

impl YearMonth {
    /// Parses a month key of the form `YYYY-M` or `YYYY-MM`.
    pub fn parse(key: &str) -> Result<Self> {
        let mut parts = key.split('-');
        let (Some(year), Some(month), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(JobTrackError::malformed_key(
                key,
                "expected exactly one '-' between year and month",
            ));
        };

        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(JobTrackError::malformed_key(key, "year must be four digits"));
        }
        if month.is_empty() || month.len() > 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
            return Err(JobTrackError::malformed_key(key, "month must be one or two digits"));
        }

        let year: i32 = year
            .parse()
            .map_err(|e| JobTrackError::malformed_key(key, format!("year: {e}")))?;
        let month: u32 = month
            .parse()
            .map_err(|e| JobTrackError::malformed_key(key, format!("month: {e}")))?;

        if !(1..=12).contains(&month) {
            return Err(JobTrackError::malformed_key(
                key,
                format!("month {month} is outside 1..=12"),
            ));
        }

        Ok(Self { year, month })
    }

    /// Display label such as "Jan 2024".
    pub fn label(&self) -> String {
        let abbreviation = (self.month as usize)
            .checked_sub(1)
            .and_then(|index| MONTH_ABBREVIATIONS.get(index))
            .copied()
            .unwrap_or("???");
        format!("{abbreviation} {}", self.year)
    }
}

impl FromStr for YearMonth {
    type Err = JobTrackError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
