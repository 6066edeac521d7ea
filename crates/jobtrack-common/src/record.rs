//! The aggregate-counts record produced by the analysis step.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A mapping count exactly as received.
///
/// Values that are not JSON integers are kept instead of failing the whole
/// record, so the projection can report them as invalid counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCount {
    /// A JSON integer, possibly negative.
    Int(i64),
    /// Anything else: `null`, strings, floats, integers beyond `i64`.
    Other(serde_json::Value),
}

impl RawCount {
    /// The integer value, if the count is one.
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(count) => Some(*count),
            Self::Other(_) => None,
        }
    }
}

impl From<i64> for RawCount {
    fn from(count: i64) -> Self {
        Self::Int(count)
    }
}

impl fmt::Display for RawCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(count) => write!(f, "{count}"),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Key → count mapping as received from the analysis step.
pub type CountMap = BTreeMap<String, RawCount>;

/// Aggregate counters for one analyzed spreadsheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    /// Applications that survived cleaning.
    pub total_applications: u64,
    /// Applications marked remote.
    pub remote_applications: u64,
    /// Applications marked onsite.
    pub onsite_applications: u64,
    /// Applications still waiting for a response.
    pub pending_applications: u64,
    /// Applications that were rejected.
    pub rejected_applications: u64,
    /// Applications whose status is not available. Older producers omit it.
    #[serde(default)]
    pub not_available_applications: u64,
    /// Month key (`YYYY-M` or `YYYY-MM`) → applications sent that month.
    #[serde(default)]
    pub applications_by_month: CountMap,
    /// Role title → applications for that title.
    #[serde(default)]
    pub applications_by_role_title: CountMap,
    /// Name of the analyzed file, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl AnalysisRecord {
    /// Parses a record from its JSON representation.
    pub fn from_json(input: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Serializes the record as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
