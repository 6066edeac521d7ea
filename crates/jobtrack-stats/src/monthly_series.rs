//! Chronological monthly series built from month-key counts.

use crate::month_key::YearMonth;
use crate::traits::{checked_count, CountAggregator};
use jobtrack_common::{RawCount, Result};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// One month of the applications time series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    /// Display label such as "Jan 2024".
    pub label: String,
    /// Applications sent in the month.
    pub count: u64,
    /// Chronological sort key.
    pub sort_key: YearMonth,
}

/// Orders `applicationsByMonth` into an ascending time series.
///
/// Keys that are not valid month keys are dropped with a warning and the
/// rest of the series is still produced. Negative or non-integer counts on
/// well-formed keys are errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronologicalSeriesBuilder;

impl ChronologicalSeriesBuilder {
    /// Create a new builder
    pub const fn new() -> Self {
        Self
    }
}

impl CountAggregator for ChronologicalSeriesBuilder {
    type Output = TimeSeriesPoint;

    #[instrument(skip_all)]
    fn aggregate<'a, I>(&self, counts: I) -> Result<Vec<TimeSeriesPoint>>
    where
        I: IntoIterator<Item = (&'a String, &'a RawCount)>,
    {
        let mut months: Vec<(YearMonth, &String, u64)> = Vec::new();
        let mut excluded = 0_usize;

        // Keys are parsed first: an excluded key never has its count checked.
        for (key, count) in counts {
            match YearMonth::parse(key) {
                Ok(month) => months.push((month, key, checked_count(self.field(), key, count)?)),
                Err(e) => {
                    warn!(error = %e, "Excluding month key from series");
                    excluded += 1;
                }
            }
        }

        // `2024-1` and `2024-01` name the same month; the raw key keeps their
        // relative order stable.
        months.sort_unstable_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));

        let series: Vec<TimeSeriesPoint> = months
            .into_iter()
            .map(|(sort_key, _, count)| TimeSeriesPoint {
                label: sort_key.label(),
                count,
                sort_key,
            })
            .collect();

        debug!(points = series.len(), excluded, "Built monthly series");
        Ok(series)
    }

    fn field(&self) -> &'static str {
        "applicationsByMonth"
    }
}
