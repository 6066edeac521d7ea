//! Chart-ready series with index-aligned colors.

use crate::monthly_series::TimeSeriesPoint;
use crate::summary::SummaryCounter;
use crate::top_roles::RankedCategory;
use jobtrack_common::AnalysisRecord;
use jobtrack_config::ColorSettings;
use serde::Serialize;

/// Counters shown on the status chart, in order. Not-Available is table-only.
pub const STATUS_CHART_ORDER: [SummaryCounter; 5] = [
    SummaryCounter::Total,
    SummaryCounter::Pending,
    SummaryCounter::Rejected,
    SummaryCounter::Remote,
    SummaryCounter::Onsite,
];

/// Slices of the work-mode proportion chart, in order.
pub const WORK_MODE_CHART_ORDER: [SummaryCounter; 2] =
    [SummaryCounter::Remote, SummaryCounter::Onsite];

/// Labels, values and colors of one chart, always of equal length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    labels: Vec<String>,
    values: Vec<u64>,
    colors: Vec<String>,
}

impl ChartSeries {
    /// Builds a series from `(label, value, color)` points.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (String, u64, String)>,
    {
        let mut series = Self::default();
        for (label, value, color) in points {
            series.labels.push(label);
            series.values.push(value);
            series.colors.push(color);
        }
        series.assert_aligned();
        series
    }

    fn assert_aligned(&self) {
        assert!(
            self.labels.len() == self.values.len() && self.values.len() == self.colors.len(),
            "chart series out of alignment: {} labels, {} values, {} colors",
            self.labels.len(),
            self.values.len(),
            self.colors.len()
        );
    }

    /// Point labels in drawing order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Point values in drawing order.
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Point colors in drawing order.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates `(label, value, color)` points.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64, &str)> + '_ {
        self.labels
            .iter()
            .zip(&self.values)
            .zip(&self.colors)
            .map(|((label, value), color)| (label.as_str(), *value, color.as_str()))
    }
}

/// Converts projected data into [`ChartSeries`].
///
/// Every color comes from a fixed table by position, so a given slot keeps its
/// color whatever its value is.
#[derive(Debug, Clone, Default)]
pub struct ChartProjector {
    colors: ColorSettings,
}

impl ChartProjector {
    /// Create a projector using the given color tables
    pub const fn new(colors: ColorSettings) -> Self {
        Self { colors }
    }

    /// Single-color bar series over the monthly time series.
    pub fn monthly_chart(&self, series: &[TimeSeriesPoint]) -> ChartSeries {
        ChartSeries::from_points(
            series
                .iter()
                .map(|point| (point.label.clone(), point.count, self.colors.monthly_bar.clone())),
        )
    }

    /// Total, Pending, Rejected, Remote and Onsite counters.
    pub fn status_chart(&self, record: &AnalysisRecord) -> ChartSeries {
        Self::counter_chart(record, &STATUS_CHART_ORDER, &self.colors.status)
    }

    /// Remote vs Onsite proportion view.
    pub fn work_mode_chart(&self, record: &AnalysisRecord) -> ChartSeries {
        Self::counter_chart(record, &WORK_MODE_CHART_ORDER, &self.colors.work_mode)
    }

    /// Ranked categories, colored by rank.
    pub fn top_roles_chart(&self, ranked: &[RankedCategory]) -> ChartSeries {
        let palette = &self.colors.top_roles;
        ChartSeries::from_points(ranked.iter().map(|category| {
            (
                category.name.clone(),
                category.count,
                palette[category.rank % palette.len()].clone(),
            )
        }))
    }

    fn counter_chart<const N: usize>(
        record: &AnalysisRecord,
        order: &[SummaryCounter; N],
        palette: &[String; N],
    ) -> ChartSeries {
        ChartSeries::from_points(order.iter().zip(palette).map(|(counter, color)| {
            (
                counter.short_label().to_string(),
                counter.value(record),
                color.clone(),
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monthly_series::ChronologicalSeriesBuilder;
    use crate::top_roles::TopNRanker;
    use crate::CountAggregator;
    use jobtrack_common::test_utils::record_fixtures;
    use jobtrack_config::{MONTHLY_BAR_COLOR, STATUS_PALETTE, TOP_ROLES_PALETTE, WORK_MODE_PALETTE};

    #[test]
    fn test_from_points_keeps_order() {
        let series = ChartSeries::from_points(vec![
            ("b".to_string(), 2, "#2".to_string()),
            ("a".to_string(), 1, "#1".to_string()),
        ]);

        assert_eq!(series.labels(), ["b", "a"]);
        assert_eq!(series.values(), [2, 1]);
        assert_eq!(series.colors(), ["#2", "#1"]);
        assert_eq!(series.iter().next(), Some(("b", 2, "#2")));
    }

    #[test]
    fn test_monthly_chart_uses_single_color() {
        let record = record_fixtures::sample_record();
        let points = ChronologicalSeriesBuilder::new()
            .aggregate(&record.applications_by_month)
            .unwrap();
        let chart = ChartProjector::default().monthly_chart(&points);

        assert_eq!(chart.labels(), ["Dec 2023", "Jan 2024", "Feb 2024"]);
        assert_eq!(chart.values(), [5, 3, 1]);
        assert!(chart.colors().iter().all(|c| c == MONTHLY_BAR_COLOR));
    }

    #[test]
    fn test_empty_monthly_chart() {
        let chart = ChartProjector::default().monthly_chart(&[]);
        assert!(chart.is_empty());
        assert_eq!(chart.len(), 0);
    }

    #[test]
    fn test_status_chart_excludes_not_available() {
        let chart = ChartProjector::default().status_chart(&record_fixtures::sample_record());

        assert_eq!(chart.labels(), ["Total", "Pending", "Rejected", "Remote", "Onsite"]);
        assert_eq!(chart.values(), [9, 3, 4, 4, 5]);
        assert_eq!(chart.colors(), STATUS_PALETTE);
    }

    #[test]
    fn test_status_colors_are_positional_not_value_based() {
        let mut record = record_fixtures::sample_record();
        let before = ChartProjector::default().status_chart(&record);
        record.total_applications = 0;
        record.pending_applications = 100;
        let after = ChartProjector::default().status_chart(&record);

        assert_eq!(before.colors(), after.colors());
    }

    #[test]
    fn test_work_mode_chart() {
        let chart = ChartProjector::default().work_mode_chart(&record_fixtures::sample_record());

        assert_eq!(chart.labels(), ["Remote", "Onsite"]);
        assert_eq!(chart.values(), [4, 5]);
        assert_eq!(chart.colors(), WORK_MODE_PALETTE);
    }

    #[test]
    fn test_top_roles_chart_colors_by_rank_and_wraps() {
        let counts = record_fixtures::wide_role_mapping();
        let ranked = TopNRanker::with_limit(12).aggregate(&counts).unwrap();
        let chart = ChartProjector::default().top_roles_chart(&ranked);

        assert_eq!(chart.len(), 12);
        assert_eq!(chart.colors()[0], TOP_ROLES_PALETTE[0]);
        assert_eq!(chart.colors()[9], TOP_ROLES_PALETTE[9]);
        assert_eq!(chart.colors()[10], TOP_ROLES_PALETTE[0]);
    }

    #[test]
    fn test_custom_palette_is_used() {
        let mut colors = ColorSettings::default();
        colors.work_mode = ["#111111".to_string(), "#222222".to_string()];
        let chart = ChartProjector::new(colors).work_mode_chart(&record_fixtures::legacy_record());

        assert_eq!(chart.colors(), ["#111111", "#222222"]);
    }

    #[test]
    fn test_serializes_as_parallel_arrays() {
        let chart = ChartProjector::default().work_mode_chart(&record_fixtures::legacy_record());
        let json = serde_json::to_value(&chart).unwrap();

        assert_eq!(json["labels"], serde_json::json!(["Remote", "Onsite"]));
        assert_eq!(json["values"], serde_json::json!([5, 7]));
        assert_eq!(json["colors"].as_array().unwrap().len(), 2);
    }
}
