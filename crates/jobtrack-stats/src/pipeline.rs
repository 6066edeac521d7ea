//! End-to-end projection of one [`AnalysisRecord`].

use crate::chart::{ChartProjector, ChartSeries};
use crate::monthly_series::{ChronologicalSeriesBuilder, TimeSeriesPoint};
use crate::summary::{SummaryRow, SummaryTableBuilder};
use crate::top_roles::{RankedCategory, TopNRanker};
use crate::traits::CountAggregator;
use jobtrack_common::{AnalysisRecord, Result};
use jobtrack_config::ProjectionSettings;
use serde::Serialize;
use tracing::{info, instrument};

/// Everything the rendering layer consumes for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    /// Name of the analyzed file, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Applications per month, oldest first.
    pub monthly_series: Vec<TimeSeriesPoint>,
    /// Most frequent role titles.
    pub top_roles: Vec<RankedCategory>,
    /// Bar chart over `monthly_series`.
    pub monthly_chart: ChartSeries,
    /// Bar chart of the status counters.
    pub status_chart: ChartSeries,
    /// Remote vs Onsite proportion chart.
    pub work_mode_chart: ChartSeries,
    /// Bar chart over `top_roles`.
    pub top_roles_chart: ChartSeries,
    /// Summary table rows.
    pub summary: Vec<SummaryRow>,
}

impl Projection {
    /// All charts with a stable identifier each.
    pub fn charts(&self) -> [(&'static str, &ChartSeries); 4] {
        [
            ("monthly", &self.monthly_chart),
            ("status", &self.status_chart),
            ("work_mode", &self.work_mode_chart),
            ("top_roles", &self.top_roles_chart),
        ]
    }
}

/// Runs every projection stage over a record.
///
/// Holds configuration only; each call recomputes from scratch.
#[derive(Debug, Clone, Default)]
pub struct ProjectionPipeline {
    series: ChronologicalSeriesBuilder,
    ranker: TopNRanker,
    projector: ChartProjector,
    summary: SummaryTableBuilder,
}

impl ProjectionPipeline {
    /// Create a pipeline from projection settings
    pub fn new(settings: &ProjectionSettings) -> Self {
        Self {
            series: ChronologicalSeriesBuilder::new(),
            ranker: TopNRanker::with_limit(settings.top_roles_limit),
            projector: ChartProjector::new(settings.colors.clone()),
            summary: SummaryTableBuilder::new(),
        }
    }

    /// Projects `record`. Fails with `InvalidCount` when either mapping holds
    /// a negative or non-integer count on a key it keeps.
    #[instrument(skip_all, fields(filename = record.filename.as_deref().unwrap_or("-")))]
    pub fn run(&self, record: &AnalysisRecord) -> Result<Projection> {
        let monthly_series = self.series.aggregate(&record.applications_by_month)?;
        let top_roles = self.ranker.aggregate(&record.applications_by_role_title)?;

        let projection = Projection {
            filename: record.filename.clone(),
            monthly_chart: self.projector.monthly_chart(&monthly_series),
            status_chart: self.projector.status_chart(record),
            work_mode_chart: self.projector.work_mode_chart(record),
            top_roles_chart: self.projector.top_roles_chart(&top_roles),
            summary: self.summary.build(record),
            monthly_series,
            top_roles,
        };

        info!(
            months = projection.monthly_series.len(),
            roles = projection.top_roles.len(),
            "Projected analysis record"
        );
        Ok(projection)
    }
}
