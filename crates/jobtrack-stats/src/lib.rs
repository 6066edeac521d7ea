//! # Jobtrack Stats
//!
//! Projection of an [`AnalysisRecord`](jobtrack_common::AnalysisRecord) into
//! chart-ready data.
//!
//! Every stage is a pure, synchronous transform: the month series and the
//! top-N role ranking are derived from the record's count mappings, and the
//! chart and summary projections are derived from those. Nothing is cached.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod chart;
pub mod month_key;
pub mod monthly_series;
pub mod pipeline;
pub mod summary;
pub mod top_roles;
pub mod traits;

pub use chart::{ChartProjector, ChartSeries, STATUS_CHART_ORDER, WORK_MODE_CHART_ORDER};
pub use month_key::{YearMonth, MONTH_ABBREVIATIONS};
pub use monthly_series::{ChronologicalSeriesBuilder, TimeSeriesPoint};
pub use pipeline::{Projection, ProjectionPipeline};
pub use summary::{render_rows, SummaryCounter, SummaryRow, SummaryTableBuilder, SUMMARY_TABLE_ORDER};
pub use top_roles::{RankedCategory, TopNRanker};
pub use traits::{checked_count, CountAggregator};
