//! Top-N ranking of a categorical count mapping.

use crate::traits::{checked_count, CountAggregator};
use jobtrack_common::{RawCount, Result};
use jobtrack_config::DEFAULT_TOP_ROLES_LIMIT;
use serde::Serialize;
use tracing::{debug, instrument};

/// A category kept by the top-N ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCategory {
    /// Category name, e.g. a role title.
    pub name: String,
    /// Applications in the category.
    pub count: u64,
    /// 0-based position after sorting.
    pub rank: usize,
}

/// Ranks categories by count descending, breaking ties by name ascending,
/// and keeps the first `limit`.
#[derive(Debug, Clone, Copy)]
pub struct TopNRanker {
    /// Maximum number of categories to return
    pub limit: usize,
}

impl TopNRanker {
    /// Create a ranker keeping the default top 10
    pub const fn new() -> Self {
        Self {
            limit: DEFAULT_TOP_ROLES_LIMIT,
        }
    }

    /// Create a ranker keeping the top `limit`
    pub const fn with_limit(limit: usize) -> Self {
        Self { limit }
    }
}

impl Default for TopNRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl CountAggregator for TopNRanker {
    type Output = RankedCategory;

    #[instrument(skip_all, fields(limit = self.limit))]
    fn aggregate<'a, I>(&self, counts: I) -> Result<Vec<RankedCategory>>
    where
        I: IntoIterator<Item = (&'a String, &'a RawCount)>,
    {
        // Every count is checked before ranking so an upstream bug is never
        // hidden by truncation.
        let mut entries = counts
            .into_iter()
            .map(|(name, count)| checked_count(self.field(), name, count).map(|count| (name, count)))
            .collect::<Result<Vec<(&String, u64)>>>()?;

        let available = entries.len();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(self.limit);

        let ranked: Vec<RankedCategory> = entries
            .into_iter()
            .enumerate()
            .map(|(rank, (name, count))| RankedCategory {
                name: name.clone(),
                count,
                rank,
            })
            .collect();

        debug!(kept = ranked.len(), available, "Ranked categories");
        Ok(ranked)
    }

    fn field(&self) -> &'static str {
        "applicationsByRoleTitle"
    }
}
