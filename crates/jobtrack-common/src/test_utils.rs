//! Test utilities and shared fixtures for jobtrack.
//!
//! Available to other crates through the `testing` feature.

use crate::{AnalysisRecord, CountMap, RawCount};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests once per test binary.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Builds a [`CountMap`] from borrowed pairs.
pub fn count_map(entries: &[(&str, i64)]) -> CountMap {
    entries
        .iter()
        .map(|(key, count)| ((*key).to_string(), RawCount::Int(*count)))
        .collect()
}

/// Record fixtures shared by the projection and CLI tests.
pub mod record_fixtures {
    use super::*;

    /// A well-formed record spanning a year boundary.
    pub fn sample_record() -> AnalysisRecord {
        AnalysisRecord {
            total_applications: 9,
            remote_applications: 4,
            onsite_applications: 5,
            pending_applications: 3,
            rejected_applications: 4,
            not_available_applications: 2,
            applications_by_month: count_map(&[("2024-1", 3), ("2023-12", 5), ("2024-2", 1)]),
            applications_by_role_title: count_map(&[("Engineer", 5), ("Analyst", 5), ("Manager", 2)]),
            filename: Some("applications.csv".to_string()),
        }
    }

    /// The five-counter payload older producers emit.
    pub fn legacy_record() -> AnalysisRecord {
        AnalysisRecord {
            total_applications: 12,
            remote_applications: 5,
            onsite_applications: 7,
            pending_applications: 4,
            rejected_applications: 6,
            ..Default::default()
        }
    }

    /// Fifteen role titles, enough to exercise top-10 truncation.
    pub fn wide_role_mapping() -> CountMap {
        (0..15_i64)
            .map(|i| (format!("Role {i:02}"), RawCount::Int(i % 5 + 1)))
            .collect()
    }
}

/// Property-based testing strategies.
pub mod property_testing {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for well-formed month keys in both `YYYY-M` and `YYYY-MM` form.
    pub fn month_key_strategy() -> impl Strategy<Value = String> {
        (1990_i32..2100, 1_u32..=12, any::<bool>()).prop_map(|(year, month, padded)| {
            if padded {
                format!("{year}-{month:02}")
            } else {
                format!("{year}-{month}")
            }
        })
    }

    /// Strategy for integer counts in `range`.
    pub fn count_strategy(range: std::ops::Range<i64>) -> impl Strategy<Value = RawCount> {
        range.prop_map(RawCount::Int)
    }

    /// Strategy for month mappings with well-formed keys and non-negative counts.
    pub fn month_map_strategy() -> impl Strategy<Value = CountMap> {
        prop::collection::btree_map(month_key_strategy(), count_strategy(0..500), 0..40)
    }

    /// Strategy for arbitrary ASCII category names.
    pub fn category_name_strategy() -> impl Strategy<Value = String> {
        r"[A-Za-z][A-Za-z ]{0,15}".prop_map(|s| s)
    }

    /// Strategy for category mappings with non-negative counts; the narrow
    /// count range forces frequent ties.
    pub fn category_map_strategy() -> impl Strategy<Value = CountMap> {
        prop::collection::btree_map(category_name_strategy(), count_strategy(0..6), 0..30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_count_map_builder() {
        let map = count_map(&[("a", 1), ("b", -2)]);
        assert_eq!(map.len(), 2);
        assert_eq!(map["b"], RawCount::Int(-2));
    }

    #[test]
    fn test_wide_role_mapping_size() {
        assert_eq!(record_fixtures::wide_role_mapping().len(), 15);
    }
}
