//! Aggregator trait shared by the count-mapping projections.

use jobtrack_common::{JobTrackError, RawCount, Result};

/// A projection from a key → count mapping into an ordered sequence.
pub trait CountAggregator {
    /// The type of data point produced.
    type Output;

    /// Projects the mapping. Iteration order of `counts` never affects the
    /// result.
    fn aggregate<'a, I>(&self, counts: I) -> Result<Vec<Self::Output>>
    where
        I: IntoIterator<Item = (&'a String, &'a RawCount)>;

    /// Name of the mapping field this aggregator reads, used in errors.
    fn field(&self) -> &'static str;
}

/// Converts a received count to `u64`. Negative, missing and non-integer
/// counts are reported as `InvalidCount`.
pub fn checked_count(field: &str, key: &str, count: &RawCount) -> Result<u64> {
    count
        .as_i64()
        .and_then(|value| u64::try_from(value).ok())
        .ok_or_else(|| JobTrackError::invalid_count(field, key, count.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_checked_count() {
        assert_eq!(checked_count("applicationsByMonth", "2024-1", &RawCount::Int(0)).unwrap(), 0);
        assert_eq!(checked_count("applicationsByMonth", "2024-1", &RawCount::Int(42)).unwrap(), 42);

        let err = checked_count("applicationsByRoleTitle", "Recruiter", &RawCount::Int(-1)).unwrap_err();
        assert!(matches!(
            err,
            JobTrackError::InvalidCount { ref count, ref key, .. } if count == "-1" && key == "Recruiter"
        ));
    }

    #[test]
    fn test_non_integer_counts_are_invalid() {
        for (raw, shown) in [
            (Value::Null, "null"),
            (Value::from("3"), "\"3\""),
            (Value::from(2.5), "2.5"),
            (Value::from(u64::MAX), "18446744073709551615"),
        ] {
            let err = checked_count("applicationsByRoleTitle", "Analyst", &RawCount::Other(raw)).unwrap_err();
            assert!(matches!(
                err,
                JobTrackError::InvalidCount { ref count, .. } if count == shown
            ));
        }
    }
}
