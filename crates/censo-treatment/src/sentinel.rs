//! Reserved sentinel codes used in census enumeration tables.
//!
//! Census tables publish two special codes in count columns instead of a
//! value. Only these two exact values are sentinels; any other negative
//! number is ordinary data.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Code for a category that does not exist for the geographic unit.
pub const NOT_APPLICABLE: i64 = -6;

/// Code for a count suppressed by statistical confidentiality.
pub const CONFIDENTIAL: i64 = -8;

/// One of the two reserved sentinel codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentinelCode {
    /// `-6`: the category is structurally absent; semantically zero.
    NotApplicable,
    /// `-8`: the true count was hidden because it fell at or below the
    /// disclosure threshold.
    Confidential,
}

impl SentinelCode {
    /// Both codes, in the order flags and reports list them.
    pub const ALL: [SentinelCode; 2] = [SentinelCode::NotApplicable, SentinelCode::Confidential];

    /// The raw numeric code.
    pub const fn code(self) -> i64 {
        match self {
            SentinelCode::NotApplicable => NOT_APPLICABLE,
            SentinelCode::Confidential => CONFIDENTIAL,
        }
    }

    /// The code widened to `f64` for comparison against column values.
    pub fn as_f64(self) -> f64 {
        self.code() as f64
    }

    /// Returns true if the cell holds exactly this code. Nulls never match.
    pub fn matches(self, value: Option<f64>) -> bool {
        value == Some(self.as_f64())
    }

    /// Number of cells holding this code.
    pub fn count(self, values: &[Option<f64>]) -> usize {
        values.iter().filter(|v| self.matches(**v)).count()
    }

    /// Returns true if at least one cell holds this code.
    pub fn is_present(self, values: &[Option<f64>]) -> bool {
        values.iter().any(|v| self.matches(*v))
    }

    /// Boolean mask marking the cells that hold this code.
    pub fn mask(self, values: &[Option<f64>]) -> Vec<bool> {
        values.iter().map(|v| self.matches(*v)).collect()
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            SentinelCode::NotApplicable => "not applicable",
            SentinelCode::Confidential => "confidential",
        }
    }
}

impl fmt::Display for SentinelCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Returns true if `value` is one of the two sentinel codes.
pub fn is_sentinel(value: f64) -> bool {
    SentinelCode::ALL
        .iter()
        .any(|code| code.matches(Some(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(SentinelCode::NotApplicable.code(), -6);
        assert_eq!(SentinelCode::Confidential.code(), -8);
        assert_eq!(SentinelCode::Confidential.to_string(), "-8");
    }

    #[test]
    fn test_only_exact_codes_match() {
        assert!(is_sentinel(-6.0));
        assert!(is_sentinel(-8.0));
        assert!(!is_sentinel(-7.0));
        assert!(!is_sentinel(-6.5));
        assert!(!is_sentinel(-1.0));
        assert!(!SentinelCode::NotApplicable.matches(None));
    }

    #[test]
    fn test_count_and_mask() {
        let values = vec![Some(-6.0), Some(-8.0), Some(10.0), Some(-6.0), None];
        assert_eq!(SentinelCode::NotApplicable.count(&values), 2);
        assert_eq!(SentinelCode::Confidential.count(&values), 1);
        assert_eq!(
            SentinelCode::NotApplicable.mask(&values),
            vec![true, false, false, true, false]
        );
        assert!(SentinelCode::Confidential.is_present(&values));
        assert!(!SentinelCode::Confidential.is_present(&values[2..]));
    }
}
