// Skewness/kurtosis shape diagnostic
//
// Reported next to the Shapiro-Wilk result only. It never feeds test
// selection.

use crate::descriptive::DescriptiveSummary;
use serde::{Deserialize, Serialize};

/// |skewness| above this raises a concern
pub const SKEWNESS_LIMIT: f64 = 1.0;

/// |excess kurtosis| above this raises a concern
pub const EXCESS_KURTOSIS_LIMIT: f64 = 2.0;

/// True if |skewness| > 1 or |kurtosis - 3| > 2
///
/// `kurtosis` is the Pearson (non-excess) value from
/// [`crate::descriptive::kurtosis`].
pub fn shape_concern(skewness: f64, kurtosis: f64) -> bool {
    skewness.abs() > SKEWNESS_LIMIT || (kurtosis - 3.0).abs() > EXCESS_KURTOSIS_LIMIT
}

/// Shape statistics of one cohort with the concern flag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeDiagnostic {
    pub skewness: f64,
    pub kurtosis: f64,
    pub excess_kurtosis: f64,
    pub concern: bool,
}

impl ShapeDiagnostic {
    /// `None` when the summary has no shape statistics (constant sample)
    pub fn from_summary(summary: &DescriptiveSummary) -> Option<Self> {
        let skewness = summary.skewness?;
        let kurtosis = summary.kurtosis?;
        Some(Self {
            skewness,
            kurtosis,
            excess_kurtosis: kurtosis - 3.0,
            concern: shape_concern(skewness, kurtosis),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptive::summarize;

    #[test]
    fn test_normal_shape_has_no_concern() {
        assert!(!shape_concern(0.0, 3.0));
        assert!(!shape_concern(-1.0, 5.0));
        assert!(!shape_concern(1.0, 1.0));
    }

    #[test]
    fn test_skewness_concern() {
        assert!(shape_concern(1.01, 3.0));
        assert!(shape_concern(-1.5, 3.0));
    }

    #[test]
    fn test_kurtosis_concern_uses_excess() {
        assert!(shape_concern(0.0, 5.5));
        assert!(shape_concern(0.0, 0.5));
        // Raw kurtosis of 2.5 would trip a non-excess check, excess of -0.5 does not
        assert!(!shape_concern(0.0, 2.5));
    }

    #[test]
    fn test_from_summary() {
        let summary =
            summarize(&[10.0, 12.0, 11.0, 13.0, 12.0, 11.0, 10.0, 12.0, 11.0], true).unwrap();
        let shape = ShapeDiagnostic::from_summary(&summary).unwrap();
        assert!((shape.excess_kurtosis + 0.9375).abs() < 1e-10);
        assert!(!shape.concern);
    }

    #[test]
    fn test_constant_sample_has_no_diagnostic() {
        let summary = summarize(&[3.0; 5], true).unwrap();
        assert!(ShapeDiagnostic::from_summary(&summary).is_none());
    }
}
