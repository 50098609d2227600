//! Tukey-fence outlier detection
//!
//! Fences sit 1.5·IQR beyond the first and third quartiles, with quartiles
//! taken from the same type-7 interpolation as [`crate::descriptive`].

use crate::descriptive::{quartiles_of_sorted, sorted_copy};
use crate::error::{require_len, Result};
use serde::{Deserialize, Serialize};

/// Tukey's inner-fence multiplier
pub const TUKEY_FENCE: f64 = 1.5;

/// Outlier classification of one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierReport {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    /// Observations strictly outside the fences, in original sample order
    pub outliers: Vec<f64>,
}

impl OutlierReport {
    pub fn has_outliers(&self) -> bool {
        !self.outliers.is_empty()
    }
}

/// Flag every observation outside [Q1 - 1.5·IQR, Q3 + 1.5·IQR]
///
/// # Example
/// ```
/// use suturestat::outliers::detect_outliers;
///
/// let report = detect_outliers(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
/// assert_eq!(report.outliers, vec![100.0]);
/// ```
pub fn detect_outliers(sample: &[f64]) -> Result<OutlierReport> {
    require_len(sample, 1, "outlier detection")?;

    let (q1, q3, iqr) = quartiles_of_sorted(&sorted_copy(sample));
    let lower_fence = q1 - TUKEY_FENCE * iqr;
    let upper_fence = q3 + TUKEY_FENCE * iqr;

    let outliers = sample
        .iter()
        .copied()
        .filter(|&x| x < lower_fence || x > upper_fence)
        .collect();

    Ok(OutlierReport {
        q1,
        q3,
        iqr,
        lower_fence,
        upper_fence,
        outliers,
    })
}
