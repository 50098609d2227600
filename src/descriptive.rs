//! Descriptive statistics for one cohort sample
//!
//! Single home of every moment and quantile formula used by the pipeline.
//! Samples are borrowed immutably; median and quartiles sort a private copy.
//!
//! Skewness and kurtosis always standardize by the **population** standard
//! deviation, even when a summary is requested with `population = false`.
//! Reported shape statistics therefore do not move with the variance flag.
//! A constant sample has no defined shape: `summarize` leaves both fields
//! empty, while [`skewness`] and [`kurtosis`] return an error.

use crate::error::{require_len, AnalysisError, Result};
use serde::{Deserialize, Serialize};

/// Descriptive summary of one sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveSummary {
    pub n: usize,
    pub mean: f64,
    pub median: f64,
    /// Population or Bessel-corrected, per the flag given to [`summarize`]
    pub variance: f64,
    pub stddev: f64,
    /// Fisher-Pearson g1 against population sigma; `None` for a constant sample
    pub skewness: Option<f64>,
    /// Pearson (non-excess) kurtosis against population sigma; normal = 3
    pub kurtosis: Option<f64>,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
}

impl DescriptiveSummary {
    /// Kurtosis minus 3 (normal distribution scores 0)
    pub fn excess_kurtosis(&self) -> Option<f64> {
        self.kurtosis.map(|k| k - 3.0)
    }
}

/// Arithmetic mean
pub fn mean(sample: &[f64]) -> Result<f64> {
    require_len(sample, 1, "mean")?;
    Ok(sample.iter().sum::<f64>() / sample.len() as f64)
}

pub(crate) fn sorted_copy(sample: &[f64]) -> Vec<f64> {
    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Median: middle element, or average of the two middle elements
pub fn median(sample: &[f64]) -> Result<f64> {
    require_len(sample, 1, "median")?;
    Ok(median_of_sorted(&sorted_copy(sample)))
}

pub(crate) fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Variance: sum of squared deviations over n (population) or n-1 (sample)
pub fn variance(sample: &[f64], population: bool) -> Result<f64> {
    if population {
        require_len(sample, 1, "population variance")?;
    } else {
        require_len(sample, 2, "sample variance")?;
    }

    let mu = mean(sample)?;
    let sum_sq: f64 = sample.iter().map(|x| (x - mu).powi(2)).sum();
    let divisor = if population {
        sample.len()
    } else {
        sample.len() - 1
    };
    Ok(sum_sq / divisor as f64)
}

/// Standard deviation (square root of [`variance`])
pub fn stddev(sample: &[f64], population: bool) -> Result<f64> {
    // Cancellation can leave a tiny negative residue
    Ok(variance(sample, population)?.max(0.0).sqrt())
}

/// k-th standardized moment against the population standard deviation
fn standardized_moment(sample: &[f64], k: i32, operation: &'static str) -> Result<f64> {
    let mu = mean(sample)?;
    let sigma = stddev(sample, true)?;
    if sigma == 0.0 {
        return Err(AnalysisError::degenerate(
            operation,
            "standard deviation is zero (constant sample)",
        ));
    }

    let total: f64 = sample.iter().map(|x| ((x - mu) / sigma).powi(k)).sum();
    Ok(total / sample.len() as f64)
}

/// Skewness g1 = (1/n) Σ((x - μ)/σ)³ with population σ
pub fn skewness(sample: &[f64]) -> Result<f64> {
    standardized_moment(sample, 3, "skewness")
}

/// Pearson kurtosis κ = (1/n) Σ((x - μ)/σ)⁴ with population σ
///
/// This is NOT excess kurtosis: a normal distribution scores 3.
pub fn kurtosis(sample: &[f64]) -> Result<f64> {
    standardized_moment(sample, 4, "kurtosis")
}

/// Linear-interpolation quantile (Hyndman & Fan type 7)
///
/// h = (n - 1)·p on the sorted sample, interpolating between x⌊h⌋ and
/// x⌊h⌋₊₁.
pub fn quartile(sample: &[f64], p: f64) -> Result<f64> {
    require_len(sample, 1, "quartile")?;
    if !(0.0..=1.0).contains(&p) {
        return Err(AnalysisError::InvalidParameter(format!(
            "quantile probability must be in [0, 1], got {}",
            p
        )));
    }
    Ok(quantile_of_sorted(&sorted_copy(sample), p))
}

pub(crate) fn quantile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * p;
    let lower = h.floor() as usize;
    let frac = h - lower as f64;
    if frac == 0.0 {
        return sorted[lower];
    }
    sorted[lower] * (1.0 - frac) + sorted[lower + 1] * frac
}

/// First quartile, third quartile and their difference
pub(crate) fn quartiles_of_sorted(sorted: &[f64]) -> (f64, f64, f64) {
    let q1 = quantile_of_sorted(sorted, 0.25);
    let q3 = quantile_of_sorted(sorted, 0.75);
    (q1, q3, q3 - q1)
}

/// Full descriptive summary
///
/// `population` selects the variance/stddev divisor only; shape statistics
/// always use population sigma and are `None` when that sigma is zero.
pub fn summarize(sample: &[f64], population: bool) -> Result<DescriptiveSummary> {
    require_len(sample, 1, "summary")?;
    let sorted = sorted_copy(sample);
    let (q1, q3, iqr) = quartiles_of_sorted(&sorted);

    let (skew, kurt) = if stddev(sample, true)? == 0.0 {
        (None, None)
    } else {
        (Some(skewness(sample)?), Some(kurtosis(sample)?))
    };

    Ok(DescriptiveSummary {
        n: sample.len(),
        mean: mean(sample)?,
        median: median_of_sorted(&sorted),
        variance: variance(sample, population)?,
        stddev: stddev(sample, population)?,
        skewness: skew,
        kurtosis: kurt,
        q1,
        q3,
        iqr,
    })
}
