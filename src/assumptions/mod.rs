// Distributional assumption testing
//
// Before choosing between parametric and rank-based comparisons, each metric
// is checked for:
// - Normality of each cohort (Shapiro-Wilk)
// - Equality of variances across cohorts (Brown-Forsythe Levene)
//
// A supplementary skewness/kurtosis diagnostic is reported alongside but plays
// no part in the decision.

mod homogeneity;
mod normality;
mod shape;

pub use homogeneity::brown_forsythe;
pub use normality::{shapiro_wilk, MAX_SHAPIRO_N};
pub use shape::{shape_concern, ShapeDiagnostic, EXCESS_KURTOSIS_LIMIT, SKEWNESS_LIMIT};

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Shapiro-Wilk outcome for one cohort
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalityResult {
    /// W statistic (0 < W <= 1)
    pub statistic: f64,
    pub p_value: f64,
    /// p_value > alpha
    pub is_normal: bool,
}

/// Levene (median-centered) outcome for one cohort pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HomogeneityResult {
    pub statistic: f64,
    pub p_value: f64,
    /// p_value > alpha
    pub equal_variance: bool,
}

/// All assumption checks for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssumptionResult {
    pub experts: NormalityResult,
    pub novices: NormalityResult,
    pub homogeneity: HomogeneityResult,
}

impl AssumptionResult {
    pub fn both_normal(&self) -> bool {
        self.experts.is_normal && self.novices.is_normal
    }
}

/// Shapiro-Wilk normality test; requires n >= 3
pub fn normality_test(sample: &[f64], alpha: f64) -> Result<NormalityResult> {
    let (statistic, p_value) = shapiro_wilk(sample)?;
    Ok(NormalityResult {
        statistic,
        p_value,
        is_normal: p_value > alpha,
    })
}

/// Brown-Forsythe variance homogeneity test
pub fn variance_homogeneity_test(
    sample_a: &[f64],
    sample_b: &[f64],
    alpha: f64,
) -> Result<HomogeneityResult> {
    let (statistic, p_value) = brown_forsythe(sample_a, sample_b)?;
    Ok(HomogeneityResult {
        statistic,
        p_value,
        equal_variance: p_value > alpha,
    })
}

/// Run both normality tests and the homogeneity test for one metric
pub fn check_assumptions(experts: &[f64], novices: &[f64], alpha: f64) -> Result<AssumptionResult> {
    let result = AssumptionResult {
        experts: normality_test(experts, alpha)?,
        novices: normality_test(novices, alpha)?,
        homogeneity: variance_homogeneity_test(experts, novices, alpha)?,
    };

    tracing::debug!(
        experts_p = result.experts.p_value,
        novices_p = result.novices.p_value,
        levene_p = result.homogeneity.p_value,
        "assumption checks complete"
    );

    Ok(result)
}
