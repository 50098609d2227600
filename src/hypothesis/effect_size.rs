// Cohen's d effect size and its qualitative bands
//
// Scientific Foundation:
// - Cohen, J. (1988). Statistical Power Analysis for the Behavioral Sciences
//   (2nd ed.). Thresholds 0.2 / 0.5 / 0.8 for small / medium / large.
//
// The pooled standard deviation is the UNWEIGHTED mean of the two
// Bessel-corrected variances, regardless of group sizes.

use crate::descriptive::{mean, variance};
use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative magnitude of |d|
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EffectCategory {
    Negligible,
    Small,
    Medium,
    Large,
}

impl fmt::Display for EffectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EffectCategory::Negligible => "Negligible",
            EffectCategory::Small => "Small",
            EffectCategory::Medium => "Medium",
            EffectCategory::Large => "Large",
        };
        f.write_str(label)
    }
}

/// d = (mean_a - mean_b) / √((s²_a + s²_b) / 2)
///
/// Positive d means `sample_a` has the higher mean. Fails with
/// [`AnalysisError::DegenerateEffectSize`] when both groups have zero
/// variance.
pub fn cohens_d(sample_a: &[f64], sample_b: &[f64]) -> Result<f64> {
    let var_a = variance(sample_a, false)?;
    let var_b = variance(sample_b, false)?;
    let pooled_sd = ((var_a + var_b) / 2.0).sqrt();
    if pooled_sd == 0.0 {
        return Err(AnalysisError::DegenerateEffectSize);
    }

    Ok((mean(sample_a)? - mean(sample_b)?) / pooled_sd)
}

/// Band |d|: < 0.2 Negligible, < 0.5 Small, < 0.8 Medium, otherwise Large
pub fn interpret_effect_size(d: f64) -> EffectCategory {
    let magnitude = d.abs();
    if magnitude < 0.2 {
        EffectCategory::Negligible
    } else if magnitude < 0.5 {
        EffectCategory::Small
    } else if magnitude < 0.8 {
        EffectCategory::Medium
    } else {
        EffectCategory::Large
    }
}
