// Brown-Forsythe variant of Levene's test for equal variances
//
// Scientific Foundation:
// - Levene, H. (1960). Robust tests for equality of variances.
// - Brown, M. B. & Forsythe, A. B. (1974). Robust tests for the equality of
//   variances. JASA, 69(346), 364-367.
//
// Deviations are taken from each group's median rather than its mean, which
// keeps the test honest when the groups are skewed or heavy-tailed.

use crate::descriptive::{median_of_sorted, sorted_copy};
use crate::distributions::f_sf;
use crate::error::{require_len, AnalysisError, Result};

fn absolute_deviations_from_median(group: &[f64]) -> Vec<f64> {
    let center = median_of_sorted(&sorted_copy(group));
    group.iter().map(|x| (x - center).abs()).collect()
}

fn mean_of(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Levene W statistic and p-value for two groups, median-centered
///
/// W = (N - k)/(k - 1) · Σ nᵢ(z̄ᵢ - z̄)² / ΣΣ (zᵢⱼ - z̄ᵢ)², compared against
/// F(k - 1, N - k) with k = 2.
pub fn brown_forsythe(group_a: &[f64], group_b: &[f64]) -> Result<(f64, f64)> {
    require_len(group_a, 2, "variance homogeneity test")?;
    require_len(group_b, 2, "variance homogeneity test")?;

    let groups = [
        absolute_deviations_from_median(group_a),
        absolute_deviations_from_median(group_b),
    ];
    let k = groups.len() as f64;
    let total_n: usize = groups.iter().map(Vec::len).sum();
    let grand_mean = groups.iter().flatten().sum::<f64>() / total_n as f64;

    let mut between = 0.0;
    let mut within = 0.0;
    for z in &groups {
        let group_mean = mean_of(z);
        between += z.len() as f64 * (group_mean - grand_mean).powi(2);
        within += z.iter().map(|v| (v - group_mean).powi(2)).sum::<f64>();
    }

    if within == 0.0 {
        return Err(AnalysisError::degenerate(
            "variance homogeneity test",
            "absolute deviations from the median do not vary within either group",
        ));
    }

    let df_between = k - 1.0;
    let df_within = total_n as f64 - k;
    let statistic = (df_within / df_between) * between / within;
    let p_value = f_sf(statistic, df_between, df_within)?;

    Ok((statistic, p_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPERTS: [f64; 9] = [10.0, 12.0, 11.0, 13.0, 12.0, 11.0, 10.0, 12.0, 11.0];
    const NOVICES: [f64; 11] = [
        20.0, 22.0, 19.0, 25.0, 23.0, 21.0, 24.0, 20.0, 22.0, 26.0, 21.0,
    ];

    #[test]
    fn test_scenario_reference_values() {
        let (w, p) = brown_forsythe(&EXPERTS, &NOVICES).unwrap();
        assert!((w - 4.069_805_527_123_848).abs() < 1e-9);
        assert!((p - 0.058_819_672_758_654_28).abs() < 1e-6);
    }

    #[test]
    fn test_location_shift_does_not_matter() {
        let shifted: Vec<f64> = EXPERTS.iter().map(|x| x + 100.0).collect();
        let (w, p) = brown_forsythe(&EXPERTS, &shifted).unwrap();
        assert!(w.abs() < 1e-12);
        assert!((p - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_very_different_spread() {
        let tight = [10.0, 10.1, 9.9, 10.0, 10.2, 9.8, 10.0, 10.1];
        let wide = [2.0, 18.0, 5.0, 15.0, 0.0, 20.0, 8.0, 12.0];
        let (_, p) = brown_forsythe(&tight, &wide).unwrap();
        assert!(p < 0.001, "p-value {} should be < 0.001", p);
    }

    #[test]
    fn test_symmetric_in_group_order() {
        let (w_ab, p_ab) = brown_forsythe(&EXPERTS, &NOVICES).unwrap();
        let (w_ba, p_ba) = brown_forsythe(&NOVICES, &EXPERTS).unwrap();
        assert!((w_ab - w_ba).abs() < 1e-12);
        assert!((p_ab - p_ba).abs() < 1e-12);
    }

    #[test]
    fn test_constant_groups_are_degenerate() {
        assert!(matches!(
            brown_forsythe(&[1.0, 1.0, 1.0], &[2.0, 2.0]),
            Err(AnalysisError::DegenerateDenominator { .. })
        ));
    }

    #[test]
    fn test_requires_two_per_group() {
        assert!(matches!(
            brown_forsythe(&[1.0], &[2.0, 3.0]),
            Err(AnalysisError::InsufficientData { .. })
        ));
    }
}
