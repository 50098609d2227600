// Mann-Whitney U test (two-sided)
//
// Scientific Foundation:
// - Mann, H. B. & Whitney, D. R. (1947). On a test of whether one of two
//   random variables is stochastically larger than the other. Annals of
//   Mathematical Statistics, 18(1), 50-60.
//
// Method choice:
// - Exact null distribution when the smaller group has at most 8 members and
//   no value is tied
// - Otherwise normal approximation with tie-corrected variance and a 0.5
//   continuity correction

use crate::distributions::normal_sf;
use crate::error::{require_len, AnalysisError, Result};

/// Largest smaller-group size for which the exact distribution is used
pub const EXACT_MAX_N: usize = 8;

/// How the p-value was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UMethod {
    Exact,
    Asymptotic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MannWhitneyOutcome {
    /// U for the first sample
    pub statistic: f64,
    pub p_value: f64,
    pub method: UMethod,
}

/// Average ranks (1-based) of the pooled observations, plus Σ(t³ - t) over
/// tie groups
fn rank_pooled(pooled: &[f64]) -> (Vec<f64>, f64) {
    let mut order: Vec<usize> = (0..pooled.len()).collect();
    order.sort_by(|&i, &j| pooled[i].total_cmp(&pooled[j]));

    let mut ranks = vec![0.0; pooled.len()];
    let mut tie_term = 0.0;
    let mut start = 0;
    while start < order.len() {
        let mut end = start;
        while end + 1 < order.len() && pooled[order[end + 1]] == pooled[order[start]] {
            end += 1;
        }
        let average = (start + end) as f64 / 2.0 + 1.0;
        for &idx in &order[start..=end] {
            ranks[idx] = average;
        }
        let t = (end - start + 1) as f64;
        tie_term += t * t * t - t;
        start = end + 1;
    }

    (ranks, tie_term)
}

/// Number of arrangements giving each U in 0..=n1·n2
///
/// Coefficients of the Gaussian binomial [n1 + n2 choose n1]_q, built as the
/// running product of (1 - q^(n2+i)) / (1 - q^i), which stays a polynomial
/// after every step.
fn exact_u_frequencies(n1: usize, n2: usize) -> Vec<f64> {
    let max_u = n1 * n2;
    let mut coeffs = vec![0.0; max_u + 1];
    coeffs[0] = 1.0;

    for i in 1..=n1 {
        let shift = n2 + i;
        for k in (shift..=max_u).rev() {
            coeffs[k] -= coeffs[k - shift];
        }
        for k in i..=max_u {
            coeffs[k] += coeffs[k - i];
        }
    }

    coeffs
}

/// P(U >= u) under H0, doubled and capped at 1
fn exact_p_value(u_max: f64, n1: usize, n2: usize) -> f64 {
    let freqs = exact_u_frequencies(n1, n2);
    let total: f64 = freqs.iter().sum();
    // Without ties U is integral
    let threshold = u_max.round() as usize;
    let upper: f64 = freqs.iter().skip(threshold).sum();
    (2.0 * upper / total).min(1.0)
}

/// Two-sided Mann-Whitney U test
///
/// # Example
/// ```
/// use suturestat::hypothesis::mann_whitney_u;
///
/// let a = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let b = [6.0, 7.0, 8.0, 9.0, 10.0];
/// let r = mann_whitney_u(&a, &b).unwrap();
/// assert_eq!(r.statistic, 0.0);
/// assert!(r.p_value < 0.05);
/// ```
pub fn mann_whitney_u(a: &[f64], b: &[f64]) -> Result<MannWhitneyOutcome> {
    require_len(a, 1, "Mann-Whitney U test")?;
    require_len(b, 1, "Mann-Whitney U test")?;

    let n1 = a.len();
    let n2 = b.len();
    let pooled: Vec<f64> = a.iter().chain(b).copied().collect();
    let (ranks, tie_term) = rank_pooled(&pooled);

    let rank_sum_a: f64 = ranks[..n1].iter().sum();
    let n1f = n1 as f64;
    let n2f = n2 as f64;
    let u1 = rank_sum_a - n1f * (n1f + 1.0) / 2.0;
    let u2 = n1f * n2f - u1;
    let u_max = u1.max(u2);

    let has_ties = tie_term > 0.0;
    if n1.min(n2) <= EXACT_MAX_N && !has_ties {
        return Ok(MannWhitneyOutcome {
            statistic: u1,
            p_value: exact_p_value(u_max, n1, n2),
            method: UMethod::Exact,
        });
    }

    let n = n1f + n2f;
    let mu = n1f * n2f / 2.0;
    let sigma = (n1f * n2f / 12.0 * ((n + 1.0) - tie_term / (n * (n - 1.0)))).sqrt();
    if sigma == 0.0 || !sigma.is_finite() {
        return Err(AnalysisError::degenerate(
            "Mann-Whitney U test",
            "every observation is tied",
        ));
    }

    let z = (u_max - mu - 0.5) / sigma;
    let p_value = (2.0 * normal_sf(z)?).clamp(0.0, 1.0);

    Ok(MannWhitneyOutcome {
        statistic: u1,
        p_value,
        method: UMethod::Asymptotic,
    })
}
