// Shapiro-Wilk normality test (Royston's AS R94 approximation)
//
// Scientific Foundation:
// - Shapiro, S. S. & Wilk, M. B. (1965). An analysis of variance test for
//   normality. Biometrika, 52(3-4), 591-611.
// - Royston, P. (1992). Approximating the Shapiro-Wilk W-test for
//   non-normality. Statistics and Computing, 2, 117-119.
// - Royston, P. (1995). Remark AS R94. Applied Statistics, 44(4), 547-551.
//
// H0: the sample was drawn from a normal distribution. Small p rejects it.

use crate::descriptive::sorted_copy;
use crate::distributions::{normal_quantile, normal_sf};
use crate::error::{require_len, AnalysisError, Result};

/// Largest sample the Royston approximation is calibrated for
pub const MAX_SHAPIRO_N: usize = 5000;

// Royston polynomial coefficients, lowest power first
const C1: [f64; 6] = [0.0, 0.221157, -0.147981, -2.07119, 4.434685, -2.706056];
const C2: [f64; 6] = [0.0, 0.042981, -0.293762, -1.752461, 5.682633, -3.582633];
const C3: [f64; 4] = [0.544, -0.39978, 0.025054, -6.714e-4];
const C4: [f64; 4] = [1.3822, -0.77857, 0.062767, -0.0020322];
const C5: [f64; 4] = [-1.5861, -0.31082, -0.083751, 0.0038915];
const C6: [f64; 3] = [-0.4803, -0.082676, 0.0030302];
const G: [f64; 2] = [-2.273, 0.459];

/// Horner evaluation of c[0] + c[1]·x + c[2]·x² + ...
fn poly(c: &[f64], x: f64) -> f64 {
    c.iter().rev().fold(0.0, |acc, &ci| acc * x + ci)
}

/// Shapiro-Wilk W statistic and p-value
///
/// Requires 3 <= n <= 5000. A sample with zero range has no shape to test;
/// it is reported as W = 1, p = 1.
pub fn shapiro_wilk(sample: &[f64]) -> Result<(f64, f64)> {
    require_len(sample, 3, "normality test")?;
    let n = sample.len();
    if n > MAX_SHAPIRO_N {
        return Err(AnalysisError::InvalidParameter(format!(
            "normality test supports at most {} samples, got {}",
            MAX_SHAPIRO_N, n
        )));
    }

    let x = sorted_copy(sample);
    if x[n - 1] - x[0] == 0.0 {
        tracing::warn!("Shapiro-Wilk input has zero range (n={}); reporting W=1, p=1", n);
        return Ok((1.0, 1.0));
    }

    if n == 3 {
        return Ok(exact_n3(&x));
    }

    let a = coefficients(n)?;
    let w = w_statistic(&x, &a).min(1.0);
    let p = p_value(w, n)?;
    Ok((w, p.clamp(0.0, 1.0)))
}

// n = 3: a = (-√½, 0, √½) and the null distribution of W is known exactly
fn exact_n3(x: &[f64]) -> (f64, f64) {
    let mean = (x[0] + x[1] + x[2]) / 3.0;
    let ss: f64 = x.iter().map(|v| (v - mean).powi(2)).sum();
    let numerator = std::f64::consts::FRAC_1_SQRT_2 * (x[2] - x[0]);
    let w = (numerator * numerator / ss).clamp(0.75, 1.0);

    let p = 1.0 - (6.0 / std::f64::consts::PI) * w.sqrt().acos();
    (w, p.clamp(0.0, 1.0))
}

/// Antisymmetric weights for the lower half of the order statistics
fn coefficients(n: usize) -> Result<Vec<f64>> {
    let half = n / 2;
    let nf = n as f64;

    // Blom scores for the expected normal order statistics (negative half)
    let m = (0..half)
        .map(|i| normal_quantile((i as f64 + 1.0 - 0.375) / (nf + 0.25)))
        .collect::<Result<Vec<f64>>>()?;

    let summ2 = 2.0 * m.iter().map(|v| v * v).sum::<f64>();
    let ssumm2 = summ2.sqrt();
    let rsn = 1.0 / nf.sqrt();

    let a1 = poly(&C1, rsn) - m[0] / ssumm2;
    let mut a = vec![0.0; half];

    // n <= 5 corrects only the extreme weight; larger n corrects two
    let (corrected, fac_sq, one_minus) = if n > 5 {
        let a2 = -m[1] / ssumm2 + poly(&C2, rsn);
        a[1] = a2;
        (
            2,
            summ2 - 2.0 * m[0] * m[0] - 2.0 * m[1] * m[1],
            1.0 - 2.0 * a1 * a1 - 2.0 * a2 * a2,
        )
    } else {
        (1, summ2 - 2.0 * m[0] * m[0], 1.0 - 2.0 * a1 * a1)
    };
    a[0] = a1;

    if fac_sq <= 0.0 || one_minus <= 0.0 {
        return Err(AnalysisError::degenerate(
            "normality test",
            "Shapiro-Wilk coefficient normalization failed",
        ));
    }
    let fac = (fac_sq / one_minus).sqrt();
    for i in corrected..half {
        a[i] = -m[i] / fac;
    }

    Ok(a)
}

/// W = (Σ aᵢ (x₍ₙ₊₁₋ᵢ₎ - x₍ᵢ₎))² / Σ (xᵢ - x̄)²
fn w_statistic(x: &[f64], a: &[f64]) -> f64 {
    let n = x.len();
    let numerator: f64 = a
        .iter()
        .enumerate()
        .map(|(i, ai)| ai * (x[n - 1 - i] - x[i]))
        .sum();

    let mean = x.iter().sum::<f64>() / n as f64;
    let ss: f64 = x.iter().map(|v| (v - mean).powi(2)).sum();

    numerator * numerator / ss
}

/// Royston's normalizing transformation of 1 - W
fn p_value(w: f64, n: usize) -> Result<f64> {
    let w1 = 1.0 - w;
    if w1 <= 0.0 {
        return Ok(1.0);
    }
    let nf = n as f64;
    let y = w1.ln();

    let (y, mu, sigma) = if n <= 11 {
        let gamma = poly(&G, nf);
        if y >= gamma {
            // Beyond the approximation's support: W is as small as it gets
            return Ok(0.0);
        }
        (-(gamma - y).ln(), poly(&C3, nf), poly(&C4, nf).exp())
    } else {
        let ln_n = nf.ln();
        (y, poly(&C5, ln_n), poly(&C6, ln_n).exp())
    };

    normal_sf((y - mu) / sigma)
}
