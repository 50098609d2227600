//! Reference distribution tails used to turn test statistics into p-values
//!
//! Thin wrappers over `statrs` so the test modules deal only in `f64`s and
//! the crate error type.

use crate::error::{AnalysisError, Result};
use statrs::distribution::{ContinuousCDF, FisherSnedecor, Normal, StudentsT};

fn standard_normal() -> Result<Normal> {
    Normal::new(0.0, 1.0).map_err(|e| AnalysisError::Distribution(e.to_string()))
}

/// Φ(z)
pub fn normal_cdf(z: f64) -> Result<f64> {
    Ok(standard_normal()?.cdf(z))
}

/// Upper tail 1 - Φ(z), evaluated as Φ(-z) to keep precision far out
pub fn normal_sf(z: f64) -> Result<f64> {
    normal_cdf(-z)
}

/// Φ⁻¹(p) for p in (0, 1)
pub fn normal_quantile(p: f64) -> Result<f64> {
    if !(p > 0.0 && p < 1.0) {
        return Err(AnalysisError::InvalidParameter(format!(
            "normal quantile probability must be in (0, 1), got {}",
            p
        )));
    }
    Ok(standard_normal()?.inverse_cdf(p))
}

/// Two-sided p-value for a Student t statistic with `df` degrees of freedom
pub fn students_t_two_sided(t: f64, df: f64) -> Result<f64> {
    let dist =
        StudentsT::new(0.0, 1.0, df).map_err(|e| AnalysisError::Distribution(e.to_string()))?;
    Ok((2.0 * dist.cdf(-t.abs())).min(1.0))
}

/// Upper tail P(F > f) of the Fisher-Snedecor distribution
pub fn f_sf(f: f64, df1: f64, df2: f64) -> Result<f64> {
    if f <= 0.0 {
        return Ok(1.0);
    }
    let dist =
        FisherSnedecor::new(df1, df2).map_err(|e| AnalysisError::Distribution(e.to_string()))?;
    Ok((1.0 - dist.cdf(f)).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_tails() {
        assert!((normal_cdf(0.0).unwrap() - 0.5).abs() < 1e-12);
        assert!((normal_sf(1.959_963_984_540_054).unwrap() - 0.025).abs() < 1e-9);
        assert!((normal_cdf(-1.0).unwrap() + normal_sf(-1.0).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normal_quantile() {
        assert!((normal_quantile(0.975).unwrap() - 1.959_963_984_540_054).abs() < 1e-8);
        assert!(normal_quantile(0.0).is_err());
        assert!(normal_quantile(1.0).is_err());
    }

    #[test]
    fn test_students_t_two_sided() {
        // t = 2.228 is the 97.5% point for df = 10
        let p = students_t_two_sided(2.228_138_851_986_274, 10.0).unwrap();
        assert!((p - 0.05).abs() < 1e-6);
        assert_eq!(students_t_two_sided(0.0, 5.0).unwrap(), 1.0);
        // Symmetric in the sign of t
        let lhs = students_t_two_sided(-1.3, 7.0).unwrap();
        let rhs = students_t_two_sided(1.3, 7.0).unwrap();
        assert!((lhs - rhs).abs() < 1e-15);
    }

    #[test]
    fn test_students_t_rejects_bad_df() {
        assert!(matches!(
            students_t_two_sided(1.0, 0.0),
            Err(AnalysisError::Distribution(_))
        ));
    }

    #[test]
    fn test_f_sf() {
        // F(1, 10) upper 5% point is t(10)^2
        let f = 2.228_138_851_986_274f64.powi(2);
        assert!((f_sf(f, 1.0, 10.0).unwrap() - 0.05).abs() < 1e-6);
        assert_eq!(f_sf(0.0, 1.0, 10.0).unwrap(), 1.0);
    }
}
