// Relative dispersion and robustness ranking
//
// Coefficient of Variation (CV) = population std_dev / mean is dimensionless,
// so metrics measured on different scales (seconds, error counts, pixel
// ratios) can be compared directly. Lower CV = more robust metric.

use crate::descriptive::{mean, stddev};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Coefficient of variation with population standard deviation
///
/// Returns 0 when the mean is exactly 0. Callers that need to distinguish a
/// zero-mean sample must check the mean themselves.
///
/// # Example
/// ```
/// use suturestat::dispersion::coefficient_of_variation;
///
/// // mean = 10, population std = 2
/// let cv = coefficient_of_variation(&[8.0, 12.0, 8.0, 12.0]).unwrap();
/// assert!((cv - 0.2).abs() < 1e-12);
/// ```
pub fn coefficient_of_variation(sample: &[f64]) -> Result<f64> {
    let mu = mean(sample)?;
    if mu == 0.0 {
        return Ok(0.0);
    }
    Ok(stddev(sample, true)? / mu)
}

/// Ratio of the larger to the smaller variance
///
/// Infinite when the smaller variance is 0.
pub fn variance_ratio(variance_a: f64, variance_b: f64) -> f64 {
    let smaller = variance_a.min(variance_b);
    let larger = variance_a.max(variance_b);
    if smaller == 0.0 {
        return f64::INFINITY;
    }
    larger / smaller
}

/// CV of each cohort plus the CV of both cohorts pooled together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortDispersion {
    pub metric_name: String,
    pub experts_cv: f64,
    pub novices_cv: f64,
    /// CV over the concatenation of both cohorts; used for robustness ranking
    pub combined_cv: f64,
}

pub fn cohort_dispersion(
    metric_name: &str,
    experts: &[f64],
    novices: &[f64],
) -> Result<CohortDispersion> {
    let combined: Vec<f64> = experts.iter().chain(novices).copied().collect();

    Ok(CohortDispersion {
        metric_name: metric_name.to_string(),
        experts_cv: coefficient_of_variation(experts)?,
        novices_cv: coefficient_of_variation(novices)?,
        combined_cv: coefficient_of_variation(&combined)?,
    })
}

/// Metrics ordered from most to least robust
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobustnessRanking {
    /// (metric name, CV), ascending CV, ties in input order
    pub ordered: Vec<(String, f64)>,
}

impl RobustnessRanking {
    /// Metric with the lowest CV
    pub fn most_robust(&self) -> Option<&(String, f64)> {
        self.ordered.first()
    }

    /// Metric with the highest CV
    ///
    /// On a tie at the top, the first of the tied metrics in input order.
    pub fn least_robust(&self) -> Option<&(String, f64)> {
        let highest = self.ordered.last()?.1;
        self.ordered
            .iter()
            .find(|(_, cv)| cv.total_cmp(&highest).is_eq())
    }
}

/// Order metrics by ascending CV (stable: ties keep input order)
pub fn rank_by_robustness(metrics: Vec<(String, f64)>) -> RobustnessRanking {
    let mut ordered = metrics;
    ordered.sort_by(|a, b| a.1.total_cmp(&b.1));
    RobustnessRanking { ordered }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cv_zero_mean_is_zero() {
        assert_eq!(coefficient_of_variation(&[-1.0, 1.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_cv_constant_sample_is_zero() {
        assert_eq!(coefficient_of_variation(&[3.0, 3.0, 3.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_cv_empty_is_error() {
        assert!(coefficient_of_variation(&[]).is_err());
    }

    #[test]
    fn test_variance_ratio() {
        assert_eq!(variance_ratio(2.0, 8.0), 4.0);
        assert_eq!(variance_ratio(8.0, 2.0), 4.0);
        assert_eq!(variance_ratio(0.0, 8.0), f64::INFINITY);
        assert_eq!(variance_ratio(0.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn test_cohort_dispersion_combined() {
        // Combined: [8, 12, 8, 12] -> mean 10, population std 2
        let dispersion = cohort_dispersion("total", &[8.0, 12.0], &[8.0, 12.0]).unwrap();
        assert_eq!(dispersion.metric_name, "total");
        assert!((dispersion.experts_cv - 0.2).abs() < 1e-12);
        assert!((dispersion.novices_cv - 0.2).abs() < 1e-12);
        assert!((dispersion.combined_cv - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_rank_by_robustness() {
        let ranking = rank_by_robustness(vec![
            ("needle".to_string(), 0.45),
            ("total".to_string(), 0.38),
            ("knot".to_string(), 0.52),
        ]);

        assert_eq!(ranking.most_robust().unwrap().0, "total");
        assert_eq!(ranking.least_robust().unwrap().0, "knot");
        assert_eq!(ranking.ordered[1].0, "needle");
    }

    #[test]
    fn test_rank_by_robustness_ties_keep_input_order() {
        let ranking = rank_by_robustness(vec![
            ("b".to_string(), 0.3),
            ("a".to_string(), 0.3),
            ("c".to_string(), 0.1),
        ]);
        let names: Vec<&str> = ranking.ordered.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_least_robust_tie_takes_first_in_input_order() {
        let ranking = rank_by_robustness(vec![
            ("c".to_string(), 0.1),
            ("b".to_string(), 0.3),
            ("a".to_string(), 0.3),
        ]);
        assert_eq!(ranking.least_robust().unwrap().0, "b");
        assert_eq!(ranking.most_robust().unwrap().0, "c");

        let single = rank_by_robustness(vec![("only".to_string(), 0.2)]);
        assert_eq!(single.least_robust().unwrap().0, "only");
    }

    #[test]
    fn test_rank_by_robustness_empty() {
        let ranking = rank_by_robustness(Vec::new());
        assert!(ranking.most_robust().is_none());
        assert!(ranking.least_robust().is_none());
    }
}
