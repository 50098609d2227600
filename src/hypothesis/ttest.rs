// Parametric two-sample t-tests
//
// Scientific Foundation:
// - Student (1908). The probable error of a mean. Biometrika, 6(1), 1-25.
// - Welch, B. L. (1947). The generalization of Student's problem when several
//   different population variances are involved. Biometrika, 34, 28-35.
//
// Both tests are two-sided. The sign of t follows mean(a) - mean(b).

use crate::descriptive::{mean, variance};
use crate::distributions::students_t_two_sided;
use crate::error::{require_len, AnalysisError, Result};

/// t statistic, two-sided p-value and degrees of freedom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTestOutcome {
    pub statistic: f64,
    pub p_value: f64,
    pub df: f64,
}

struct GroupMoments {
    n: f64,
    mean: f64,
    variance: f64,
}

fn moments(group: &[f64], operation: &'static str) -> Result<GroupMoments> {
    require_len(group, 2, operation)?;
    Ok(GroupMoments {
        n: group.len() as f64,
        mean: mean(group)?,
        variance: variance(group, false)?,
    })
}

/// Student's independent t-test (pooled variance, df = n₁ + n₂ - 2)
pub fn independent_t_test(a: &[f64], b: &[f64]) -> Result<TTestOutcome> {
    let ga = moments(a, "independent t-test")?;
    let gb = moments(b, "independent t-test")?;

    let df = ga.n + gb.n - 2.0;
    let pooled = ((ga.n - 1.0) * ga.variance + (gb.n - 1.0) * gb.variance) / df;
    let standard_error = (pooled * (1.0 / ga.n + 1.0 / gb.n)).sqrt();
    if standard_error == 0.0 {
        return Err(AnalysisError::degenerate(
            "independent t-test",
            "pooled variance is zero",
        ));
    }

    let statistic = (ga.mean - gb.mean) / standard_error;
    Ok(TTestOutcome {
        statistic,
        p_value: students_t_two_sided(statistic, df)?,
        df,
    })
}

/// Welch's unequal-variance t-test (Welch-Satterthwaite df)
pub fn welch_t_test(a: &[f64], b: &[f64]) -> Result<TTestOutcome> {
    let ga = moments(a, "Welch t-test")?;
    let gb = moments(b, "Welch t-test")?;

    let va = ga.variance / ga.n;
    let vb = gb.variance / gb.n;
    let standard_error = (va + vb).sqrt();
    if standard_error == 0.0 {
        return Err(AnalysisError::degenerate(
            "Welch t-test",
            "both group variances are zero",
        ));
    }

    let statistic = (ga.mean - gb.mean) / standard_error;
    let df = (va + vb).powi(2) / (va.powi(2) / (ga.n - 1.0) + vb.powi(2) / (gb.n - 1.0));

    Ok(TTestOutcome {
        statistic,
        p_value: students_t_two_sided(statistic, df)?,
        df,
    })
}
