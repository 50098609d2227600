// Two-sample cohort comparison with assumption-driven test selection
//
// Per metric:
// 1. Select exactly one test from the assumption outcomes (decision table)
// 2. Run it: statistic + two-sided p-value
// 3. Cohen's d (unweighted pooled SD) and its qualitative band
//
// Significance: p < alpha.

mod effect_size;
mod mann_whitney;
mod selection;
mod ttest;

pub use effect_size::{cohens_d, interpret_effect_size, EffectCategory};
pub use mann_whitney::{mann_whitney_u, MannWhitneyOutcome, UMethod, EXACT_MAX_N};
pub use selection::{select_test, TestKind};
pub use ttest::{independent_t_test, welch_t_test, TTestOutcome};

use crate::assumptions::AssumptionResult;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Outcome of whichever test was selected
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoSampleTest {
    pub kind: TestKind,
    pub statistic: f64,
    pub p_value: f64,
}

/// Run the given test on (a, b)
pub fn run_test(kind: TestKind, a: &[f64], b: &[f64]) -> Result<TwoSampleTest> {
    let (statistic, p_value) = match kind {
        TestKind::IndependentT => {
            let t = independent_t_test(a, b)?;
            (t.statistic, t.p_value)
        }
        TestKind::WelchT => {
            let t = welch_t_test(a, b)?;
            (t.statistic, t.p_value)
        }
        TestKind::MannWhitneyU => {
            let u = mann_whitney_u(a, b)?;
            (u.statistic, u.p_value)
        }
    };

    Ok(TwoSampleTest {
        kind,
        statistic,
        p_value,
    })
}

/// Final comparison record for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub test: TestKind,
    pub statistic: f64,
    pub p_value: f64,
    /// p_value < alpha
    pub significant: bool,
    /// Positive when experts have the higher mean
    pub cohens_d: f64,
    pub effect_category: EffectCategory,
}

/// Choose, run and size the expert-vs-novice comparison
pub fn compare_cohorts(
    experts: &[f64],
    novices: &[f64],
    assumptions: &AssumptionResult,
    alpha: f64,
) -> Result<TestResult> {
    let kind = select_test(
        assumptions.both_normal(),
        assumptions.homogeneity.equal_variance,
    );
    tracing::debug!(
        test = %kind,
        parametric = kind.is_parametric(),
        "selected two-sample test"
    );

    let outcome = run_test(kind, experts, novices)?;
    let d = cohens_d(experts, novices)?;

    Ok(TestResult {
        test: kind,
        statistic: outcome.statistic,
        p_value: outcome.p_value,
        significant: outcome.p_value < alpha,
        cohens_d: d,
        effect_category: interpret_effect_size(d),
    })
}
