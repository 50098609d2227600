// Assumption-driven choice of two-sample test
//
//   both normal? --no--> Mann-Whitney U
//        |
//       yes
//        |
//   equal variances? --no--> Welch's t
//        |
//       yes --> Student's independent t

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three two-sample tests the pipeline can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestKind {
    /// Student's t with pooled variance
    IndependentT,
    /// t with Welch-Satterthwaite degrees of freedom
    WelchT,
    /// Rank-based, no normality assumption
    MannWhitneyU,
}

impl TestKind {
    pub fn name(&self) -> &'static str {
        match self {
            TestKind::IndependentT => "Independent-t",
            TestKind::WelchT => "Welch-t",
            TestKind::MannWhitneyU => "Mann-Whitney-U",
        }
    }

    pub fn is_parametric(&self) -> bool {
        !matches!(self, TestKind::MannWhitneyU)
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decision table over the two assumption outcomes
pub fn select_test(both_normal: bool, equal_variance: bool) -> TestKind {
    match (both_normal, equal_variance) {
        (true, true) => TestKind::IndependentT,
        (true, false) => TestKind::WelchT,
        (false, _) => TestKind::MannWhitneyU,
    }
}
