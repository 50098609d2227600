//! Ranking metrics by how well they separate experts from novices
//!
//! rank_score = 100·significant + |d|. The 100-point bonus dwarfs any
//! realistic effect size, so every significant metric outranks every
//! non-significant one, and |d| orders metrics within each bucket.

use crate::hypothesis::{EffectCategory, TestResult};
use serde::{Deserialize, Serialize};

/// Score bonus for a significant difference
pub const SIGNIFICANCE_WEIGHT: f64 = 100.0;

/// Pipeline outcome for one metric, as the ranker sees it
#[derive(Debug, Clone, PartialEq)]
pub enum MetricOutcome {
    Completed {
        metric_name: String,
        result: TestResult,
    },
    Failed {
        metric_name: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMetric {
    pub metric_name: String,
    pub p_value: f64,
    pub cohens_d: f64,
    pub significant: bool,
    pub effect_category: EffectCategory,
    pub rank_score: f64,
    /// 1-based
    pub rank_position: usize,
}

/// A metric left out of the ranking, with the reason its analysis failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedMetric {
    pub metric_name: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub ranked: Vec<RankedMetric>,
    pub excluded: Vec<ExcludedMetric>,
}

impl Ranking {
    pub fn best(&self) -> Option<&RankedMetric> {
        self.ranked.first()
    }

    pub fn worst(&self) -> Option<&RankedMetric> {
        self.ranked.last()
    }

    pub fn position_of(&self, metric_name: &str) -> Option<usize> {
        self.ranked
            .iter()
            .find(|m| m.metric_name == metric_name)
            .map(|m| m.rank_position)
    }
}

pub fn rank_score(significant: bool, cohens_d: f64) -> f64 {
    let bonus = if significant { SIGNIFICANCE_WEIGHT } else { 0.0 };
    bonus + cohens_d.abs()
}

/// Rank completed metrics; failed ones are reported in `excluded`
///
/// Sort is stable and descending by score, so equal scores keep input order.
pub fn rank_metrics(outcomes: Vec<MetricOutcome>) -> Ranking {
    let mut ranked = Vec::new();
    let mut excluded = Vec::new();

    for outcome in outcomes {
        match outcome {
            MetricOutcome::Completed {
                metric_name,
                result,
            } => ranked.push(RankedMetric {
                metric_name,
                p_value: result.p_value,
                cohens_d: result.cohens_d,
                significant: result.significant,
                effect_category: result.effect_category,
                rank_score: rank_score(result.significant, result.cohens_d),
                rank_position: 0,
            }),
            MetricOutcome::Failed {
                metric_name,
                reason,
            } => {
                tracing::warn!("Excluding {} from ranking: {}", metric_name, reason);
                excluded.push(ExcludedMetric {
                    metric_name,
                    reason,
                });
            }
        }
    }

    ranked.sort_by(|a, b| b.rank_score.total_cmp(&a.rank_score));
    for (index, metric) in ranked.iter_mut().enumerate() {
        metric.rank_position = index + 1;
    }

    Ranking { ranked, excluded }
}
