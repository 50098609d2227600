// Per-metric analysis pipeline
//
// For each metric, in order:
// 1. Descriptive summaries (population divisor) and Tukey outliers per cohort
// 2. Coefficient of variation per cohort and combined, variance ratio
// 3. Shape diagnostic, normality and variance homogeneity
// 4. Selected two-sample test with Cohen's d
//
// Metrics are independent. A failing metric is logged, reported in the
// ranking's exclusion list and never aborts the rest of the run.

use crate::assumptions::{check_assumptions, AssumptionResult, ShapeDiagnostic};
use crate::config::AnalysisConfig;
use crate::descriptive::{summarize, DescriptiveSummary};
use crate::dispersion::{
    cohort_dispersion, rank_by_robustness, variance_ratio, CohortDispersion, RobustnessRanking,
};
use crate::error::Result;
use crate::hypothesis::{compare_cohorts, TestResult};
use crate::outliers::{detect_outliers, OutlierReport};
use crate::ranking::{rank_metrics, MetricOutcome, Ranking};
use serde::{Deserialize, Serialize};

/// Named expert and novice samples for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSamples {
    pub name: String,
    pub experts: Vec<f64>,
    pub novices: Vec<f64>,
}

impl MetricSamples {
    pub fn new(name: impl Into<String>, experts: Vec<f64>, novices: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            experts,
            novices,
        }
    }
}

/// Everything computed for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricAnalysis {
    pub metric_name: String,
    pub experts: DescriptiveSummary,
    pub novices: DescriptiveSummary,
    pub expert_outliers: OutlierReport,
    pub novice_outliers: OutlierReport,
    pub dispersion: CohortDispersion,
    /// Larger over smaller population variance; infinite if one is zero
    pub variance_ratio: f64,
    /// Absent when the cohort is constant
    pub expert_shape: Option<ShapeDiagnostic>,
    pub novice_shape: Option<ShapeDiagnostic>,
    pub assumptions: AssumptionResult,
    pub test: TestResult,
}

/// Run every stage for one metric
pub fn analyze_metric(samples: &MetricSamples, config: &AnalysisConfig) -> Result<MetricAnalysis> {
    config.validate()?;
    let alpha = config.significance_level;
    let experts = &samples.experts;
    let novices = &samples.novices;

    let expert_summary = summarize(experts, true)?;
    let novice_summary = summarize(novices, true)?;

    let expert_outliers = detect_outliers(experts)?;
    let novice_outliers = detect_outliers(novices)?;
    if expert_outliers.has_outliers() || novice_outliers.has_outliers() {
        tracing::debug!(
            metric = %samples.name,
            experts = expert_outliers.outliers.len(),
            novices = novice_outliers.outliers.len(),
            "Tukey outliers present"
        );
    }

    let dispersion = cohort_dispersion(&samples.name, experts, novices)?;
    let ratio = variance_ratio(expert_summary.variance, novice_summary.variance);

    let assumptions = check_assumptions(experts, novices, alpha)?;
    let test = compare_cohorts(experts, novices, &assumptions, alpha)?;

    tracing::debug!(
        metric = %samples.name,
        test = %test.test,
        p_value = test.p_value,
        cohens_d = test.cohens_d,
        "metric analysed"
    );

    Ok(MetricAnalysis {
        metric_name: samples.name.clone(),
        expert_shape: ShapeDiagnostic::from_summary(&expert_summary),
        novice_shape: ShapeDiagnostic::from_summary(&novice_summary),
        experts: expert_summary,
        novices: novice_summary,
        expert_outliers,
        novice_outliers,
        dispersion,
        variance_ratio: ratio,
        assumptions,
        test,
    })
}

/// Results of a full run across metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineReport {
    /// Successful analyses, in input order
    pub analyses: Vec<MetricAnalysis>,
    /// Successful metrics by ascending combined CV
    pub robustness: RobustnessRanking,
    pub ranking: Ranking,
    pub config: AnalysisConfig,
}

impl PipelineReport {
    pub fn analysis(&self, metric_name: &str) -> Option<&MetricAnalysis> {
        self.analyses.iter().find(|a| a.metric_name == metric_name)
    }

    /// Pretty-printed JSON for external renderers
    ///
    /// Non-finite numbers (an infinite variance ratio) serialize as `null`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Analyse every metric, then rank
pub fn run_pipeline(metrics: &[MetricSamples], config: &AnalysisConfig) -> PipelineReport {
    let mut analyses = Vec::with_capacity(metrics.len());
    let mut outcomes = Vec::with_capacity(metrics.len());

    for samples in metrics {
        match analyze_metric(samples, config) {
            Ok(analysis) => {
                outcomes.push(MetricOutcome::Completed {
                    metric_name: analysis.metric_name.clone(),
                    result: analysis.test,
                });
                analyses.push(analysis);
            }
            Err(e) => {
                // Skip this metric, keep the others
                tracing::warn!("Failed to analyse metric {}: {}", samples.name, e);
                outcomes.push(MetricOutcome::Failed {
                    metric_name: samples.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    let robustness = rank_by_robustness(
        analyses
            .iter()
            .map(|a| (a.metric_name.clone(), a.dispersion.combined_cv))
            .collect(),
    );

    PipelineReport {
        analyses,
        robustness,
        ranking: rank_metrics(outcomes),
        config: *config,
    }
}
