//! Error taxonomy for the analysis pipeline
//!
//! Every failure is local to the metric being processed: the pipeline driver
//! turns an `AnalysisError` into an exclusion entry in the ranking and moves
//! on to the next metric.

use thiserror::Error;

/// Errors raised by any stage of the cohort comparison
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Insufficient data for {operation}: need at least {required} samples, got {actual}")]
    InsufficientData {
        operation: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("Degenerate denominator in {operation}: {detail}")]
    DegenerateDenominator {
        operation: &'static str,
        detail: String,
    },

    #[error("Degenerate effect size: pooled standard deviation is zero")]
    DegenerateEffectSize,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Malformed gesture sequence at position {position} ({token:?}): {reason}")]
    MalformedGesture {
        position: usize,
        token: String,
        reason: String,
    },

    #[error("Distribution construction failed: {0}")]
    Distribution(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

impl AnalysisError {
    pub(crate) fn insufficient(operation: &'static str, required: usize, actual: usize) -> Self {
        Self::InsufficientData {
            operation,
            required,
            actual,
        }
    }

    pub(crate) fn degenerate(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::DegenerateDenominator {
            operation,
            detail: detail.into(),
        }
    }
}

/// Reject samples shorter than `required`
pub(crate) fn require_len(sample: &[f64], required: usize, operation: &'static str) -> Result<()> {
    if sample.len() < required {
        return Err(AnalysisError::insufficient(
            operation,
            required,
            sample.len(),
        ));
    }
    Ok(())
}
