// Configuration for the cohort comparison
//
// The only tunable is the significance level. Every hypothesis-test decision
// in the pipeline (normality, variance homogeneity, final significance) reads
// it from here.

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

/// Fixed significance threshold used throughout the analysis
pub const ALPHA: f64 = 0.05;

/// Configuration for the statistical pipeline
///
/// # Example
/// ```
/// use suturestat::config::AnalysisConfig;
///
/// let config = AnalysisConfig::default();
/// assert_eq!(config.significance_level, 0.05); // 95% confidence
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Statistical significance level (alpha)
    ///
    /// - Normality holds when the Shapiro-Wilk p-value is above alpha
    /// - Variances are equal when the Levene p-value is above alpha
    /// - A cohort difference is significant when its p-value is below alpha
    pub significance_level: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            significance_level: ALPHA,
        }
    }
}

impl AnalysisConfig {
    /// Parse a configuration from TOML, e.g. `significance_level = 0.05`
    ///
    /// Missing keys fall back to the defaults. The parsed value is validated.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let alpha = self.significance_level;
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(AnalysisError::InvalidConfig(format!(
                "significance_level must be in (0, 1), got {}",
                alpha
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.significance_level, ALPHA);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let config = AnalysisConfig::from_toml_str("significance_level = 0.01").unwrap();
        assert_eq!(config.significance_level, 0.01);
    }

    #[test]
    fn test_from_empty_toml_uses_default() {
        let config = AnalysisConfig::from_toml_str("").unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        assert!(matches!(
            AnalysisConfig::from_toml_str("significance_level = \"high\""),
            Err(AnalysisError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_invalid_significance_level() {
        for alpha in [0.0, 1.0, 1.5, -0.1, f64::NAN] {
            let config = AnalysisConfig {
                significance_level: alpha,
            };
            assert!(
                matches!(config.validate(), Err(AnalysisError::InvalidConfig(_))),
                "alpha {} should be rejected",
                alpha
            );
        }
    }
}
