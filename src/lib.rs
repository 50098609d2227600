//! Suturestat - statistical comparison of expert and novice suturing skill
//!
//! This library provides the statistical core for deciding which performance
//! metrics (task times, gesture error counts, fixation sparsity) best separate
//! expert from novice cohorts: descriptive statistics, outlier detection,
//! relative dispersion, assumption checks, adaptive two-sample testing with
//! effect sizes, and a significance-first metric ranking.
//!
//! # Example
//! ```
//! use suturestat::config::AnalysisConfig;
//! use suturestat::pipeline::{run_pipeline, MetricSamples};
//!
//! let metric = MetricSamples::new(
//!     "Total Duration",
//!     vec![10.0, 12.0, 11.0, 13.0, 12.0, 11.0, 10.0, 12.0, 11.0],
//!     vec![20.0, 22.0, 19.0, 25.0, 23.0, 21.0, 24.0, 20.0, 22.0, 26.0, 21.0],
//! );
//! let report = run_pipeline(&[metric], &AnalysisConfig::default());
//! assert_eq!(report.ranking.best().unwrap().metric_name, "Total Duration");
//! ```

pub mod assumptions;
pub mod config;
pub mod descriptive;
pub mod dispersion;
pub mod distributions;
pub mod error;
pub mod gestures;
pub mod hypothesis;
pub mod logging;
pub mod outliers;
pub mod pipeline;
pub mod ranking;

pub use error::{AnalysisError, Result};
