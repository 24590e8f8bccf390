//! Diagnostic accuracy comparison for nucleic-acid amplification techniques.
//!
//! [`compute`] turns one confusion matrix into sensitivity, specificity,
//! predictive values, accuracy, prevalence, Wilson intervals and Cohen's
//! kappa. [`evaluate`] validates a whole experiment, runs the calculator per
//! technique and picks the best technique per headline metric.

pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod store;

pub use error::{CalculatorError, EngineError, MatrixDefect};
pub use model::agreement::KappaAgreement;
pub use model::matrix::{ConfusionMatrix, TechniqueInput};
pub use model::metrics::{DiagnosticStats, Interval, MetricResult};
pub use model::summary::{ComparisonSummary, ExperimentResult, TechniqueResult};
pub use pipeline::stage2_metrics::compute;
pub use pipeline::{EvaluateOptions, evaluate, evaluate_with};
