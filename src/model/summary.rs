use serde::{Deserialize, Serialize};

use crate::model::metrics::MetricResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechniqueResult {
    pub technique_name: String,
    #[serde(flatten)]
    pub metrics: MetricResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub best_sensitivity: String,
    pub best_specificity: String,
    pub best_accuracy: String,
    pub best_kappa: String,
    pub techniques_count: usize,
    pub average_sensitivity: f64,
    pub average_specificity: f64,
    pub average_accuracy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResult {
    pub experiment_name: String,
    pub description: String,
    pub techniques_results: Vec<TechniqueResult>,
    pub comparison_summary: ComparisonSummary,
}
