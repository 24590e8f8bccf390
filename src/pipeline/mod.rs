pub mod stage1_validate;
pub mod stage2_metrics;
pub mod stage3_compare;
pub mod stage4_report;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{CalculatorError, EngineError, Result};
use crate::model::matrix::TechniqueInput;
use crate::model::metrics::MetricResult;
use crate::model::summary::{ExperimentResult, TechniqueResult};
use crate::pipeline::stage1_validate::validate_request;
use crate::pipeline::stage2_metrics::compute;
use crate::pipeline::stage3_compare::summarize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluateOptions {
    /// Compute techniques on the rayon worker pool. Output is identical
    /// to the sequential path.
    pub parallel: bool,
}

pub fn evaluate(
    experiment_name: &str,
    description: &str,
    techniques: &[TechniqueInput],
) -> Result<ExperimentResult> {
    evaluate_with(
        experiment_name,
        description,
        techniques,
        EvaluateOptions::default(),
    )
}

/// Validate the request, compute every technique and assemble the result.
/// Either the whole experiment succeeds or the first failing check (by
/// check order, then technique order) is returned.
pub fn evaluate_with(
    experiment_name: &str,
    description: &str,
    techniques: &[TechniqueInput],
    options: EvaluateOptions,
) -> Result<ExperimentResult> {
    validate_request(experiment_name, techniques)?;

    let metrics = if options.parallel {
        techniques.par_iter().map(compute_one).collect::<Vec<_>>()
    } else {
        techniques.iter().map(compute_one).collect::<Vec<_>>()
    };

    let mut techniques_results = Vec::with_capacity(techniques.len());
    for (index, (technique, metrics)) in techniques.iter().zip(metrics).enumerate() {
        let metrics = metrics
            .map_err(|e| EngineError::at_technique(e, index, &technique.technique_name))?;
        debug!(
            technique = %technique.technique_name,
            sensitivity = metrics.stats.sensitivity,
            specificity = metrics.stats.specificity,
            kappa = metrics.cohen_kappa,
            "technique evaluated"
        );
        techniques_results.push(TechniqueResult {
            technique_name: technique.technique_name.clone(),
            metrics,
        });
    }

    let comparison_summary = summarize(&techniques_results);
    info!(
        experiment = %experiment_name,
        techniques = techniques_results.len(),
        best_accuracy = %comparison_summary.best_accuracy,
        best_kappa = %comparison_summary.best_kappa,
        "experiment evaluated"
    );

    Ok(ExperimentResult {
        experiment_name: experiment_name.to_string(),
        description: description.to_string(),
        techniques_results,
        comparison_summary,
    })
}

fn compute_one(technique: &TechniqueInput) -> std::result::Result<MetricResult, CalculatorError> {
    compute(&technique.matrix, technique.confidence_level)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
