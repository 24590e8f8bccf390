use tracing::debug;

use crate::error::CalculatorError;
use crate::model::agreement::KappaAgreement;
use crate::model::matrix::ConfusionMatrix;
use crate::model::metrics::{DiagnosticStats, MetricResult};
use crate::stats::kappa::{cohen_kappa, kappa_interval};
use crate::stats::normal::z_critical;
use crate::stats::wilson::wilson_estimate;

/// Diagnostic accuracy metrics for a single confusion matrix.
///
/// Proportions with an empty denominator are reported as 0.0 with interval
/// [0, 0]. Fails only for a negative count, an all-zero matrix or a
/// confidence level outside (0, 1).
pub fn compute(
    matrix: &ConfusionMatrix,
    confidence_level: f64,
) -> Result<MetricResult, CalculatorError> {
    let counts = matrix.validate()?;
    let z = z_critical(confidence_level)
        .ok_or(CalculatorError::InvalidConfidenceLevel(confidence_level))?;

    let n = counts.total();
    let sensitivity = wilson_estimate(counts.tp as u128, counts.condition_positive(), z);
    let specificity = wilson_estimate(counts.tn as u128, counts.condition_negative(), z);
    let ppv = wilson_estimate(counts.tp as u128, counts.predicted_positive(), z);
    let npv = wilson_estimate(counts.tn as u128, counts.predicted_negative(), z);
    let accuracy = (counts.tp as u128 + counts.tn as u128) as f64 / n as f64;
    let prevalence = counts.condition_positive() as f64 / n as f64;

    let kappa = cohen_kappa(&counts);
    if kappa.degenerate {
        debug!(
            tp = counts.tp,
            fp = counts.fp,
            fn_ = counts.fn_,
            tn = counts.tn,
            "chance agreement is total; kappa set to 0"
        );
    }
    let cohen_kappa_ci = kappa_interval(&kappa, z);

    Ok(MetricResult {
        stats: DiagnosticStats {
            sensitivity: sensitivity.value,
            specificity: specificity.value,
            ppv: ppv.value,
            npv: npv.value,
            accuracy,
            prevalence,
            sensitivity_ci: sensitivity.ci,
            specificity_ci: specificity.ci,
            ppv_ci: ppv.ci,
            npv_ci: npv.ci,
        },
        cohen_kappa: kappa.kappa,
        cohen_kappa_ci,
        interpretation: KappaAgreement::from_kappa(kappa.kappa),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_metrics.rs"]
mod tests;
