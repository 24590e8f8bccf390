use crate::model::summary::{ComparisonSummary, TechniqueResult};

/// Cross-technique summary. `results` must be non-empty and in submission
/// order; for every headline metric the strictly greatest value wins and
/// an exact tie goes to the technique submitted first.
pub fn summarize(results: &[TechniqueResult]) -> ComparisonSummary {
    let count = results.len();
    ComparisonSummary {
        best_sensitivity: best_by(results, |r| r.metrics.stats.sensitivity),
        best_specificity: best_by(results, |r| r.metrics.stats.specificity),
        best_accuracy: best_by(results, |r| r.metrics.stats.accuracy),
        best_kappa: best_by(results, |r| r.metrics.cohen_kappa),
        techniques_count: count,
        average_sensitivity: mean(results, |r| r.metrics.stats.sensitivity),
        average_specificity: mean(results, |r| r.metrics.stats.specificity),
        average_accuracy: mean(results, |r| r.metrics.stats.accuracy),
    }
}

pub fn best_index<F>(results: &[TechniqueResult], metric: F) -> Option<usize>
where
    F: Fn(&TechniqueResult) -> f64,
{
    let mut best: Option<(usize, f64)> = None;
    for (idx, result) in results.iter().enumerate() {
        let value = metric(result);
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((idx, value)),
        }
    }
    best.map(|(idx, _)| idx)
}

fn best_by<F>(results: &[TechniqueResult], metric: F) -> String
where
    F: Fn(&TechniqueResult) -> f64,
{
    best_index(results, metric)
        .map(|idx| results[idx].technique_name.clone())
        .unwrap_or_default()
}

fn mean<F>(results: &[TechniqueResult], metric: F) -> f64
where
    F: Fn(&TechniqueResult) -> f64,
{
    if results.is_empty() {
        return 0.0;
    }
    let mut sum = 0.0;
    for result in results {
        sum += metric(result);
    }
    sum / results.len() as f64
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_compare.rs"]
mod tests;
