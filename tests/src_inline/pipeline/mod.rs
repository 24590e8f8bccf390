use super::*;
use crate::error::{EngineError, MatrixDefect};
use crate::model::matrix::ConfusionMatrix;

fn technique(name: &str, tp: i64, fp: i64, fn_: i64, tn: i64) -> TechniqueInput {
    TechniqueInput::new(name, ConfusionMatrix::new(tp, fp, fn_, tn), 0.95)
}

fn qpcr_vs_rpa() -> Vec<TechniqueInput> {
    vec![
        technique("qPCR", 90, 5, 10, 95),
        technique("RPA", 80, 15, 20, 85),
    ]
}

#[test]
fn test_end_to_end_qpcr_vs_rpa() {
    let result = evaluate("qPCR vs RPA", "field samples", &qpcr_vs_rpa()).unwrap();
    assert_eq!(result.experiment_name, "qPCR vs RPA");
    assert_eq!(result.description, "field samples");
    assert_eq!(result.techniques_results.len(), 2);
    assert_eq!(result.techniques_results[0].technique_name, "qPCR");
    assert_eq!(result.techniques_results[1].technique_name, "RPA");

    let q = &result.techniques_results[0].metrics.stats;
    let r = &result.techniques_results[1].metrics.stats;
    assert_eq!(q.sensitivity, 0.9);
    assert_eq!(r.sensitivity, 0.8);
    assert_eq!(q.accuracy, 0.925);
    assert_eq!(r.accuracy, 0.825);

    let summary = &result.comparison_summary;
    assert_eq!(summary.best_sensitivity, "qPCR");
    assert_eq!(summary.best_specificity, "qPCR");
    assert_eq!(summary.best_accuracy, "qPCR");
    assert_eq!(summary.best_kappa, "qPCR");
}

#[test]
fn test_single_technique_is_rejected() {
    let err = evaluate("exp", "", &qpcr_vs_rpa()[..1]).unwrap_err();
    assert_eq!(err, EngineError::InsufficientTechniques { count: 1 });
}

#[test]
fn test_missing_name_fires_before_matrix_checks() {
    let techniques = vec![technique("qPCR", 0, 0, 0, 0), technique("RPA", -1, 0, 0, 0)];
    assert_eq!(
        evaluate("", "", &techniques).unwrap_err(),
        EngineError::MissingName
    );
}

#[test]
fn test_invalid_matrix_reports_technique() {
    let techniques = vec![
        technique("qPCR", 90, 5, 10, 95),
        technique("LAMP", 0, 0, 0, 0),
        technique("RPA", 3, -2, 1, 1),
    ];
    let err = evaluate("exp", "", &techniques).unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidMatrix {
            index: 1,
            technique_name: "LAMP".to_string(),
            defect: MatrixDefect::Empty,
        }
    );
}

#[test]
fn test_invalid_confidence_level_reports_index() {
    let mut techniques = qpcr_vs_rpa();
    techniques[1].confidence_level = 1.0;
    let err = evaluate("exp", "", &techniques).unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidConfidenceLevel {
            index: 1,
            level: 1.0
        }
    );
}

#[test]
fn test_parallel_matches_sequential() {
    let techniques = vec![
        technique("qPCR", 90, 5, 10, 95),
        technique("RPA", 80, 15, 20, 85),
        technique("LAMP", 70, 2, 30, 98),
        technique("ddPCR", 5, 0, 0, 0),
    ];
    let seq = evaluate("exp", "d", &techniques).unwrap();
    let par = evaluate_with("exp", "d", &techniques, EvaluateOptions { parallel: true }).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn test_parallel_reports_lowest_failing_index() {
    let techniques = vec![
        technique("qPCR", 90, 5, 10, 95),
        technique("RPA", 0, 0, 0, 0),
        technique("LAMP", -4, 0, 0, 0),
    ];
    let err = evaluate_with("exp", "", &techniques, EvaluateOptions { parallel: true }).unwrap_err();
    assert!(matches!(err, EngineError::InvalidMatrix { index: 1, .. }));
}

#[test]
fn test_parallel_handles_many_techniques() {
    let techniques = (0..20_000i64)
        .map(|i| technique(&format!("t{i}"), 50 + i % 7, 3 + i % 5, 10 - i % 4, 60 + i % 11))
        .collect::<Vec<_>>();
    let seq = evaluate("bulk", "", &techniques).unwrap();
    let par = evaluate_with("bulk", "", &techniques, EvaluateOptions { parallel: true }).unwrap();
    assert_eq!(par.techniques_results.len(), 20_000);
    assert_eq!(par.techniques_results[19_999].technique_name, "t19999");
    assert_eq!(seq, par);
}

#[test]
fn test_rerun_is_bit_identical() {
    let a = evaluate("exp", "", &qpcr_vs_rpa()).unwrap();
    let b = evaluate("exp", "", &qpcr_vs_rpa()).unwrap();
    let ja = serde_json::to_string(&a).unwrap();
    let jb = serde_json::to_string(&b).unwrap();
    assert_eq!(ja, jb);
    for (x, y) in a.techniques_results.iter().zip(&b.techniques_results) {
        assert_eq!(
            x.metrics.cohen_kappa_ci.upper.to_bits(),
            y.metrics.cohen_kappa_ci.upper.to_bits()
        );
        assert_eq!(
            x.metrics.stats.sensitivity_ci.lower.to_bits(),
            y.metrics.stats.sensitivity_ci.lower.to_bits()
        );
    }
}

#[test]
fn test_result_json_shape() {
    let result = evaluate("exp", "", &qpcr_vs_rpa()).unwrap();
    let value = serde_json::to_value(&result).unwrap();
    let first = &value["techniques_results"][0];
    assert_eq!(first["technique_name"], "qPCR");
    assert_eq!(first["stats"]["sensitivity"], 0.9);
    assert_eq!(first["stats"]["sensitivity_ci"].as_array().unwrap().len(), 2);
    assert_eq!(first["cohen_kappa"], 0.85);
    assert_eq!(first["cohen_kappa_ci"].as_array().unwrap().len(), 2);
    assert_eq!(first["interpretation"], "almost perfect");
    assert_eq!(value["comparison_summary"]["best_accuracy"], "qPCR");
    assert_eq!(value["comparison_summary"]["techniques_count"], 2);
}
