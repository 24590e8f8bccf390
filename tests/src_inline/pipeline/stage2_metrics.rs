use super::*;
use crate::error::MatrixDefect;
use crate::model::metrics::Interval;

fn m(tp: i64, fp: i64, fn_: i64, tn: i64) -> ConfusionMatrix {
    ConfusionMatrix::new(tp, fp, fn_, tn)
}

#[test]
fn test_point_estimates() {
    let r = compute(&m(90, 5, 10, 95), 0.95).unwrap();
    assert_eq!(r.stats.sensitivity, 0.9);
    assert_eq!(r.stats.specificity, 0.95);
    assert!((r.stats.ppv - 90.0 / 95.0).abs() < 1e-15);
    assert!((r.stats.npv - 95.0 / 105.0).abs() < 1e-15);
    assert_eq!(r.stats.accuracy, 0.925);
    assert_eq!(r.stats.prevalence, 0.5);
    assert_eq!(r.cohen_kappa, 0.85);
    assert_eq!(r.interpretation, KappaAgreement::AlmostPerfect);
}

#[test]
fn test_no_reference_negatives() {
    let r = compute(&m(5, 0, 0, 0), 0.95).unwrap();
    assert_eq!(r.stats.sensitivity, 1.0);
    assert_eq!(r.stats.specificity, 0.0);
    assert_eq!(r.stats.specificity_ci, Interval::ZERO);
    assert_eq!(r.stats.npv, 0.0);
    assert_eq!(r.stats.npv_ci, Interval::ZERO);
    assert_eq!(r.stats.accuracy, 1.0);
    assert_eq!(r.stats.prevalence, 1.0);
    assert_eq!(r.cohen_kappa, 0.0);
    assert_eq!(r.cohen_kappa_ci, Interval::ZERO);
    assert_eq!(r.interpretation, KappaAgreement::Slight);
}

#[test]
fn test_all_zero_matrix_is_rejected() {
    let err = compute(&m(0, 0, 0, 0), 0.95).unwrap_err();
    assert_eq!(err, CalculatorError::InvalidMatrix(MatrixDefect::Empty));
}

#[test]
fn test_negative_count_is_rejected() {
    let err = compute(&m(-1, 5, 10, 90), 0.95).unwrap_err();
    assert_eq!(
        err,
        CalculatorError::InvalidMatrix(MatrixDefect::NegativeCount("true_positive"))
    );
    // no technique context at this level
    assert_eq!(err.to_string(), "invalid confusion matrix: true_positive is negative");
}

#[test]
fn test_confidence_level_outside_unit_interval() {
    for level in [0.0, 1.0, 1.5, -0.1] {
        let err = compute(&m(1, 2, 3, 4), level).unwrap_err();
        assert_eq!(err, CalculatorError::InvalidConfidenceLevel(level));
    }
    assert!(compute(&m(1, 2, 3, 4), 0.8).is_ok());
}

#[test]
fn test_ranges_and_containment_on_small_matrices() {
    for tp in 0..5 {
        for fp in 0..5 {
            for fn_ in 0..5 {
                for tn in 0..5 {
                    if tp + fp + fn_ + tn == 0 {
                        continue;
                    }
                    let r = compute(&m(tp, fp, fn_, tn), 0.95).unwrap();
                    let s = &r.stats;
                    for (v, ci) in [
                        (s.sensitivity, s.sensitivity_ci),
                        (s.specificity, s.specificity_ci),
                        (s.ppv, s.ppv_ci),
                        (s.npv, s.npv_ci),
                    ] {
                        assert!((0.0..=1.0).contains(&v));
                        assert!(ci.lower >= 0.0 && ci.upper <= 1.0);
                        assert!(ci.contains(v), "{v} outside {ci:?} for {tp},{fp},{fn_},{tn}");
                    }
                    assert!((0.0..=1.0).contains(&s.accuracy));
                    assert!((0.0..=1.0).contains(&s.prevalence));
                    assert!((-1.0..=1.0).contains(&r.cohen_kappa));
                    assert!(r.cohen_kappa_ci.lower >= -1.0 && r.cohen_kappa_ci.upper <= 1.0);
                    assert!(r.cohen_kappa_ci.contains(r.cohen_kappa));
                    if fp == 0 && fn_ == 0 && tp > 0 && tn > 0 {
                        assert_eq!(r.cohen_kappa, 1.0);
                    }
                }
            }
        }
    }
}

#[test]
fn test_confidence_level_changes_only_intervals() {
    let a = compute(&m(40, 6, 9, 45), 0.90).unwrap();
    let b = compute(&m(40, 6, 9, 45), 0.99).unwrap();
    assert_eq!(a.stats.sensitivity, b.stats.sensitivity);
    assert_eq!(a.cohen_kappa, b.cohen_kappa);
    assert!(b.stats.sensitivity_ci.width() > a.stats.sensitivity_ci.width());
    assert!(b.cohen_kappa_ci.width() > a.cohen_kappa_ci.width());
}

#[test]
fn test_compute_determinism_bits() {
    let a = compute(&m(17, 3, 5, 29), 0.93).unwrap();
    let b = compute(&m(17, 3, 5, 29), 0.93).unwrap();
    assert_eq!(a.stats.ppv.to_bits(), b.stats.ppv.to_bits());
    assert_eq!(a.stats.npv_ci.upper.to_bits(), b.stats.npv_ci.upper.to_bits());
    assert_eq!(a.cohen_kappa_ci.lower.to_bits(), b.cohen_kappa_ci.lower.to_bits());
}
