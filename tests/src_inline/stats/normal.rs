use super::*;

#[test]
fn test_presets_use_rounded_values() {
    assert_eq!(z_critical(0.90), Some(1.645));
    assert_eq!(z_critical(0.95), Some(1.96));
    assert_eq!(z_critical(0.99), Some(2.576));
}

#[test]
fn test_arbitrary_levels_use_quantile() {
    let cases = [
        (0.80, 1.281_551_565_544_600_8),
        (0.50, 0.674_489_750_196_081_7),
        (0.999, 3.290_526_731_491_925_5),
    ];
    for (level, expected) in cases {
        let z = z_critical(level).unwrap();
        assert!((z - expected).abs() < 1e-6, "level {level}: {z} vs {expected}");
    }
}

#[test]
fn test_inverse_cdf_symmetry_and_center() {
    assert!(inverse_cdf(0.5).unwrap().abs() < 1e-12);
    for p in [0.001, 0.01, 0.1, 0.3] {
        let lo = inverse_cdf(p).unwrap();
        let hi = inverse_cdf(1.0 - p).unwrap();
        assert!((lo + hi).abs() < 1e-8, "p={p}");
        assert!(lo < 0.0);
    }
}

#[test]
fn test_rejects_levels_outside_open_unit_interval() {
    assert_eq!(z_critical(0.0), None);
    assert_eq!(z_critical(1.0), None);
    assert_eq!(z_critical(-0.5), None);
    assert_eq!(z_critical(f64::NAN), None);
    assert_eq!(inverse_cdf(1.0), None);
}
