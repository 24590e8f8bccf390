use serde::{Deserialize, Serialize};

use crate::model::agreement::KappaAgreement;

/// Closed interval `[lower, upper]`, serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
}

impl Interval {
    pub const ZERO: Interval = Interval {
        lower: 0.0,
        upper: 0.0,
    };

    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

impl From<[f64; 2]> for Interval {
    fn from(value: [f64; 2]) -> Self {
        Interval::new(value[0], value[1])
    }
}

impl From<Interval> for [f64; 2] {
    fn from(value: Interval) -> Self {
        [value.lower, value.upper]
    }
}

/// A proportion together with its interval estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub value: f64,
    pub ci: Interval,
}

impl Estimate {
    pub const ZERO: Estimate = Estimate {
        value: 0.0,
        ci: Interval::ZERO,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticStats {
    pub sensitivity: f64,
    pub specificity: f64,
    pub ppv: f64,
    pub npv: f64,
    pub accuracy: f64,
    pub prevalence: f64,

    pub sensitivity_ci: Interval,
    pub specificity_ci: Interval,
    pub ppv_ci: Interval,
    pub npv_ci: Interval,
}

/// Everything the calculator derives from one confusion matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    pub stats: DiagnosticStats,
    pub cohen_kappa: f64,
    pub cohen_kappa_ci: Interval,
    pub interpretation: KappaAgreement,
}
