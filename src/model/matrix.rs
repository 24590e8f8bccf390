use serde::{Deserialize, Serialize};

use crate::error::MatrixDefect;
use crate::model::thresholds::DEFAULT_CONFIDENCE_LEVEL;

/// 2x2 table of a technique's calls against the reference result.
///
/// Counts are signed so that a negative value in a request reaches the
/// calculator and is reported against the technique that carried it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_positive: i64,
    pub false_positive: i64,
    pub false_negative: i64,
    pub true_negative: i64,
}

/// Validated view of a [`ConfusionMatrix`]: every count non-negative and the
/// total strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub tp: u64,
    pub fp: u64,
    pub fn_: u64,
    pub tn: u64,
}

impl ConfusionMatrix {
    pub fn new(true_positive: i64, false_positive: i64, false_negative: i64, true_negative: i64) -> Self {
        Self {
            true_positive,
            false_positive,
            false_negative,
            true_negative,
        }
    }

    pub fn validate(&self) -> Result<Counts, MatrixDefect> {
        let fields = [
            ("true_positive", self.true_positive),
            ("false_positive", self.false_positive),
            ("false_negative", self.false_negative),
            ("true_negative", self.true_negative),
        ];
        for (name, value) in fields {
            if value < 0 {
                return Err(MatrixDefect::NegativeCount(name));
            }
        }

        let counts = Counts {
            tp: self.true_positive as u64,
            fp: self.false_positive as u64,
            fn_: self.false_negative as u64,
            tn: self.true_negative as u64,
        };
        if counts.total() == 0 {
            return Err(MatrixDefect::Empty);
        }
        Ok(counts)
    }
}

impl Counts {
    pub fn total(&self) -> u128 {
        self.tp as u128 + self.fp as u128 + self.fn_ as u128 + self.tn as u128
    }

    /// Reference-positive samples (TP + FN).
    pub fn condition_positive(&self) -> u128 {
        self.tp as u128 + self.fn_ as u128
    }

    /// Reference-negative samples (FP + TN).
    pub fn condition_negative(&self) -> u128 {
        self.fp as u128 + self.tn as u128
    }

    /// Samples called positive by the technique (TP + FP).
    pub fn predicted_positive(&self) -> u128 {
        self.tp as u128 + self.fp as u128
    }

    /// Samples called negative by the technique (FN + TN).
    pub fn predicted_negative(&self) -> u128 {
        self.fn_ as u128 + self.tn as u128
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechniqueInput {
    pub technique_name: String,
    pub matrix: ConfusionMatrix,
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,
}

impl TechniqueInput {
    pub fn new(technique_name: impl Into<String>, matrix: ConfusionMatrix, confidence_level: f64) -> Self {
        Self {
            technique_name: technique_name.into(),
            matrix,
            confidence_level,
        }
    }
}

fn default_confidence_level() -> f64 {
    DEFAULT_CONFIDENCE_LEVEL
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/matrix.rs"]
mod tests;
