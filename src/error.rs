use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixDefect {
    #[error("{0} is negative")]
    NegativeCount(&'static str),

    #[error("all four counts are zero")]
    Empty,
}

/// Failures of the single-matrix calculator. They carry no technique
/// context; the engine adds it when a technique fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("invalid confusion matrix: {0}")]
    InvalidMatrix(#[from] MatrixDefect),

    #[error("confidence level {0} must lie strictly between 0 and 1")]
    InvalidConfidenceLevel(f64),
}

/// Validation failures of the comparison engine. Arithmetic degeneracies are
/// not errors; they resolve to documented fallback values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("experiment name is required")]
    MissingName,

    #[error("at least 2 techniques are required, got {count}")]
    InsufficientTechniques { count: usize },

    #[error("technique #{index} has no name")]
    MissingTechniqueName { index: usize },

    #[error("invalid confusion matrix for technique #{index} ({technique_name}): {defect}")]
    InvalidMatrix {
        index: usize,
        technique_name: String,
        defect: MatrixDefect,
    },

    #[error("confidence level {level} for technique #{index} must lie strictly between 0 and 1")]
    InvalidConfidenceLevel { index: usize, level: f64 },
}

impl EngineError {
    pub fn at_technique(err: CalculatorError, index: usize, technique_name: &str) -> Self {
        match err {
            CalculatorError::InvalidMatrix(defect) => EngineError::InvalidMatrix {
                index,
                technique_name: technique_name.to_string(),
                defect,
            },
            CalculatorError::InvalidConfidenceLevel(level) => {
                EngineError::InvalidConfidenceLevel { index, level }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
