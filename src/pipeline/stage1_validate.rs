use crate::error::{EngineError, Result};
use crate::model::matrix::TechniqueInput;

pub const MIN_TECHNIQUES: usize = 2;

/// Request-level checks, in order: experiment name, technique count,
/// technique names. Matrices are checked later by the calculator.
pub fn validate_request(experiment_name: &str, techniques: &[TechniqueInput]) -> Result<()> {
    if experiment_name.trim().is_empty() {
        return Err(EngineError::MissingName);
    }
    if techniques.len() < MIN_TECHNIQUES {
        return Err(EngineError::InsufficientTechniques {
            count: techniques.len(),
        });
    }
    if let Some(index) = techniques
        .iter()
        .position(|t| t.technique_name.trim().is_empty())
    {
        return Err(EngineError::MissingTechniqueName { index });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_validate.rs"]
mod tests;
