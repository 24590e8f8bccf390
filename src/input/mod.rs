use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::matrix::TechniqueInput;

/// Experiment submission as read from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRequest {
    pub experiment_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub techniques: Vec<TechniqueInput>,
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed experiment request: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn load_request(path: &Path) -> Result<ExperimentRequest, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_request(&text)
}

pub fn parse_request(text: &str) -> Result<ExperimentRequest, InputError> {
    Ok(serde_json::from_str(text)?)
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
