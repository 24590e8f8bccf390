//! Experiment history.
//!
//! The engine never touches storage; the CLI hands accepted results to an
//! [`ExperimentStore`], which owns id and timestamp assignment.

pub mod jsonl;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::model::summary::ExperimentResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredExperiment {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: ExperimentResult,
}

impl StoredExperiment {
    pub fn new(result: ExperimentResult) -> Self {
        Self::with_identity(result, Uuid::new_v4().to_string(), Utc::now())
    }

    pub fn with_identity(result: ExperimentResult, id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at,
            result,
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("history store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt history record at line {line}: {source}")]
    Corrupt {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot serialize experiment: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("experiment not found: {id}")]
    NotFound { id: String },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

pub trait ExperimentStore {
    /// Persist a new record and return it.
    fn insert(&self, record: StoredExperiment) -> StoreResult<StoredExperiment>;

    /// All records, newest first. Records with the same timestamp keep
    /// reverse insertion order.
    fn list(&self) -> StoreResult<Vec<StoredExperiment>>;

    fn get(&self, id: &str) -> StoreResult<StoredExperiment>;

    fn delete(&self, id: &str) -> StoreResult<()>;
}

pub fn newest_first(mut records: Vec<StoredExperiment>) -> Vec<StoredExperiment> {
    records.reverse();
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    records
}
