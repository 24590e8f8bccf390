use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::store::{ExperimentStore, StoreError, StoreResult, StoredExperiment, newest_first};

/// One JSON record per line, appended in insertion order. A missing file is
/// an empty history.
#[derive(Debug, Clone)]
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> StoreResult<Vec<StoredExperiment>> {
        let file = match fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut records = Vec::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line).map_err(|source| StoreError::Corrupt {
                line: idx + 1,
                source,
            })?;
            records.push(record);
        }
        Ok(records)
    }

    fn write_all(&self, records: &[StoredExperiment]) -> StoreResult<()> {
        let mut buf = String::new();
        for record in records {
            buf.push_str(&serde_json::to_string(record)?);
            buf.push('\n');
        }
        let tmp = self.path.with_extension("jsonl.tmp");
        fs::write(&tmp, buf)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ExperimentStore for JsonlStore {
    fn insert(&self, record: StoredExperiment) -> StoreResult<StoredExperiment> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let line = serde_json::to_string(&record)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        debug!(id = %record.id, path = %self.path.display(), "experiment stored");
        Ok(record)
    }

    fn list(&self) -> StoreResult<Vec<StoredExperiment>> {
        Ok(newest_first(self.read_all()?))
    }

    fn get(&self, id: &str) -> StoreResult<StoredExperiment> {
        self.read_all()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        let mut records = self.read_all()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        self.write_all(&records)?;
        debug!(id = %id, "experiment deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/store/jsonl.rs"]
mod tests;
