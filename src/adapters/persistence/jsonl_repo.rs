//! Implements RecordRepo. Stores each collection as JSON Lines (JSONL).
//! One file per collection: {base_dir}/{collection}.jsonl. Append-only writes.

use crate::domain::DomainError;
use crate::ports::{RawRecord, RecordRepo};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// File-system repository. One JSONL file per collection (one JSON object per line).
pub struct JsonlRepo {
    base_dir: PathBuf,
}

impl JsonlRepo {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    fn collection_path(&self, collection: &str) -> Result<PathBuf, DomainError> {
        if collection.is_empty()
            || collection.contains(['/', '\\'])
            || collection.starts_with('.')
        {
            return Err(DomainError::Repo(format!(
                "invalid collection name {:?}",
                collection
            )));
        }
        Ok(self.base_dir.join(format!("{}.jsonl", collection)))
    }
}

#[async_trait::async_trait]
impl RecordRepo for JsonlRepo {
    /// Reads the whole file. Blank lines are skipped; any other line must be JSON.
    async fn load(&self, collection: &str) -> Result<Vec<RawRecord>, DomainError> {
        let path = self.collection_path(collection)?;
        let text = match fs::read_to_string(&path).await {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "collection not found, loading as empty");
                return Ok(vec![]);
            }
            Err(e) => return Err(DomainError::Repo(e.to_string())),
        };

        let mut records = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let value = serde_json::from_str::<Value>(trimmed).map_err(|e| {
                DomainError::Repo(format!("{}:{}: {}", path.display(), idx + 1, e))
            })?;
            records.push(RawRecord {
                line: idx + 1,
                value,
            });
        }
        Ok(records)
    }

    async fn append(&self, collection: &str, records: &[Value]) -> Result<(), DomainError> {
        if records.is_empty() {
            return Ok(());
        }
        let path = self.collection_path(collection)?;
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        let mut f = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        for record in records {
            let line =
                serde_json::to_string(record).map_err(|e| DomainError::Repo(e.to_string()))?;
            f.write_all(line.as_bytes())
                .await
                .map_err(|e| DomainError::Repo(e.to_string()))?;
            f.write_all(b"\n")
                .await
                .map_err(|e| DomainError::Repo(e.to_string()))?;
        }
        f.flush()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        info!(
            path = %path.display(),
            collection,
            count = records.len(),
            "appended records (JSONL)"
        );
        Ok(())
    }
}
