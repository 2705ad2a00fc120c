//! Rewrite legacy channel maps into the current channel shape.

#![allow(deprecated)]

use crate::domain::DomainError;
use crate::domain::legacy::{ChannelsObject, migrate_channels};
use crate::ports::RecordRepo;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

pub struct MigrationService {
    repo: Arc<dyn RecordRepo>,
}

impl MigrationService {
    pub fn new(repo: Arc<dyn RecordRepo>) -> Self {
        Self { repo }
    }

    /// Convert every `ChannelsObject` record of `source` into `UserChannels`
    /// and append them to `target`. Returns the number of records migrated.
    ///
    /// All records are converted before anything is written, so one invalid
    /// legacy record leaves `target` untouched.
    pub async fn migrate_channels(&self, source: &str, target: &str) -> Result<usize, DomainError> {
        if source == target {
            return Err(DomainError::Migration(
                "source and target collection must differ".into(),
            ));
        }
        let records = self.repo.load(source).await?;
        let mut converted: Vec<Value> = Vec::with_capacity(records.len());
        for record in records {
            let legacy: ChannelsObject = serde_json::from_value(record.value).map_err(|e| {
                DomainError::Migration(format!("{} line {}: {}", source, record.line, e))
            })?;
            let current = migrate_channels(legacy);
            let value = serde_json::to_value(&current)
                .map_err(|e| DomainError::Migration(e.to_string()))?;
            converted.push(value);
        }
        self.repo.append(target, &converted).await?;
        info!(source, target, count = converted.len(), "migrated legacy channels");
        Ok(converted.len())
    }
}
