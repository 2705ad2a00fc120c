//! Validate every record of a collection against a record kind.

use crate::domain::{DomainError, RecordKind, Strictness};
use crate::ports::RecordRepo;
use std::sync::Arc;
use tracing::{info, warn};

/// A record that failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    pub line: usize,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub checked: usize,
    pub failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct ValidationService {
    repo: Arc<dyn RecordRepo>,
    strictness: Strictness,
}

impl ValidationService {
    pub fn new(repo: Arc<dyn RecordRepo>, strictness: Strictness) -> Self {
        Self { repo, strictness }
    }

    /// Validate all records of `collection`. Invalid records are collected in
    /// the report; only repository failures return `Err`.
    pub async fn validate_collection(
        &self,
        collection: &str,
        kind: RecordKind,
    ) -> Result<ValidationReport, DomainError> {
        if kind.is_deprecated() {
            warn!(%kind, "validating against a deprecated record kind");
        }
        let records = self.repo.load(collection).await?;
        let mut report = ValidationReport {
            checked: records.len(),
            failures: Vec::new(),
        };
        for record in records {
            if let Err(e) = kind.validate(&record.value, self.strictness) {
                warn!(collection, line = record.line, error = %e, "invalid record");
                report.failures.push(ValidationFailure {
                    line: record.line,
                    error: e.to_string(),
                });
            }
        }
        info!(
            collection,
            %kind,
            checked = report.checked,
            failed = report.failures.len(),
            "validated collection"
        );
        Ok(report)
    }
}
