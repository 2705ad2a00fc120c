//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::DomainError;
use serde_json::Value;

/// A raw record as read from a collection, with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub line: usize,
    pub value: Value,
}

/// Repository port. Named collections of raw JSON records.
#[async_trait::async_trait]
pub trait RecordRepo: Send + Sync {
    /// Load every record of a collection in file order. A collection that
    /// does not exist yet loads as empty.
    async fn load(&self, collection: &str) -> Result<Vec<RawRecord>, DomainError>;

    /// Append records to a collection, creating it if needed.
    async fn append(&self, collection: &str, records: &[Value]) -> Result<(), DomainError>;
}
