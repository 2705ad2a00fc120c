//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// A record does not match the shape of its kind (missing required field, wrong type).
    #[error("Invalid {kind}: {message}")]
    Schema { kind: &'static str, message: String },

    /// Strict validation found keys the record kind does not declare.
    #[error("Unknown fields in {kind}: {}", .paths.join(", "))]
    UnknownFields {
        kind: &'static str,
        paths: Vec<String>,
    },

    #[error("Unknown record kind: {0}")]
    UnknownKind(String),

    #[error("Invalid timestamp {value:?}: {message}")]
    Timestamp { value: String, message: String },

    #[error("Transaction type {found:?} is not {expected:?}")]
    TransactionType {
        expected: &'static str,
        found: String,
    },

    #[error("Filter name {placeholder} refers to unknown field {field:?}")]
    FilterField { placeholder: String, field: String },

    #[error("Repository error: {0}")]
    Repo(String),

    #[error("Migration failed: {0}")]
    Migration(String),
}
