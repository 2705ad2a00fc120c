//! Timestamp parsing. Records keep timestamps as the original strings.

use crate::domain::DomainError;
use chrono::{DateTime, Utc};

/// Parse an RFC 3339 timestamp (e.g. `2024-01-01T00:00:00Z`) into UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DomainError::Timestamp {
            value: value.to_string(),
            message: e.to_string(),
        })
}
