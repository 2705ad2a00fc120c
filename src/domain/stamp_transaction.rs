//! Transactions whose `type` is the StaMP literal, with the message decoded
//! into a concrete payload type.

use crate::domain::DomainError;
use crate::domain::database::TransactionEntry;
use crate::domain::stamp::{STAMP_TRANSACTION_TYPE, StampMessage, StampPayload};
use serde::{Deserialize, Serialize};

/// The only accepted value of a StaMP transaction's `type` key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StampKind {
    #[default]
    #[serde(rename = "StaMP")]
    Stamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound = "M: StampPayload")]
pub struct StampTransaction<M> {
    pub bot_user_id: String,
    pub conversation_id: String,
    pub transaction_id: String,
    #[serde(rename = "type")]
    pub kind: StampKind,
    pub timestamp: String,
    pub message: M,
}

impl<M: StampPayload> StampTransaction<M> {
    pub fn new(
        bot_user_id: impl Into<String>,
        conversation_id: impl Into<String>,
        transaction_id: impl Into<String>,
        timestamp: impl Into<String>,
        message: M,
    ) -> Self {
        Self {
            bot_user_id: bot_user_id.into(),
            conversation_id: conversation_id.into(),
            transaction_id: transaction_id.into(),
            kind: StampKind::Stamp,
            timestamp: timestamp.into(),
            message,
        }
    }

    /// Re-encode as an untyped transaction entry. Optional entry fields stay unset.
    pub fn into_entry(self) -> Result<TransactionEntry, DomainError> {
        let message = serde_json::to_value(&self.message)
            .and_then(serde_json::from_value::<StampMessage>)
            .map_err(|e| DomainError::Schema {
                kind: "stamp-message",
                message: e.to_string(),
            })?;
        Ok(TransactionEntry {
            bot_user_id: self.bot_user_id,
            transaction_id: self.transaction_id,
            conversation_id: self.conversation_id,
            timestamp: self.timestamp,
            kind: STAMP_TRANSACTION_TYPE.to_string(),
            message,
            meta_message: None,
            channel: None,
            route: None,
            conversation_store: None,
            markup: None,
            model: None,
        })
    }
}

impl<M: StampPayload> TryFrom<TransactionEntry> for StampTransaction<M> {
    type Error = DomainError;

    /// Fails if the entry is not a StaMP transaction or its message does not
    /// decode as `M`.
    fn try_from(entry: TransactionEntry) -> Result<Self, Self::Error> {
        if entry.kind != STAMP_TRANSACTION_TYPE {
            return Err(DomainError::TransactionType {
                expected: STAMP_TRANSACTION_TYPE,
                found: entry.kind,
            });
        }
        let message = serde_json::to_value(&entry.message)
            .and_then(serde_json::from_value::<M>)
            .map_err(|e| DomainError::Schema {
                kind: "stamp-message",
                message: e.to_string(),
            })?;
        Ok(Self::new(
            entry.bot_user_id,
            entry.conversation_id,
            entry.transaction_id,
            entry.timestamp,
            message,
        ))
    }
}
