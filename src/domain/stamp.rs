//! StaMP message envelope. Defined by the messaging layer; opaque here.

use crate::domain::store::{DataStore, StoreValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Literal `type` of a transaction carrying a StaMP message.
pub const STAMP_TRANSACTION_TYPE: &str = "StaMP";

/// An untyped StaMP message. Serializes as the JSON object it was read from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StampMessage(pub DataStore);

impl StampMessage {
    /// The message's own `type` key, if it has a string one.
    pub fn message_type(&self) -> Option<&str> {
        self.0.get("type").and_then(StoreValue::as_str)
    }
}

impl From<DataStore> for StampMessage {
    fn from(store: DataStore) -> Self {
        Self(store)
    }
}

/// Capability of being carried as the message of a StaMP transaction.
///
/// Implement it for typed message structs that serialize to a StaMP envelope.
pub trait StampPayload: Serialize + DeserializeOwned {}

impl StampPayload for StampMessage {}
