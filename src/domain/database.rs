//! Persisted entities: users, conversations, transactions and their channels,
//! stores and markup.
//!
//! Keys are camelCase on the wire. `first_transaction`/`last_transaction` are
//! denormalized copies of the referenced transaction, not links to it.

use crate::domain::DomainError;
use crate::domain::comprehend::{Entity, KeyPhrase, Language, Sentiment};
use crate::domain::record::RecordFields;
use crate::domain::stamp::StampMessage;
use crate::domain::store::{ChannelMarkup, ChannelStore, ConversationStore, TransactionModel, UserStore};
use crate::domain::time::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A bot user. Keyed by (`botId`, `userId`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEntry {
    pub bot_id: String,
    pub user_id: String,
    pub creation: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<UserChannels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<UserStore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup: Option<UserMarkup>,

    pub last_transaction: TransactionEntry,
    pub last_transaction_time: String,
}

impl UserEntry {
    /// Continuation cursor a user range query returns after this entry.
    pub fn evaluated_keys(&self) -> EvaluatedUserKeys {
        EvaluatedUserKeys {
            user_id: self.user_id.clone(),
            bot_id: self.bot_id.clone(),
            last_transaction_time: self.last_transaction_time.clone(),
        }
    }

    pub fn last_transaction_at(&self) -> Result<DateTime<Utc>, DomainError> {
        parse_timestamp(&self.last_transaction_time)
    }

    pub fn channel(&self, name: &str) -> Option<&UserChannel> {
        self.channels.as_ref()?.get(name)
    }
}

impl RecordFields for UserEntry {
    const FIELDS: &'static [&'static str] = &[
        "botId",
        "userId",
        "creation",
        "channels",
        "route",
        "store",
        "markup",
        "lastTransaction",
        "lastTransactionTime",
    ];
}

/// A conversation between a bot user and the bot. Keyed by (`botUserId`, `conversationId`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationEntry {
    pub bot_user_id: String,
    pub conversation_id: String,
    pub creation: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<ConversationStore>,

    /// RFC 3339 instant after which the conversation is considered over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,
    /// Lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    pub first_transaction: TransactionEntry,
    pub first_transaction_time: String,
    pub last_transaction: TransactionEntry,
    pub last_transaction_time: String,
}

impl ConversationEntry {
    pub fn expires_at(&self) -> Result<Option<DateTime<Utc>>, DomainError> {
        self.expiration.as_deref().map(parse_timestamp).transpose()
    }

    /// True if `expiration` is set and not after `now`. Conversations without
    /// an expiration never expire.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> Result<bool, DomainError> {
        Ok(self.expires_at()?.is_some_and(|at| at <= now))
    }
}

impl RecordFields for ConversationEntry {
    const FIELDS: &'static [&'static str] = &[
        "botUserId",
        "conversationId",
        "creation",
        "store",
        "expiration",
        "lifetime",
        "route",
        "firstTransaction",
        "firstTransactionTime",
        "lastTransaction",
        "lastTransactionTime",
    ];
}

/// A single message exchange. Keyed by (`botUserId`, `transactionId`, `conversationId`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEntry {
    pub bot_user_id: String,
    pub transaction_id: String,
    pub conversation_id: String,
    pub timestamp: String,

    #[serde(rename = "type")]
    pub kind: String,
    pub message: StampMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_message: Option<StampMessage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<TransactionChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    /// Snapshot of the conversation store at the time of the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_store: Option<ConversationStore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup: Option<TransactionMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<TransactionModel>,
}

impl TransactionEntry {
    /// Continuation cursor a transaction range query returns after this entry.
    pub fn evaluated_keys(&self) -> EvaluatedTransactionKeys {
        EvaluatedTransactionKeys {
            bot_user_id: self.bot_user_id.clone(),
            transaction_id: self.transaction_id.clone(),
            timestamp: self.timestamp.clone(),
        }
    }
}

impl RecordFields for TransactionEntry {
    const FIELDS: &'static [&'static str] = &[
        "botUserId",
        "transactionId",
        "conversationId",
        "timestamp",
        "type",
        "message",
        "metaMessage",
        "channel",
        "route",
        "conversationStore",
        "markup",
        "model",
    ];
}

/// Channels of a user, keyed by channel name.
pub type UserChannels = BTreeMap<String, UserChannel>;

/// The external messaging service a user is reachable on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserChannel {
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<ChannelStore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup: Option<ChannelMarkup>,
}

/// Channel a transaction came in on or went out through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionChannel {
    pub id: String,
    pub service: String,
}

// The source contract declares `language` twice; it is carried once here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMarkup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_pic_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_count: Option<u64>,
}

/// Text-analytics results attached to a transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMarkup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<Language>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_phrases: Option<Vec<KeyPhrase>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

/// Pagination cursor for user queries. The `lastTransactionTIme` key is spelled
/// as the storage layer writes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatedUserKeys {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "botId")]
    pub bot_id: String,
    #[serde(rename = "lastTransactionTIme")]
    pub last_transaction_time: String,
}

/// Pagination cursor for transaction queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatedTransactionKeys {
    pub bot_user_id: String,
    pub transaction_id: String,
    pub timestamp: String,
}
