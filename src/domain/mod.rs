//! Core domain layer. No external I/O dependencies.
//!
//! Record shapes of the Zwerm contract and the rules that apply to them.

pub mod api;
pub mod comprehend;
pub mod database;
pub mod errors;
pub mod legacy;
pub mod record;
pub mod stamp;
pub mod stamp_transaction;
pub mod store;
pub mod time;

#[cfg(test)]
pub(crate) mod fixtures;

pub use api::{BotInfo, DynamoFilter, DynamoResult, PartialUser, SortOrder, Team, TeamPivot, User};
pub use database::{
    ConversationEntry, EvaluatedTransactionKeys, EvaluatedUserKeys, TransactionChannel,
    TransactionEntry, TransactionMarkup, UserChannel, UserChannels, UserEntry, UserMarkup,
};
pub use errors::DomainError;
pub use record::{RecordFields, RecordKind, Strictness};
pub use stamp::{StampMessage, StampPayload};
pub use stamp_transaction::StampTransaction;
pub use store::{DataStore, StoreValue};
