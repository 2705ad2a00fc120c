//! Record kinds and structural validation of raw JSON records against them.

#![allow(deprecated)]

use crate::domain::DomainError;
use crate::domain::api::{BotInfo, PartialUser, Team, User};
use crate::domain::database::{
    ConversationEntry, EvaluatedTransactionKeys, EvaluatedUserKeys, TransactionEntry, UserChannels,
    UserEntry,
};
use crate::domain::legacy::ChannelsObject;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Wire field names of a record, as they appear as JSON keys.
pub trait RecordFields {
    const FIELDS: &'static [&'static str];

    fn has_field(name: &str) -> bool {
        Self::FIELDS.contains(&name)
    }
}

/// Whether keys a record kind does not declare are an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    #[default]
    Lenient,
    Strict,
}

/// Every top-level record this crate can validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    UserEntry,
    ConversationEntry,
    TransactionEntry,
    UserChannels,
    ChannelsObject,
    EvaluatedUserKeys,
    EvaluatedTransactionKeys,
    Team,
    User,
    PartialUser,
    BotInfo,
}

impl RecordKind {
    pub const ALL: [RecordKind; 11] = [
        RecordKind::UserEntry,
        RecordKind::ConversationEntry,
        RecordKind::TransactionEntry,
        RecordKind::UserChannels,
        RecordKind::ChannelsObject,
        RecordKind::EvaluatedUserKeys,
        RecordKind::EvaluatedTransactionKeys,
        RecordKind::Team,
        RecordKind::User,
        RecordKind::PartialUser,
        RecordKind::BotInfo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RecordKind::UserEntry => "user-entry",
            RecordKind::ConversationEntry => "conversation-entry",
            RecordKind::TransactionEntry => "transaction-entry",
            RecordKind::UserChannels => "user-channels",
            RecordKind::ChannelsObject => "channels-object",
            RecordKind::EvaluatedUserKeys => "evaluated-user-keys",
            RecordKind::EvaluatedTransactionKeys => "evaluated-transaction-keys",
            RecordKind::Team => "team",
            RecordKind::User => "user",
            RecordKind::PartialUser => "partial-user",
            RecordKind::BotInfo => "bot-info",
        }
    }

    /// True for shapes kept only for backward compatibility.
    pub fn is_deprecated(self) -> bool {
        matches!(self, RecordKind::ChannelsObject)
    }

    /// Validate a raw JSON record against this kind.
    ///
    /// Required fields must be present with the right type; optional fields may
    /// be omitted. With [`Strictness::Strict`], keys the kind does not declare
    /// are reported as [`DomainError::UnknownFields`].
    pub fn validate(self, value: &Value, strictness: Strictness) -> Result<(), DomainError> {
        match self {
            RecordKind::UserEntry => check::<UserEntry>(self, value, strictness),
            RecordKind::ConversationEntry => check::<ConversationEntry>(self, value, strictness),
            RecordKind::TransactionEntry => check::<TransactionEntry>(self, value, strictness),
            RecordKind::UserChannels => check::<UserChannels>(self, value, strictness),
            RecordKind::ChannelsObject => check::<ChannelsObject>(self, value, strictness),
            RecordKind::EvaluatedUserKeys => check::<EvaluatedUserKeys>(self, value, strictness),
            RecordKind::EvaluatedTransactionKeys => {
                check::<EvaluatedTransactionKeys>(self, value, strictness)
            }
            RecordKind::Team => check::<Team>(self, value, strictness),
            RecordKind::User => check::<User>(self, value, strictness),
            RecordKind::PartialUser => check::<PartialUser>(self, value, strictness),
            RecordKind::BotInfo => check::<BotInfo>(self, value, strictness),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RecordKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| DomainError::UnknownKind(s.to_string()))
    }
}

/// Decode `value` as `T`; in strict mode, re-encode it and diff the key sets.
fn check<T>(kind: RecordKind, value: &Value, strictness: Strictness) -> Result<(), DomainError>
where
    T: Serialize + DeserializeOwned,
{
    let record: T = serde_json::from_value(value.clone()).map_err(|e| DomainError::Schema {
        kind: kind.name(),
        message: e.to_string(),
    })?;
    if strictness == Strictness::Lenient {
        return Ok(());
    }
    let reencoded = serde_json::to_value(&record).map_err(|e| DomainError::Schema {
        kind: kind.name(),
        message: e.to_string(),
    })?;
    let mut paths = Vec::new();
    collect_unknown_fields(value, &reencoded, "$", &mut paths);
    if paths.is_empty() {
        Ok(())
    } else {
        Err(DomainError::UnknownFields {
            kind: kind.name(),
            paths,
        })
    }
}

/// Push the JSON path of every key in `original` that the decoded record dropped.
/// Keys holding `null` are treated as absent.
fn collect_unknown_fields(original: &Value, decoded: &Value, path: &str, out: &mut Vec<String>) {
    match (original, decoded) {
        (Value::Object(orig), Value::Object(dec)) => {
            for (key, value) in orig {
                let child = format!("{}.{}", path, key);
                match dec.get(key) {
                    Some(d) => collect_unknown_fields(value, d, &child, out),
                    None if value.is_null() => {}
                    None => out.push(child),
                }
            }
        }
        (Value::Array(orig), Value::Array(dec)) => {
            for (i, (o, d)) in orig.iter().zip(dec).enumerate() {
                collect_unknown_fields(o, d, &format!("{}[{}]", path, i), out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;
    use serde_json::json;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.name().parse::<RecordKind>().unwrap(), kind);
        }
        assert!(matches!(
            "conversation".parse::<RecordKind>(),
            Err(DomainError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_fixtures_validate_strictly() {
        let cases = [
            (RecordKind::UserEntry, fixtures::user_entry()),
            (RecordKind::ConversationEntry, fixtures::conversation_entry()),
            (RecordKind::TransactionEntry, fixtures::transaction_entry()),
            (RecordKind::UserChannels, fixtures::user_entry()["channels"].clone()),
            (RecordKind::ChannelsObject, fixtures::legacy_channels()),
            (RecordKind::Team, fixtures::team()),
            (RecordKind::User, fixtures::user()),
            (RecordKind::PartialUser, fixtures::user()),
            (RecordKind::BotInfo, fixtures::bot_info()),
            (RecordKind::EvaluatedUserKeys, fixtures::evaluated_user_keys()),
            (RecordKind::EvaluatedTransactionKeys, fixtures::evaluated_transaction_keys()),
            (RecordKind::ConversationEntry, fixtures::minimal_conversation()),
        ];
        for (kind, value) in cases {
            kind.validate(&value, Strictness::Strict)
                .unwrap_or_else(|e| panic!("{kind}: {e}"));
        }
    }

    #[test]
    fn test_missing_required_field() {
        let mut raw = fixtures::bot_info();
        raw.as_object_mut().unwrap().remove("canonical");
        let err = RecordKind::BotInfo
            .validate(&raw, Strictness::Lenient)
            .unwrap_err();
        assert!(matches!(err, DomainError::Schema { kind: "bot-info", .. }));
        assert!(err.to_string().contains("canonical"));
    }

    #[test]
    fn test_unknown_fields_only_fail_strict() {
        let mut raw = fixtures::transaction_entry();
        raw["extra"] = json!(1);
        raw["markup"]["sentiment"]["Confidence"] = json!("high");

        assert!(RecordKind::TransactionEntry
            .validate(&raw, Strictness::Lenient)
            .is_ok());

        let err = RecordKind::TransactionEntry
            .validate(&raw, Strictness::Strict)
            .unwrap_err();
        match err {
            DomainError::UnknownFields { paths, .. } => {
                assert_eq!(
                    paths,
                    vec![
                        "$.extra".to_string(),
                        "$.markup.sentiment.Confidence".to_string()
                    ]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_null_optional_is_not_unknown() {
        let mut raw = fixtures::minimal_transaction();
        raw["route"] = Value::Null;
        assert!(RecordKind::TransactionEntry
            .validate(&raw, Strictness::Strict)
            .is_ok());
    }

    #[test]
    fn test_unknown_field_inside_array() {
        let mut raw = fixtures::user();
        raw["teams"][0]["color"] = json!("red");
        let err = RecordKind::User.validate(&raw, Strictness::Strict).unwrap_err();
        assert!(err.to_string().contains("$.teams[0].color"));
    }

    #[test]
    fn test_store_fields_never_report_unknown_keys() {
        let mut raw = fixtures::conversation_entry();
        raw["store"] = json!({ "anything": [1, { "goes": null }], "x": 1.5 });
        assert!(RecordKind::ConversationEntry
            .validate(&raw, Strictness::Strict)
            .is_ok());
    }

    /// Fixture and required wire keys for every kind with required fields.
    fn required_keys() -> Vec<(RecordKind, Value, Vec<&'static str>)> {
        vec![
            (
                RecordKind::UserEntry,
                fixtures::user_entry(),
                vec!["botId", "userId", "creation", "lastTransaction", "lastTransactionTime"],
            ),
            (
                RecordKind::ConversationEntry,
                fixtures::conversation_entry(),
                vec![
                    "botUserId",
                    "conversationId",
                    "creation",
                    "firstTransaction",
                    "firstTransactionTime",
                    "lastTransaction",
                    "lastTransactionTime",
                ],
            ),
            (
                RecordKind::TransactionEntry,
                fixtures::transaction_entry(),
                vec!["botUserId", "transactionId", "conversationId", "timestamp", "type", "message"],
            ),
            (RecordKind::Team, fixtures::team(), Team::FIELDS.to_vec()),
            (RecordKind::User, fixtures::user(), User::FIELDS.to_vec()),
            (RecordKind::BotInfo, fixtures::bot_info(), BotInfo::FIELDS.to_vec()),
            (
                RecordKind::EvaluatedUserKeys,
                fixtures::evaluated_user_keys(),
                vec!["userId", "botId", "lastTransactionTIme"],
            ),
            (
                RecordKind::EvaluatedTransactionKeys,
                fixtures::evaluated_transaction_keys(),
                vec!["botUserId", "transactionId", "timestamp"],
            ),
        ]
    }

    #[test]
    fn test_every_required_key_is_enforced() {
        for (kind, fixture, required) in required_keys() {
            for key in required {
                let mut raw = fixture.clone();
                assert!(
                    raw.as_object_mut().unwrap().remove(key).is_some(),
                    "{kind}: fixture lacks {key}"
                );
                match kind.validate(&raw, Strictness::Lenient) {
                    Err(DomainError::Schema { message, .. }) => {
                        assert!(message.contains(key), "{kind}/{key}: {message}")
                    }
                    other => panic!("{kind} accepted without {key}: {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_all_optional_keys_may_be_omitted_together() {
        for (kind, fixture, required) in required_keys() {
            let mut raw = fixture.clone();
            raw.as_object_mut()
                .unwrap()
                .retain(|key, _| required.contains(&key.as_str()));
            kind.validate(&raw, Strictness::Strict)
                .unwrap_or_else(|e| panic!("{kind}: {e}"));
        }
    }

    #[test]
    fn test_minimal_conversation_has_no_optional_fields() {
        let conv: ConversationEntry =
            serde_json::from_value(fixtures::minimal_conversation()).unwrap();
        assert!(conv.store.is_none());
        assert!(conv.expiration.is_none());
        assert!(conv.lifetime.is_none());
        assert!(conv.route.is_none());
        assert_eq!(serde_json::to_value(&conv).unwrap(), fixtures::minimal_conversation());
    }

    #[test]
    fn test_has_field() {
        assert!(UserEntry::has_field("lastTransaction"));
        assert!(!UserEntry::has_field("last_transaction"));
        assert!(BotInfo::has_field("botId"));
    }
}
