//! Legacy channel shapes kept for consumers that still write them, plus the
//! mapping onto [`UserChannel`]/[`UserChannels`].
//!
//! Mapping: `service`, `userId` and `store` carry over unchanged; `label` and
//! every extra key move into the channel's `markup`.

#![allow(deprecated)]

use crate::domain::database::{UserChannel, UserChannels};
use crate::domain::store::{ChannelMarkup, ChannelStore, DataStore};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Markup key the legacy `label` is stored under after migration.
pub const LABEL_MARKUP_KEY: &str = "label";

#[deprecated(note = "use UserChannels")]
pub type ChannelsObject = BTreeMap<String, ChannelObject>;

#[deprecated(note = "use UserChannel")]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelObject {
    pub label: String,
    pub service: String,

    pub user_id: String,
    pub store: ChannelStore,

    /// Any further keys the writer attached.
    #[serde(flatten)]
    pub extra: DataStore,
}

impl From<ChannelObject> for UserChannel {
    fn from(legacy: ChannelObject) -> Self {
        let mut markup = ChannelMarkup::new();
        markup.extend(legacy.extra);
        markup.insert(LABEL_MARKUP_KEY, legacy.label);
        UserChannel {
            service: legacy.service,
            user_id: Some(legacy.user_id),
            store: Some(legacy.store),
            markup: Some(markup),
        }
    }
}

/// Convert a whole legacy channel map, keeping channel names.
pub fn migrate_channels(legacy: ChannelsObject) -> UserChannels {
    legacy
        .into_iter()
        .map(|(name, channel)| (name, UserChannel::from(channel)))
        .collect()
}
