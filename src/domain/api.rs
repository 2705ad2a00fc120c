//! Records exchanged with the account/billing backend, and the generic
//! query filter/result wrappers used against the range store.

use crate::domain::DomainError;
use crate::domain::record::RecordFields;
use crate::domain::store::StoreValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::marker::PhantomData;

/// Range-store query filter over records of type `Entry`.
///
/// `names` maps expression placeholders (e.g. `#uid`) to field names of `Entry`;
/// `values` maps value placeholders (e.g. `:uid`) to their string values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DynamoFilter<Entry> {
    pub condition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<BTreeMap<String, String>>,
    #[serde(skip)]
    entry: PhantomData<Entry>,
}

impl<Entry: RecordFields> DynamoFilter<Entry> {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            filter: None,
            names: None,
            values: None,
            entry: PhantomData,
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_name(mut self, placeholder: impl Into<String>, field: impl Into<String>) -> Self {
        self.names
            .get_or_insert_with(BTreeMap::new)
            .insert(placeholder.into(), field.into());
        self
    }

    pub fn with_value(mut self, placeholder: impl Into<String>, value: impl Into<String>) -> Self {
        self.values
            .get_or_insert_with(BTreeMap::new)
            .insert(placeholder.into(), value.into());
        self
    }

    /// Checks that every name placeholder refers to a field of `Entry`.
    pub fn validate(&self) -> Result<(), DomainError> {
        let Some(names) = &self.names else {
            return Ok(());
        };
        for (placeholder, field) in names {
            if !Entry::has_field(field) {
                return Err(DomainError::FilterField {
                    placeholder: placeholder.clone(),
                    field: field.clone(),
                });
            }
        }
        Ok(())
    }
}

/// One page of a range-store query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DynamoResult<LastEvaluatedKey, Item> {
    pub count: u64,
    pub scanned_count: u64,
    pub last_evaluated_key: LastEvaluatedKey,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Desc,
    Asc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub slug: String,
    pub photo_url: String,
    pub stripe_id: String,
    pub current_billing_plan: String,
    pub vat_id: String,
    pub trial_ends_at: String,
    pub created_at: String,
    pub updated_at: String,
    pub pivot: TeamPivot,
    pub subscriptions: Vec<StoreValue>,
    pub tax_rate: f64,
}

/// Membership row joining a user to a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPivot {
    pub user_id: i64,
    pub team_id: i64,
    pub role: String,
}

impl RecordFields for Team {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "owner_id",
        "name",
        "slug",
        "photo_url",
        "stripe_id",
        "current_billing_plan",
        "vat_id",
        "trial_ends_at",
        "created_at",
        "updated_at",
        "pivot",
        "subscriptions",
        "tax_rate",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub photo_url: String,
    pub uses_two_factor_auth: bool,
    pub country_code: String,
    pub phone: String,
    pub two_factor_reset_code: String,
    pub current_team_id: i64,
    pub stripe_id: String,
    pub current_billing_plan: String,
    pub card_brand: String,
    pub card_last_four: String,
    pub card_country: String,
    pub billing_address: String,
    pub billing_address_line_2: String,
    pub billing_city: String,
    pub billing_state: String,
    pub billing_zip: String,
    pub billing_country: String,
    pub vat_id: String,
    pub extra_billing_information: String,
    pub trial_ends_at: String,
    pub last_read_announcements_at: String,
    pub created_at: String,
    pub updated_at: String,
    pub subscriptions: Vec<StoreValue>,
    pub owned_teams: Vec<StoreValue>,
    pub teams: Vec<Team>,
    pub tax_rate: f64,
}

/// [`User`] with every field optional. Used for partial updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses_two_factor_auth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_factor_reset_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_team_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_billing_plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_last_four: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_line_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_billing_information: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_ends_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_read_announcements_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<Vec<StoreValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned_teams: Option<Vec<StoreValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<Team>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
}

// Expands once per user field; keeps `apply` and the `From` impl in sync.
macro_rules! user_fields {
    ($mac:ident, $($arg:expr),*) => {
        $mac!(
            $($arg,)*
            id,
            name,
            email,
            photo_url,
            uses_two_factor_auth,
            country_code,
            phone,
            two_factor_reset_code,
            current_team_id,
            stripe_id,
            current_billing_plan,
            card_brand,
            card_last_four,
            card_country,
            billing_address,
            billing_address_line_2,
            billing_city,
            billing_state,
            billing_zip,
            billing_country,
            vat_id,
            extra_billing_information,
            trial_ends_at,
            last_read_announcements_at,
            created_at,
            updated_at,
            subscriptions,
            owned_teams,
            teams,
            tax_rate
        )
    };
}

impl User {
    /// Overwrite the fields present in `patch`; absent fields keep their value.
    pub fn apply(&mut self, patch: PartialUser) {
        macro_rules! apply {
            ($target:expr, $patch:expr, $($field:ident),*) => {
                $(
                    if let Some(value) = $patch.$field {
                        $target.$field = value;
                    }
                )*
            };
        }
        user_fields!(apply, self, patch);
    }
}

impl From<User> for PartialUser {
    fn from(user: User) -> Self {
        macro_rules! wrap {
            ($source:expr, $($field:ident),*) => {
                PartialUser { $($field: Some($source.$field)),* }
            };
        }
        user_fields!(wrap, user)
    }
}

impl RecordFields for User {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "email",
        "photo_url",
        "uses_two_factor_auth",
        "country_code",
        "phone",
        "two_factor_reset_code",
        "current_team_id",
        "stripe_id",
        "current_billing_plan",
        "card_brand",
        "card_last_four",
        "card_country",
        "billing_address",
        "billing_address_line_2",
        "billing_city",
        "billing_state",
        "billing_zip",
        "billing_country",
        "vat_id",
        "extra_billing_information",
        "trial_ends_at",
        "last_read_announcements_at",
        "created_at",
        "updated_at",
        "subscriptions",
        "owned_teams",
        "teams",
        "tax_rate",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotInfo {
    /// The name of this bot.
    pub name: String,
    /// The id of this bot.
    pub bot_id: String,
    /// The name of the team that this bot belongs to.
    pub team: String,
    /// Path for API calls against this bot: the team followed by the bot id.
    pub canonical: String,
    /// When this bot was created.
    pub created_at: String,
    /// When any configuration property of this bot last changed.
    pub updated_at: String,
}

impl BotInfo {
    pub fn canonical_for(team: &str, bot_id: &str) -> String {
        format!("{}/{}", team, bot_id)
    }

    /// True if `canonical` matches the bot's team and id.
    pub fn has_consistent_canonical(&self) -> bool {
        self.canonical == Self::canonical_for(&self.team, &self.bot_id)
    }
}

impl RecordFields for BotInfo {
    const FIELDS: &'static [&'static str] =
        &["name", "botId", "team", "canonical", "createdAt", "updatedAt"];
}
