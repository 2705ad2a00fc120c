//! Literal records shared by the unit tests.

use serde_json::{Value, json};

pub fn minimal_transaction() -> Value {
    json!({
        "botUserId": "bot-1#user-1",
        "transactionId": "tx-1",
        "conversationId": "conv-1",
        "timestamp": "2024-03-01T10:00:00Z",
        "type": "StaMP",
        "message": { "type": "query", "query": "hello", "senderId": "user-1" }
    })
}

pub fn transaction_entry() -> Value {
    json!({
        "botUserId": "bot-1#user-1",
        "transactionId": "tx-2",
        "conversationId": "conv-1",
        "timestamp": "2024-03-01T10:00:05Z",
        "type": "StaMP",
        "message": { "type": "message", "text": "Hi Ada!", "senderId": "bot-1" },
        "metaMessage": { "type": "typing", "state": "off" },
        "channel": { "id": "fb-42", "service": "facebook" },
        "route": "/welcome",
        "conversationStore": { "step": 2, "greeted": true },
        "markup": {
            "lang": { "LanguageCode": "en", "Score": 0.99 },
            "languages": [
                { "LanguageCode": "en", "Score": 0.99 },
                { "LanguageCode": "nl", "Score": 0.01 }
            ],
            "entities": [
                { "BeginOffset": 3, "EndOffset": 6, "Score": 0.87, "Text": "Ada", "Type": "PERSON" }
            ],
            "keyPhrases": [
                { "BeginOffset": 0, "EndOffset": 6, "Score": 0.75, "Text": "Hi Ada" }
            ],
            "sentiment": {
                "Sentiment": "POSITIVE",
                "SentimentScore": { "Mixed": 0.01, "Positive": 0.93, "Neutral": 0.05, "Negative": 0.01 }
            }
        },
        "model": { "intent": "greeting", "confidence": 0.92, "slots": { "name": "Ada" } }
    })
}

pub fn user_entry() -> Value {
    json!({
        "botId": "bot-1",
        "userId": "user-1",
        "creation": "2024-02-01T08:00:00Z",
        "channels": {
            "facebook": {
                "service": "facebook",
                "userId": "fb-42",
                "store": { "optIn": true },
                "markup": { "pageId": 1234567 }
            },
            "web": { "service": "web" }
        },
        "route": "/welcome",
        "store": { "plan": "free", "visits": 3, "scores": [1, 2.5, "high"] },
        "markup": {
            "firstName": "Ada",
            "lastName": "Lovelace",
            "timezone": "Europe/London",
            "language": "en",
            "local": "en_GB",
            "email": "ada@example.com",
            "conversationCount": 2,
            "messageCount": 17
        },
        "lastTransaction": transaction_entry(),
        "lastTransactionTime": "2024-03-01T10:00:05Z"
    })
}

pub fn conversation_entry() -> Value {
    json!({
        "botUserId": "bot-1#user-1",
        "conversationId": "conv-1",
        "creation": "2024-03-01T10:00:00Z",
        "store": { "step": 2 },
        "expiration": "2024-03-01T10:45:00Z",
        "lifetime": 3600,
        "route": "/welcome",
        "firstTransaction": minimal_transaction(),
        "firstTransactionTime": "2024-03-01T10:00:00Z",
        "lastTransaction": transaction_entry(),
        "lastTransactionTime": "2024-03-01T10:00:05Z"
    })
}

pub fn legacy_channels() -> Value {
    json!({
        "facebook": {
            "label": "Main page",
            "service": "facebook",
            "userId": "fb-42",
            "store": { "optIn": true },
            "pageId": 1234567,
            "verified": false
        }
    })
}

pub fn team() -> Value {
    json!({
        "id": 7,
        "owner_id": 1,
        "name": "Acme",
        "slug": "acme",
        "photo_url": "https://example.com/acme.png",
        "stripe_id": "cus_123",
        "current_billing_plan": "pro",
        "vat_id": "NL123",
        "trial_ends_at": "2024-04-01 00:00:00",
        "created_at": "2024-01-01 00:00:00",
        "updated_at": "2024-02-01 00:00:00",
        "pivot": { "user_id": 1, "team_id": 7, "role": "owner" },
        "subscriptions": [{ "id": 3, "plan": "pro" }],
        "tax_rate": 0.21
    })
}

pub fn user() -> Value {
    json!({
        "id": 1,
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "photo_url": "https://example.com/ada.png",
        "uses_two_factor_auth": false,
        "country_code": "44",
        "phone": "7700900000",
        "two_factor_reset_code": "",
        "current_team_id": 7,
        "stripe_id": "cus_123",
        "current_billing_plan": "pro",
        "card_brand": "Visa",
        "card_last_four": "4242",
        "card_country": "GB",
        "billing_address": "12 St James's Square",
        "billing_address_line_2": "",
        "billing_city": "London",
        "billing_state": "",
        "billing_zip": "SW1Y 4JH",
        "billing_country": "GB",
        "vat_id": "",
        "extra_billing_information": "",
        "trial_ends_at": "2024-04-01 00:00:00",
        "last_read_announcements_at": "2024-02-15 09:00:00",
        "created_at": "2024-01-01 00:00:00",
        "updated_at": "2024-02-01 00:00:00",
        "subscriptions": [],
        "owned_teams": [{ "id": 7 }],
        "teams": [team()],
        "tax_rate": 0.2
    })
}

pub fn bot_info() -> Value {
    json!({
        "name": "Welcome bot",
        "botId": "bot-1",
        "team": "acme",
        "canonical": "acme/bot-1",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-02-01T00:00:00Z"
    })
}

pub fn minimal_conversation() -> Value {
    json!({
        "botUserId": "bot-1#user-1",
        "conversationId": "conv-2",
        "creation": "2024-03-02T09:00:00Z",
        "firstTransaction": minimal_transaction(),
        "firstTransactionTime": "2024-03-01T10:00:00Z",
        "lastTransaction": minimal_transaction(),
        "lastTransactionTime": "2024-03-01T10:00:00Z"
    })
}

pub fn evaluated_user_keys() -> Value {
    json!({
        "userId": "user-1",
        "botId": "bot-1",
        "lastTransactionTIme": "2024-03-01T10:00:05Z"
    })
}

pub fn evaluated_transaction_keys() -> Value {
    json!({
        "botUserId": "bot-1#user-1",
        "transactionId": "tx-2",
        "timestamp": "2024-03-01T10:00:05Z"
    })
}
