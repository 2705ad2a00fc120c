//! Text-analytics annotation shapes (language detection, entities, key
//! phrases, sentiment). Keys are PascalCase as returned by the analytics service.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Language {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Language {
    /// Highest-scoring language with a code. Languages without a score rank last.
    pub fn most_confident(languages: &[Language]) -> Option<&Language> {
        languages
            .iter()
            .filter(|l| l.language_code.is_some())
            .max_by(|a, b| {
                a.score
                    .unwrap_or(f64::NEG_INFINITY)
                    .total_cmp(&b.score.unwrap_or(f64::NEG_INFINITY))
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Entity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyPhrase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Overall sentiment label plus per-class scores. Both fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Sentiment {
    pub sentiment: String,
    pub sentiment_score: SentimentScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentClass {
    Mixed,
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SentimentScore {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neutral: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative: Option<f64>,
}

impl SentimentScore {
    /// Class with the highest score, or `None` if no class is scored.
    /// Ties resolve in the order Positive, Negative, Neutral, Mixed.
    pub fn dominant(&self) -> Option<SentimentClass> {
        [
            (SentimentClass::Positive, self.positive),
            (SentimentClass::Negative, self.negative),
            (SentimentClass::Neutral, self.neutral),
            (SentimentClass::Mixed, self.mixed),
        ]
        .into_iter()
        .filter_map(|(class, score)| score.map(|s| (class, s)))
        .fold(None, |best: Option<(SentimentClass, f64)>, (class, s)| match best {
            Some((_, b)) if b >= s => best,
            _ => Some((class, s)),
        })
        .map(|(class, _)| class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_uses_pascal_case_keys() {
        let entity: Entity = serde_json::from_value(json!({
            "BeginOffset": 0,
            "EndOffset": 5,
            "Score": 0.98,
            "Text": "Paris",
            "Type": "LOCATION"
        }))
        .unwrap();
        assert_eq!(entity.entity_type.as_deref(), Some("LOCATION"));
        assert_eq!(entity.end_offset, Some(5));
    }

    #[test]
    fn test_sentiment_requires_both_fields() {
        let err = serde_json::from_value::<Sentiment>(json!({ "Sentiment": "POSITIVE" }));
        assert!(err.is_err());

        let ok: Sentiment = serde_json::from_value(json!({
            "Sentiment": "POSITIVE",
            "SentimentScore": {}
        }))
        .unwrap();
        assert_eq!(ok.sentiment_score, SentimentScore::default());
    }

    #[test]
    fn test_dominant_sentiment() {
        let score = SentimentScore {
            mixed: Some(0.01),
            positive: Some(0.2),
            neutral: Some(0.7),
            negative: Some(0.09),
        };
        assert_eq!(score.dominant(), Some(SentimentClass::Neutral));
        assert_eq!(SentimentScore::default().dominant(), None);

        let tie = SentimentScore {
            positive: Some(0.5),
            negative: Some(0.5),
            ..Default::default()
        };
        assert_eq!(tie.dominant(), Some(SentimentClass::Positive));
    }

    #[test]
    fn test_most_confident_language() {
        let langs = vec![
            Language {
                language_code: Some("en".into()),
                score: Some(0.4),
            },
            Language {
                language_code: Some("nl".into()),
                score: Some(0.55),
            },
            Language {
                language_code: None,
                score: Some(0.9),
            },
        ];
        let best = Language::most_confident(&langs).unwrap();
        assert_eq!(best.language_code.as_deref(), Some("nl"));
        assert!(Language::most_confident(&[]).is_none());
    }
}
