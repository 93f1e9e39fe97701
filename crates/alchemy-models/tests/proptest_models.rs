//! Property-based tests for the response models.

use proptest::prelude::*;

use alchemy_models::models::{
    Entity, Keyword, PublicationDate, Sentiment, SentimentType, Taxonomy,
};

fn arb_sentiment() -> impl Strategy<Value = Sentiment> {
    (
        proptest::option::of(Just("1".to_string())),
        proptest::option::of(-1.0f64..1.0),
        proptest::option::of(prop_oneof![
            Just(SentimentType::Negative),
            Just(SentimentType::Neutral),
            Just(SentimentType::Positive),
        ]),
    )
        .prop_map(|(mixed, score, r#type)| Sentiment { mixed, score, r#type })
}

fn arb_entity() -> impl Strategy<Value = Entity> {
    (
        proptest::option::of(0i64..1_000),
        proptest::option::of(0.0f64..1.0),
        proptest::option::of("[A-Za-z ]{1,60}"),
        proptest::option::of("[A-Za-z]{1,20}"),
        proptest::option::of(arb_sentiment()),
    )
        .prop_map(|(count, relevance, text, r#type, sentiment)| Entity {
            count,
            relevance,
            text,
            r#type,
            sentiment,
            ..Default::default()
        })
}

fn arb_taxonomy() -> impl Strategy<Value = Taxonomy> {
    (
        proptest::option::of("(/[a-z]{1,12}){1,4}"),
        proptest::option::of(0.0f64..1.0),
        proptest::option::of(prop_oneof![Just("yes".to_string()), Just("no".to_string())]),
    )
        .prop_map(|(label, score, confident)| Taxonomy { label, score, confident })
}

proptest! {
    /// Entity serialization roundtrip preserves every field.
    #[test]
    fn entity_roundtrip(entity in arb_entity()) {
        let json = serde_json::to_value(&entity).expect("serialize");
        let decoded: Entity = serde_json::from_value(json).expect("deserialize");

        prop_assert_eq!(entity, decoded);
    }

    /// Taxonomy roundtrip preserves every field, whichever shape it decoded from.
    #[test]
    fn taxonomy_roundtrip(taxonomy in arb_taxonomy()) {
        let json = serde_json::to_value(&taxonomy).expect("serialize");
        let decoded: Taxonomy = serde_json::from_value(json).expect("deserialize");

        prop_assert_eq!(taxonomy, decoded);
    }

    /// Any bare string is a valid taxonomy, and its label survives a roundtrip.
    #[test]
    fn taxonomy_accepts_any_bare_label(label in "[^\"\\\\]{0,80}") {
        let json = serde_json::Value::String(label.clone());
        let taxonomy: Taxonomy = serde_json::from_value(json).expect("bare label");

        prop_assert_eq!(taxonomy.label.as_deref(), Some(label.as_str()));

        let reencoded = serde_json::to_value(&taxonomy).expect("serialize");
        let decoded: Taxonomy = serde_json::from_value(reencoded).expect("deserialize");
        prop_assert_eq!(taxonomy, decoded);
    }

    /// Quoted and unquoted numbers decode to the same keyword.
    #[test]
    fn keyword_quoted_numbers_match_plain(relevance in 0.0f64..1.0) {
        let quoted = serde_json::json!({"text": "k", "relevance": relevance.to_string()});
        let plain = serde_json::json!({"text": "k", "relevance": relevance});

        let from_quoted: Keyword = serde_json::from_value(quoted).expect("quoted");
        let from_plain: Keyword = serde_json::from_value(plain).expect("plain");

        prop_assert_eq!(from_quoted, from_plain);
    }

    /// Publication-date decoding never fails, whatever the date string holds.
    #[test]
    fn publication_date_never_errors(date in ".{0,40}") {
        let json = serde_json::json!({"date": date});
        let result = serde_json::from_value::<PublicationDate>(json);

        prop_assert!(result.is_ok());
    }

    /// Entity decoding never panics on arbitrary optional fields.
    #[test]
    fn entity_from_arbitrary_json_never_panics(
        text in proptest::option::of(".*"),
        count in proptest::option::of(any::<i64>()),
        relevance in proptest::option::of(any::<f64>()),
    ) {
        let json = serde_json::json!({
            "text": text,
            "count": count,
            "relevance": relevance,
        });

        // Should not panic - may succeed or fail gracefully
        let _ = serde_json::from_value::<Entity>(json);
    }
}

#[test]
fn sentiment_handles_missing_fields() {
    let sentiment: Sentiment = serde_json::from_value(serde_json::json!({})).unwrap();

    assert!(sentiment.r#type.is_none());
    assert!(sentiment.score.is_none());
    assert!(!sentiment.is_mixed());
    assert_eq!(sentiment.score_or_default(), 0.0);
}

#[test]
fn sentiment_handles_null_fields() {
    let json = serde_json::json!({"type": null, "score": null, "mixed": null});
    let sentiment: Sentiment = serde_json::from_value(json).unwrap();

    assert!(sentiment.r#type.is_none());
    assert!(sentiment.score.is_none());
}
