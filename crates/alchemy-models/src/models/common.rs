//! Value types shared across the language, vision, and news response families.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::de;

/// Sentiment polarity reported by the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentType {
    /// Negative sentiment.
    Negative,
    /// Neutral sentiment.
    #[default]
    Neutral,
    /// Positive sentiment.
    Positive,
}

/// Sentiment of a document, entity, keyword, or relation part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Set to `"1"` when the text mixes positive and negative sentiment.
    #[serde(default)]
    pub mixed: Option<String>,

    /// Sentiment strength (0.0 to 1.0). The wire value may be quoted.
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub score: Option<f64>,

    /// Polarity of the sentiment.
    #[serde(default)]
    pub r#type: Option<SentimentType>,
}

impl Sentiment {
    /// Check whether the detected sentiment is positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.r#type == Some(SentimentType::Positive)
    }

    /// Check whether the detected sentiment is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.r#type == Some(SentimentType::Negative)
    }

    /// Check whether the text mixed positive and negative sentiment.
    #[must_use]
    pub fn is_mixed(&self) -> bool {
        self.mixed.as_deref() == Some("1")
    }

    /// Get the sentiment score, or 0.0 if the service omitted it.
    #[must_use]
    pub fn score_or_default(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }
}

/// Path through the service's knowledge-graph type hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeGraph {
    /// Slash-delimited ontological class path, e.g.
    /// `/people/politicians/democrats`.
    #[serde(default)]
    pub type_hierarchy: Option<String>,
}

impl KnowledgeGraph {
    /// Get the individual levels of the type hierarchy, outermost first.
    #[must_use]
    pub fn levels(&self) -> Vec<&str> {
        self.type_hierarchy
            .as_deref()
            .map(|path| path.split('/').filter(|level| !level.is_empty()).collect())
            .unwrap_or_default()
    }
}

/// Linked-data references that disambiguate a detected entity.
///
/// Each link is provided only when the entity exists in that data set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisambiguatedLinks {
    /// The disambiguated entity name.
    #[serde(default)]
    pub name: Option<String>,

    /// Sub-types exposing additional ontological mappings, such as
    /// identification of a person as a politician or athlete.
    #[serde(default)]
    pub sub_type: Option<Vec<String>>,

    /// The entity's website.
    #[serde(default)]
    pub website: Option<String>,

    /// Geographic coordinates associated with the entity.
    #[serde(default)]
    pub geo: Option<String>,

    /// Link to the US Census.
    #[serde(default)]
    pub census: Option<String>,

    /// Link to the CIA World Factbook.
    #[serde(default)]
    pub cia_factbook: Option<String>,

    /// Link to CrunchBase.
    #[serde(default)]
    pub crunchbase: Option<String>,

    /// Link to DBpedia.
    #[serde(default)]
    pub dbpedia: Option<String>,

    /// Link to Freebase.
    #[serde(default)]
    pub freebase: Option<String>,

    /// Link to Geonames.
    #[serde(default)]
    pub geonames: Option<String>,

    /// Link to MusicBrainz.
    #[serde(default)]
    pub music_brainz: Option<String>,

    /// Link to OpenCyc.
    #[serde(default)]
    pub opencyc: Option<String>,

    /// Link to UMBEL.
    #[serde(default)]
    pub umbel: Option<String>,

    /// Link to YAGO.
    #[serde(default)]
    pub yago: Option<String>,
}

impl DisambiguatedLinks {
    /// Get the entity's website as a parsed URL, if present and well-formed.
    #[must_use]
    pub fn website_url(&self) -> Option<Url> {
        self.website.as_deref().and_then(|raw| Url::parse(raw).ok())
    }

    /// Get the DBpedia link as a parsed URL, if present and well-formed.
    #[must_use]
    pub fn dbpedia_url(&self) -> Option<Url> {
        self.dbpedia.as_deref().and_then(|raw| Url::parse(raw).ok())
    }
}

/// Publication date of a document, stamped as a compact timestamp on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicationDate {
    /// The parsed date. `None` when the service omitted the date or sent a
    /// value the compact `yyyymmddThhmmss` format cannot account for.
    #[serde(
        default,
        deserialize_with = "de::lenient_compact_date",
        serialize_with = "de::compact_date"
    )]
    pub date: Option<NaiveDateTime>,

    /// Set to `"no"` when the service is not confident in the extracted date.
    #[serde(default)]
    pub confident: Option<String>,
}

impl PublicationDate {
    /// Check whether the service was confident in the extracted date.
    ///
    /// The wire flag only appears when confidence is low, so an absent flag
    /// reads as confident.
    #[must_use]
    pub fn is_confident(&self) -> bool {
        self.confident.as_deref() != Some("no")
    }
}

/// A quotation attributed to a detected entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    /// The quoted text.
    #[serde(default)]
    pub quotation: Option<String>,

    /// Sentiment of the quotation.
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
}
