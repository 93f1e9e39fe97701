//! Response models for the text-analysis endpoints: entities, keywords,
//! concepts, taxonomy, relations, sentiment, language detection, authors,
//! microformats, feed links, and the combined call.

use serde::{Deserialize, Serialize};
use url::Url;

use super::common::{DisambiguatedLinks, KnowledgeGraph, PublicationDate, Quotation, Sentiment};
use crate::de;

/// A named entity detected in a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Number of times the entity was mentioned. The wire value may be quoted.
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub count: Option<i64>,

    /// Linked-data references disambiguating the entity.
    #[serde(default)]
    pub disambiguated: Option<DisambiguatedLinks>,

    /// Knowledge-graph path for the entity. Only returned when the request
    /// asked for knowledge-graph data.
    #[serde(default)]
    pub knowledge_graph: Option<KnowledgeGraph>,

    /// Quotations attributed to the entity.
    #[serde(default)]
    pub quotations: Vec<Quotation>,

    /// Relevance of the entity to the document (0.0 to 1.0).
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub relevance: Option<f64>,

    /// Sentiment of the document toward the entity.
    #[serde(default)]
    pub sentiment: Option<Sentiment>,

    /// The entity text as it appeared in the document.
    #[serde(default)]
    pub text: Option<String>,

    /// Entity type tag, e.g. `Person` or `Company`.
    #[serde(default)]
    pub r#type: Option<String>,
}

impl Entity {
    /// Get the disambiguated entity name, falling back to the surface text.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.disambiguated
            .as_ref()
            .and_then(|links| links.name.as_deref())
            .or(self.text.as_deref())
    }

    /// Get the DBpedia link for the entity if it was disambiguated.
    #[must_use]
    pub fn dbpedia(&self) -> Option<&str> {
        self.disambiguated.as_ref()?.dbpedia.as_deref()
    }
}

/// A keyword extracted from a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyword {
    /// Knowledge-graph path for the keyword.
    #[serde(default)]
    pub knowledge_graph: Option<KnowledgeGraph>,

    /// Relevance of the keyword to the document (0.0 to 1.0).
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub relevance: Option<f64>,

    /// Sentiment of the document toward the keyword.
    #[serde(default)]
    pub sentiment: Option<Sentiment>,

    /// The keyword text.
    #[serde(default)]
    pub text: Option<String>,
}

/// A concept tagged in a document.
///
/// The concept may not be mentioned explicitly: a page discussing CERN and
/// the Higgs boson can be tagged with the Large Hadron Collider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    /// The concept tag.
    #[serde(default)]
    pub text: Option<String>,

    /// Relevance of the concept to the document (0.0 to 1.0).
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub relevance: Option<f64>,

    /// Knowledge-graph path for the concept.
    #[serde(default)]
    pub knowledge_graph: Option<KnowledgeGraph>,

    /// Website associated with the concept.
    #[serde(default)]
    pub website: Option<String>,

    /// Geographic coordinates associated with the concept.
    #[serde(default)]
    pub geo: Option<String>,

    /// Link to DBpedia.
    #[serde(default)]
    pub dbpedia: Option<String>,

    /// Link to YAGO.
    #[serde(default)]
    pub yago: Option<String>,

    /// Link to OpenCyc.
    #[serde(default)]
    pub opencyc: Option<String>,

    /// Link to Freebase.
    #[serde(default)]
    pub freebase: Option<String>,

    /// Link to the CIA World Factbook.
    #[serde(default)]
    pub cia_factbook: Option<String>,

    /// Link to the US Census.
    #[serde(default)]
    pub census: Option<String>,

    /// Link to Geonames.
    #[serde(default)]
    pub geonames: Option<String>,

    /// Link to MusicBrainz.
    #[serde(default)]
    pub music_brainz: Option<String>,

    /// Link to CrunchBase.
    #[serde(default)]
    pub crunchbase: Option<String>,
}

/// A hierarchical category assigned to a document.
///
/// Depending on the endpoint variant, the wire value is either a full object
/// or a bare label string; both decode into the same record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "TaxonomyRepr")]
pub struct Taxonomy {
    /// Slash-delimited category path, e.g. `/technology/computing`.
    pub label: Option<String>,

    /// Classification confidence (0.0 to 1.0).
    pub score: Option<f64>,

    /// Set to `"no"` when the classifier is not confident.
    pub confident: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TaxonomyRepr {
    Object {
        #[serde(default)]
        label: Option<String>,
        #[serde(default, deserialize_with = "de::lenient_f64")]
        score: Option<f64>,
        #[serde(default)]
        confident: Option<String>,
    },
    Label(String),
}

impl From<TaxonomyRepr> for Taxonomy {
    fn from(repr: TaxonomyRepr) -> Self {
        match repr {
            TaxonomyRepr::Object { label, score, confident } => {
                Self { label, score, confident }
            }
            TaxonomyRepr::Label(label) => {
                Self { label: Some(label), score: None, confident: None }
            }
        }
    }
}

impl Taxonomy {
    /// Check whether the classifier was confident in this category.
    ///
    /// The wire flag only appears when confidence is low.
    #[must_use]
    pub fn is_confident(&self) -> bool {
        self.confident.as_deref() != Some("no")
    }

    /// Get the individual levels of the category path, outermost first.
    #[must_use]
    pub fn levels(&self) -> Vec<&str> {
        self.label
            .as_deref()
            .map(|path| path.split('/').filter(|level| !level.is_empty()).collect())
            .unwrap_or_default()
    }
}

/// The subject of a subject-action-object relation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Entity detected within the subject, if any.
    #[serde(default)]
    pub entity: Option<Entity>,

    /// Keywords detected within the subject.
    #[serde(default)]
    pub keywords: Vec<Keyword>,

    /// Sentiment of the subject.
    #[serde(default)]
    pub sentiment: Option<Sentiment>,

    /// The subject text.
    #[serde(default)]
    pub text: Option<String>,
}

/// The verb of a relation's action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Verb {
    /// Set to `1` when the verb is negated. The wire value may be quoted.
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub negated: Option<i64>,

    /// Verb tense, e.g. `past` or `present`.
    #[serde(default)]
    pub tense: Option<String>,

    /// The verb text.
    #[serde(default)]
    pub text: Option<String>,
}

impl Verb {
    /// Check whether the verb is negated ("did not announce").
    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negated == Some(1)
    }
}

/// The action of a subject-action-object relation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Lemmatized (base) form of the action.
    #[serde(default)]
    pub lemmatized: Option<String>,

    /// The action text.
    #[serde(default)]
    pub text: Option<String>,

    /// The parsed verb.
    #[serde(default)]
    pub verb: Option<Verb>,
}

/// The object of a subject-action-object relation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationObject {
    /// Entity detected within the object, if any.
    #[serde(default)]
    pub entity: Option<Entity>,

    /// Keywords detected within the object.
    #[serde(default)]
    pub keywords: Vec<Keyword>,

    /// Sentiment of the object.
    #[serde(default)]
    pub sentiment: Option<Sentiment>,

    /// Sentiment of the subject toward the object.
    #[serde(default)]
    pub sentiment_from_subject: Option<Sentiment>,

    /// The object text.
    #[serde(default)]
    pub text: Option<String>,
}

/// A shallow semantic-role parse of one sentence into subject, action, and
/// object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SAORelation {
    /// The parsed action.
    #[serde(default)]
    pub action: Option<Action>,

    /// The parsed object.
    #[serde(default)]
    pub object: Option<RelationObject>,

    /// The full sentence the relation was extracted from.
    #[serde(default)]
    pub sentence: Option<String>,

    /// The parsed subject.
    #[serde(default)]
    pub subject: Option<Subject>,
}

/// Language detected for a document, with reference links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Language {
    #[serde(default)]
    pub status: Option<String>,

    /// The URL the document was fetched from, if the request was by URL.
    #[serde(default)]
    pub url: Option<String>,

    /// Detected language name, e.g. `english`.
    #[serde(default)]
    pub language: Option<String>,

    /// Transactions charged for the request. The wire value may be quoted.
    #[serde(default, rename = "totalTransactions", deserialize_with = "de::lenient_i64")]
    pub total_transactions: Option<i64>,

    /// Link to the Ethnologue entry for the language.
    #[serde(default)]
    pub ethnologue: Option<String>,

    /// ISO 639-1 code, e.g. `en`.
    #[serde(default, rename = "iso-639-1")]
    pub iso6391: Option<String>,

    /// ISO 639-2 code, e.g. `eng`.
    #[serde(default, rename = "iso-639-2")]
    pub iso6392: Option<String>,

    /// ISO 639-3 code, e.g. `eng`.
    #[serde(default, rename = "iso-639-3")]
    pub iso6393: Option<String>,

    /// Estimated number of native speakers, as reported, e.g. `309-400 million`.
    #[serde(default, rename = "native-speakers")]
    pub native_speakers: Option<String>,

    /// Link to the Wikipedia page for the language.
    #[serde(default)]
    pub wikipedia: Option<String>,
}

/// A microformat field scraped from a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Microformat {
    /// The microformat field name.
    #[serde(default)]
    pub field: Option<String>,

    /// The microformat field value.
    #[serde(default)]
    pub data: Option<String>,
}

/// An RSS/ATOM feed link discovered on a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    /// The feed URL.
    #[serde(default)]
    pub feed: Option<String>,
}

impl Feed {
    /// Get the feed link as a parsed URL, if present and well-formed.
    #[must_use]
    pub fn url(&self) -> Option<Url> {
        self.feed.as_deref().and_then(|raw| Url::parse(raw).ok())
    }
}

/// Author names extracted from a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Authors {
    /// The extracted names, in page order.
    #[serde(default)]
    pub names: Vec<String>,
}

/// Response of the entity-extraction endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entities {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    /// Transactions charged for the request. The wire value may be quoted.
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub total_transactions: Option<i64>,

    /// The detected entities, most relevant first.
    #[serde(default)]
    pub entities: Vec<Entity>,
}

/// Response of the keyword-extraction endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keywords {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub total_transactions: Option<i64>,

    /// The extracted keywords, most relevant first.
    #[serde(default)]
    pub keywords: Vec<Keyword>,
}

/// Response of the concept-tagging endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concepts {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub total_transactions: Option<i64>,

    /// The tagged concepts, most relevant first.
    #[serde(default)]
    pub concepts: Vec<Concept>,
}

/// Response of the taxonomy-classification endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxonomies {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub total_transactions: Option<i64>,

    /// The assigned categories, most confident first.
    #[serde(default)]
    pub taxonomy: Vec<Taxonomy>,
}

/// Response of the relation-extraction endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SAORelations {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub total_transactions: Option<i64>,

    /// The extracted relations, in sentence order.
    #[serde(default)]
    pub relations: Vec<SAORelation>,
}

/// Response of the microformat-extraction endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Microformats {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub total_transactions: Option<i64>,

    /// The scraped microformat fields.
    #[serde(default)]
    pub microformats: Vec<Microformat>,
}

/// Response of the feed-link-extraction endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feeds {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub total_transactions: Option<i64>,

    /// The discovered feed links.
    #[serde(default)]
    pub feeds: Vec<Feed>,
}

/// Response of the text-extraction endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentText {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub total_transactions: Option<i64>,

    /// The cleaned document text.
    #[serde(default)]
    pub text: Option<String>,
}

/// Response of the title-extraction endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTitle {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub total_transactions: Option<i64>,

    /// The extracted page title.
    #[serde(default)]
    pub title: Option<String>,
}

/// Response of the author-extraction endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAuthors {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub total_transactions: Option<i64>,

    /// The extracted authors.
    #[serde(default)]
    pub authors: Option<Authors>,
}

impl DocumentAuthors {
    /// Get the extracted author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors
            .as_ref()
            .map(|authors| authors.names.join(", "))
            .unwrap_or_default()
    }
}

/// Response of the document-sentiment endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSentiment {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub total_transactions: Option<i64>,

    /// Overall sentiment of the document.
    #[serde(default, rename = "docSentiment")]
    pub sentiment: Option<Sentiment>,
}

/// Response of the combined multi-feature call: everything the language
/// endpoints return, in one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedResults {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub total_transactions: Option<i64>,

    /// Extracted author, when available.
    #[serde(default)]
    pub author: Option<String>,

    /// Tagged concepts.
    #[serde(default)]
    pub concepts: Vec<Concept>,

    /// Detected entities.
    #[serde(default)]
    pub entities: Vec<Entity>,

    /// Discovered feed links.
    #[serde(default)]
    pub feeds: Vec<Feed>,

    /// The main page image.
    #[serde(default)]
    pub image: Option<String>,

    /// Keywords describing the main page image.
    #[serde(default)]
    pub image_keywords: Vec<Keyword>,

    /// Extracted keywords.
    #[serde(default)]
    pub keywords: Vec<Keyword>,

    /// Extracted publication date.
    #[serde(default)]
    pub publication_date: Option<PublicationDate>,

    /// Extracted subject-action-object relations.
    #[serde(default)]
    pub relations: Vec<SAORelation>,

    /// Overall document sentiment.
    #[serde(default, rename = "docSentiment")]
    pub sentiment: Option<Sentiment>,

    /// Assigned taxonomy categories.
    #[serde(default)]
    pub taxonomy: Vec<Taxonomy>,

    /// Extracted page title.
    #[serde(default)]
    pub title: Option<String>,
}

impl CombinedResults {
    /// Get the most relevant keyword, if any were extracted.
    #[must_use]
    pub fn top_keyword(&self) -> Option<&Keyword> {
        self.keywords.first()
    }

    /// Get the most confident taxonomy label, if any were assigned.
    #[must_use]
    pub fn top_taxonomy_label(&self) -> Option<&str> {
        self.taxonomy.first().and_then(|taxonomy| taxonomy.label.as_deref())
    }
}
