//! Response models for the news search and volume endpoints.
//!
//! Matched documents nest deeply on the wire:
//! `result.docs[].source.enriched.url` holds the enriched article.

use serde::{Deserialize, Serialize};

use super::common::{PublicationDate, Sentiment};
use super::language::{Concept, Entity, Feed, Keyword, SAORelation, Taxonomy};
use crate::de;

/// Enrichments computed over an article's title alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedTitle {
    /// Concepts tagged in the title.
    #[serde(default)]
    pub concepts: Vec<Concept>,

    /// Entities detected in the title.
    #[serde(default)]
    pub entities: Vec<Entity>,

    /// Sentiment of the title.
    #[serde(default, rename = "docSentiment")]
    pub sentiment: Option<Sentiment>,

    /// Taxonomy categories assigned to the title.
    #[serde(default)]
    pub taxonomy: Vec<Taxonomy>,
}

/// A news article with the full set of enrichments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// The article author.
    #[serde(default)]
    pub author: Option<String>,

    /// The article title.
    #[serde(default)]
    pub title: Option<String>,

    /// Title with boilerplate (site name, separators) stripped.
    #[serde(default)]
    pub cleaned_title: Option<String>,

    /// The article URL.
    #[serde(default)]
    pub url: Option<String>,

    /// Cleaned article text.
    #[serde(default)]
    pub text: Option<String>,

    /// Detected language of the article.
    #[serde(default)]
    pub language: Option<String>,

    /// The article's main image.
    #[serde(default)]
    pub image: Option<String>,

    /// Keywords describing the main image.
    #[serde(default)]
    pub image_keywords: Vec<Keyword>,

    /// Enrichments computed over the title alone.
    #[serde(default)]
    pub enriched_title: Option<EnrichedTitle>,

    /// Extracted publication date.
    #[serde(default)]
    pub publication_date: Option<PublicationDate>,

    /// Concepts tagged in the article body.
    #[serde(default)]
    pub concepts: Vec<Concept>,

    /// Entities detected in the article body.
    #[serde(default)]
    pub entities: Vec<Entity>,

    /// Keywords extracted from the article body.
    #[serde(default)]
    pub keywords: Vec<Keyword>,

    /// Subject-action-object relations extracted from the body.
    #[serde(default)]
    pub relations: Vec<SAORelation>,

    /// Overall sentiment of the article.
    #[serde(default, rename = "docSentiment")]
    pub sentiment: Option<Sentiment>,

    /// Taxonomy categories assigned to the article.
    #[serde(default)]
    pub taxonomy: Vec<Taxonomy>,

    /// Feed links discovered on the page.
    #[serde(default)]
    pub feeds: Vec<Feed>,
}

/// Wrapper holding the enriched article under the wire key `url`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Url {
    /// The enriched article.
    #[serde(default, rename = "url")]
    pub article: Option<Article>,
}

/// Per-document enrichment container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub enriched: Option<Url>,
}

/// A single matched news document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Opaque document identifier.
    #[serde(default)]
    pub id: Option<String>,

    /// Crawl timestamp, in epoch seconds.
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub timestamp: Option<i64>,

    #[serde(default)]
    pub source: Option<Source>,
}

impl Document {
    /// Get the enriched article for this document, if returned.
    #[must_use]
    pub fn article(&self) -> Option<&Article> {
        self.source.as_ref()?.enriched.as_ref()?.article.as_ref()
    }
}

/// A page of matched documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Documents {
    #[serde(default)]
    pub status: Option<String>,

    /// Pagination token for the next page (`None` = no more results).
    #[serde(default)]
    pub next: Option<String>,

    /// The matched documents, in API order.
    #[serde(default, rename = "docs")]
    pub documents: Vec<Document>,
}

impl Documents {
    /// Check if there are more results available.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.next.is_some()
    }
}

/// Response of the news document search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsResult {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub total_transactions: Option<i64>,

    /// The page of matched documents, under the wire key `result`.
    #[serde(default, rename = "result")]
    pub documents: Option<Documents>,
}

/// Article count under the wire key `result` of a volume query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    /// Number of matching articles in the requested timeframe.
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub count: Option<i64>,
}

/// Response of the news volume query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeResult {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub total_transactions: Option<i64>,

    /// The article count.
    #[serde(default, rename = "result")]
    pub volume: Option<Volume>,
}

impl VolumeResult {
    /// Get the article count, or 0 if the result was empty.
    #[must_use]
    pub fn count(&self) -> i64 {
        self.volume.as_ref().and_then(|volume| volume.count).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_wrapper_maps_url_key_to_article() {
        let json = r#"{"url": {"title": "IBM Builds a Smarter Planet", "author": "J. Doe"}}"#;
        let wrapper: Url = serde_json::from_str(json).unwrap();

        let article = wrapper.article.unwrap();
        assert_eq!(article.title.as_deref(), Some("IBM Builds a Smarter Planet"));
        assert_eq!(article.author.as_deref(), Some("J. Doe"));
    }

    #[test]
    fn document_walks_containment_chain() {
        let json = r#"{
            "id": "NEWS-doc-1",
            "timestamp": 1454944620,
            "source": {"enriched": {"url": {"title": "Quarterly results"}}}
        }"#;
        let document: Document = serde_json::from_str(json).unwrap();

        assert_eq!(document.article().unwrap().title.as_deref(), Some("Quarterly results"));
    }

    #[test]
    fn documents_maps_docs_key_and_paginates() {
        let json = r#"{"status": "OK", "next": "abc123", "docs": [{"id": "a"}, {"id": "b"}]}"#;
        let documents: Documents = serde_json::from_str(json).unwrap();

        assert_eq!(documents.documents.len(), 2);
        assert!(documents.has_more());
    }

    #[test]
    fn volume_result_maps_result_key() {
        let json = r#"{"status": "OK", "result": {"count": "57"}}"#;
        let volume: VolumeResult = serde_json::from_str(json).unwrap();

        assert_eq!(volume.count(), 57);
        assert_eq!(VolumeResult::default().count(), 0);
    }
}
