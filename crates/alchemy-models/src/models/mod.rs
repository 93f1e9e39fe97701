//! Data models mirroring the service's JSON response shapes.
//!
//! All models use `#[serde(default)]` for optional fields and serde renames
//! where wire keys diverge from field names (`docSentiment`, `iso-639-1`,
//! `docs`, `result`). Records are plain values: built by deserialization,
//! immutable afterwards, structurally comparable.

mod common;
mod language;
mod news;
mod vision;

pub use common::{
    DisambiguatedLinks, KnowledgeGraph, PublicationDate, Quotation, Sentiment, SentimentType,
};
pub use language::{
    Action, Authors, CombinedResults, Concept, Concepts, DocumentAuthors, DocumentSentiment,
    DocumentText, DocumentTitle, Entities, Entity, Feed, Feeds, Keyword, Keywords, Language,
    Microformat, Microformats, RelationObject, SAORelation, SAORelations, Subject, Taxonomies,
    Taxonomy, Verb,
};
pub use news::{
    Article, Document, Documents, DocumentsResult, EnrichedTitle, Source, Url, Volume,
    VolumeResult,
};
pub use vision::{
    AgeRange, Gender, Identity, ImageFace, ImageFaces, ImageKeyword, ImageKeywords, ImageLink,
    SceneText, SceneTextLine, SceneTextWord, TextRegion,
};
