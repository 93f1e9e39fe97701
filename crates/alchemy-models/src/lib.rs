//! Typed response models for the AlchemyAPI language, vision, and news
//! analysis services.
//!
//! Every type in this crate mirrors one JSON response shape returned by the
//! service: entity extraction, keywords, concepts, taxonomy classification,
//! subject-action-object relations, sentiment, language detection, face
//! recognition, image tagging, scene text, and the news search API. The
//! records are passive values; decoding is the only way to build them, and
//! they never change afterwards.
//!
//! # Wire-format quirks handled here
//!
//! - Most numbers arrive quoted (`"score": "0.89"`) and are coerced.
//! - Publication dates arrive as compact `yyyymmddThhmmss` stamps; an
//!   unparseable date decodes to `None` instead of failing the document.
//! - Taxonomy values arrive either as objects or bare label strings.
//! - Several keys are renamed (`docSentiment`, `docs`, `result`,
//!   `iso-639-1`), and face bounding boxes stay verbatim strings.
//!
//! # Example
//!
//! ```
//! use alchemy_models::models::Entities;
//!
//! let body = r#"{
//!     "status": "OK",
//!     "language": "english",
//!     "entities": [{"type": "Company", "text": "IBM", "relevance": "0.92"}]
//! }"#;
//!
//! let response: Entities = alchemy_models::from_json_str(body)?;
//! assert_eq!(response.entities[0].text.as_deref(), Some("IBM"));
//! # Ok::<(), alchemy_models::DecodeError>(())
//! ```

mod de;
pub mod decode;
pub mod error;
pub mod models;

pub use decode::{from_json_slice, from_json_str, from_json_value};
pub use error::{DecodeError, DecodeResult};
