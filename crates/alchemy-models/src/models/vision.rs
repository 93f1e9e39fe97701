//! Response models for the image-analysis endpoints: face recognition,
//! image keywords, main-image extraction, and scene text.

use serde::{Deserialize, Serialize};

use super::common::{DisambiguatedLinks, KnowledgeGraph};
use crate::de;

/// Estimated age range of a detected face.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeRange {
    /// The estimated range, e.g. `25-34`.
    #[serde(default)]
    pub age_range: Option<String>,

    /// Likelihood that the range is correct.
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub score: Option<f64>,
}

/// Estimated gender of a detected face.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gender {
    /// The estimated gender, e.g. `FEMALE`.
    #[serde(default)]
    pub gender: Option<String>,

    /// Likelihood that the estimate is correct.
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub score: Option<f64>,
}

/// Identity of a face recognized as a known public figure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// The recognized name.
    #[serde(default)]
    pub name: Option<String>,

    /// Likelihood that the name corresponds to the face.
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub score: Option<f64>,

    /// Linked-data references disambiguating the identity.
    #[serde(default)]
    pub disambiguated: Option<DisambiguatedLinks>,

    /// Knowledge-graph path for the identity.
    #[serde(default)]
    pub knowledge_graph: Option<KnowledgeGraph>,
}

/// A face detected in an image.
///
/// The bounding box arrives as strings on the wire (unlike the scene-text
/// endpoint, which sends real integers); the values are preserved verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFace {
    /// Left-most pixel of the detected face.
    #[serde(default)]
    pub position_x: Option<String>,

    /// Top-most pixel of the detected face.
    #[serde(default)]
    pub position_y: Option<String>,

    /// Width of the detected face, in pixels.
    #[serde(default)]
    pub width: Option<String>,

    /// Height of the detected face, in pixels.
    #[serde(default)]
    pub height: Option<String>,

    /// Estimated age of the face.
    #[serde(default)]
    pub age: Option<AgeRange>,

    /// Estimated gender of the face.
    #[serde(default)]
    pub gender: Option<Gender>,

    /// Identity, when the face matches a known public figure.
    #[serde(default)]
    pub identity: Option<Identity>,
}

/// Response of the face-recognition endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFaces {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub total_transactions: Option<i64>,

    /// The detected faces.
    #[serde(default)]
    pub image_faces: Vec<ImageFace>,
}

/// A keyword describing the contents of an image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageKeyword {
    /// The keyword text, e.g. `cat`.
    #[serde(default)]
    pub text: Option<String>,

    /// Likelihood that the keyword applies.
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub score: Option<f64>,
}

/// Response of the image-tagging endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageKeywords {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub total_transactions: Option<i64>,

    /// The keywords describing the image, most likely first.
    #[serde(default)]
    pub image_keywords: Vec<ImageKeyword>,
}

/// Response of the main-image-extraction endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageLink {
    #[serde(default)]
    pub status: Option<String>,

    /// The page the image was extracted from.
    #[serde(default)]
    pub url: Option<String>,

    /// URL of the page's main image.
    #[serde(default)]
    pub image: Option<String>,
}

/// Pixel region of an image containing detected text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRegion {
    #[serde(default)]
    pub x: Option<i64>,

    #[serde(default)]
    pub y: Option<i64>,

    #[serde(default)]
    pub width: Option<i64>,

    #[serde(default)]
    pub height: Option<i64>,
}

/// A single word within a detected line of scene text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneTextWord {
    /// Likelihood that the word was read correctly.
    #[serde(default)]
    pub confidence: Option<f64>,

    /// Region of the image containing the word.
    #[serde(default)]
    pub region: Option<TextRegion>,

    /// The word itself.
    #[serde(default)]
    pub text: Option<String>,
}

/// A line of text detected in an image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneTextLine {
    /// Likelihood that the line was read correctly.
    #[serde(default)]
    pub confidence: Option<f64>,

    /// Region of the image containing the line.
    #[serde(default)]
    pub region: Option<TextRegion>,

    /// The full line of text.
    #[serde(default)]
    pub text: Option<String>,

    /// The individual words of the line.
    #[serde(default)]
    pub words: Vec<SceneTextWord>,
}

/// Response of the scene-text-recognition endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneText {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub total_transactions: Option<i64>,

    /// All identified lines of text, joined.
    #[serde(default)]
    pub scene_text: Option<String>,

    /// The individual lines of text.
    #[serde(default)]
    pub scene_text_lines: Vec<SceneTextLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_positions_stay_verbatim_strings() {
        let json = r#"{
            "positionX": "42",
            "positionY": "57",
            "width": "103",
            "height": "102",
            "age": {"ageRange": "25-34", "score": "0.391566"},
            "gender": {"gender": "FEMALE", "score": "0.988861"}
        }"#;
        let face: ImageFace = serde_json::from_str(json).unwrap();

        assert_eq!(face.position_x.as_deref(), Some("42"));
        assert_eq!(face.height.as_deref(), Some("102"));
        assert_eq!(face.age.as_ref().unwrap().age_range.as_deref(), Some("25-34"));
        assert_eq!(face.gender.as_ref().unwrap().score, Some(0.988861));
        assert!(face.identity.is_none());
    }

    #[test]
    fn identity_carries_disambiguation() {
        let json = r#"{
            "name": "Barack Obama",
            "score": "0.970688",
            "disambiguated": {
                "name": "Barack Obama",
                "subType": ["Politician", "President"],
                "dbpedia": "http://dbpedia.org/resource/Barack_Obama"
            }
        }"#;
        let identity: Identity = serde_json::from_str(json).unwrap();

        assert_eq!(identity.name.as_deref(), Some("Barack Obama"));
        assert_eq!(identity.score, Some(0.970688));
        let links = identity.disambiguated.unwrap();
        assert_eq!(links.sub_type.map(|s| s.len()), Some(2));
    }

    #[test]
    fn scene_text_regions_are_numeric() {
        let json = r#"{
            "status": "OK",
            "totalTransactions": "4",
            "sceneText": "notice\nincreased patrols",
            "sceneTextLines": [{
                "confidence": 0.9602,
                "region": {"x": 12, "y": 86, "width": 311, "height": 44},
                "text": "notice",
                "words": [{
                    "confidence": 0.9602,
                    "region": {"x": 12, "y": 86, "width": 311, "height": 44},
                    "text": "notice"
                }]
            }]
        }"#;
        let scene: SceneText = serde_json::from_str(json).unwrap();

        assert_eq!(scene.total_transactions, Some(4));
        let line = &scene.scene_text_lines[0];
        assert_eq!(line.region.as_ref().unwrap().x, Some(12));
        assert_eq!(line.words[0].text.as_deref(), Some("notice"));
    }
}
