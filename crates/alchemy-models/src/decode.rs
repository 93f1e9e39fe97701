//! Generic entry points for decoding response bodies.
//!
//! Every model in this crate is a plain `Deserialize` target; these functions
//! are the single fallible seam between a raw HTTP body and a typed record.

use serde::de::DeserializeOwned;

use crate::error::DecodeResult;

/// Decode a model from a JSON string.
pub fn from_json_str<T: DeserializeOwned>(body: &str) -> DecodeResult<T> {
    Ok(serde_json::from_str(body)?)
}

/// Decode a model from raw JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(body: &[u8]) -> DecodeResult<T> {
    Ok(serde_json::from_slice(body)?)
}

/// Decode a model from an already-parsed JSON value.
pub fn from_json_value<T: DeserializeOwned>(body: serde_json::Value) -> DecodeResult<T> {
    Ok(serde_json::from_value(body)?)
}
