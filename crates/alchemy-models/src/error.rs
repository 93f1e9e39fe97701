//! Error types for decoding API responses.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

/// Errors produced while decoding a response body into a model.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    /// The body was not valid JSON, or did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
