/*
[INPUT]:  Error sources (credentials, HTTP, serialization, response envelope)
[OUTPUT]: Structured error types exposing remote code and message
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the FixedFloat adapter
#[derive(Error, Debug)]
pub enum FixedFloatError {
    /// Client construction failed (missing credentials, bad base URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request primitive was called without an endpoint path
    #[error("Required params: endpoint path")]
    MissingEndpoint,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response envelope lacks `code` or `msg`
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// API returned a non-OK envelope
    #[error("Error {code}: {msg}")]
    Api { code: i64, msg: String },
}

impl FixedFloatError {
    /// Check if the remote service rejected the request
    pub fn is_api_error(&self) -> bool {
        matches!(self, FixedFloatError::Api { .. })
    }

    /// Remote error code, if this is an API error
    pub fn api_code(&self) -> Option<i64> {
        match self {
            FixedFloatError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Remote error message, if this is an API error
    pub fn api_message(&self) -> Option<&str> {
        match self {
            FixedFloatError::Api { msg, .. } => Some(msg),
            _ => None,
        }
    }

    /// Create an API error from envelope code and message
    pub fn api_error(code: i64, msg: impl Into<String>) -> Self {
        FixedFloatError::Api {
            code,
            msg: msg.into(),
        }
    }
}

/// Result type alias for FixedFloat operations
pub type Result<T> = std::result::Result<T, FixedFloatError>;
