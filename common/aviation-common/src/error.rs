//! Error types for upstream aviation API calls
//!
//! Every failure a tool can hit, from argument validation to transport
//! errors. The `Display` text of each variant is what the caller sees in the
//! `isError` result envelope.

use thiserror::Error;

/// Errors raised while building, sending or shaping an upstream request
#[derive(Error, Debug)]
pub enum AviationError {
    /// The domain's credentials are not configured
    #[error("{api} API requires credentials: set {vars}")]
    MissingCredential {
        api: &'static str,
        vars: &'static str,
    },

    /// An enumerated parameter received a value outside its declared set
    #[error("Invalid value for {param}: '{value}' (expected one of: {expected})")]
    InvalidValue {
        param: &'static str,
        value: String,
        expected: String,
    },

    /// A required parameter or parameter combination is missing
    #[error("{0}")]
    MissingParameter(String),

    /// A state or region code is not in the chart region table
    #[error("Unknown state or region: {0}")]
    UnknownRegion(String),

    /// The upstream answered with a non-2xx status
    #[error("{api} API Error ({status}): {body}")]
    Upstream {
        api: &'static str,
        status: u16,
        body: String,
    },

    /// The request could not be sent or the body could not be read
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A URL could not be built from the configured base
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// JSON encoding or decoding failed
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The upstream body did not have the expected shape
    #[error("unexpected {api} response: {reason}")]
    UnexpectedResponse { api: &'static str, reason: String },
}

impl AviationError {
    pub fn unexpected(api: &'static str, reason: impl Into<String>) -> Self {
        AviationError::UnexpectedResponse {
            api,
            reason: reason.into(),
        }
    }
}

/// Result type alias for upstream operations
pub type AviationResult<T> = Result<T, AviationError>;
