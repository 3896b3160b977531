//! API error types

use thiserror::Error;

/// Transport-level failure (no HTTP response at all)
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Errors produced by `SearchClient::search_venues`
#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected before any request was made
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Server answered with a non-2xx status
    #[error("API error: {status} {status_text}")]
    Request { status: u16, status_text: String },

    #[error("network error: {0}")]
    Network(#[from] TransportError),

    /// Body is not JSON or does not have the response shape
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Body parsed but breaks a venue invariant
    #[error("invalid response: {0}")]
    Schema(String),
}

impl ApiError {
    /// HTTP status for `Request` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
