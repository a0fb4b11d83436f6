//! Errors surfaced by the HTTP boundary

use thiserror::Error;

/// Failure of a single API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be built or sent (bad URL, DNS, connection refused, ...)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// The response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}
