//! Error types for the API client.
//!
//! Every failure the client can hit falls into one of a few kinds. Views only
//! care that a call failed; the kind is there for the log file.

use thiserror::Error;

/// Errors returned by [`crate::client::ApiClient::request`].
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection refused,
    /// timeout) or the body could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a status outside the 2xx range.
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// The body was not valid JSON, or did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The path could not be joined onto the origin.
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl ApiError {
    /// Short label used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "network",
            ApiError::Status { .. } => "status",
            ApiError::Parse(_) => "parse",
            ApiError::InvalidUrl { .. } => "invalid_url",
        }
    }

    /// The HTTP status code, when the failure carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status } => Some(*status),
            _ => None,
        }
    }
}
