//! Error types for the Tally client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the task endpoints
#[derive(Debug, Error)]
pub enum ClientError {
    /// Task endpoint answered with a non-success status
    #[error("Failed to fetch data: {status} - {status_text}")]
    Fetch {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        status_text: String,
    },

    /// Completion endpoint answered with a non-success status
    #[error("Failed to post result: {status} - {status_text}")]
    Submit {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        status_text: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}
