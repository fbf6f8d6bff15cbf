//! Error types for Bookshelf Core

use thiserror::Error;

/// A failed request issued through the request hook.
///
/// Every variant is reported to the user the same way (an `error`
/// notification); the variants only change the message text.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed with status code {status} ({url})")]
    Status { status: u16, url: String },

    #[error("Invalid response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Invalid request body: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Errors raised while building a client configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid notification lifetime '{0}': expected whole seconds")]
    InvalidNoticeTtl(String),
}
