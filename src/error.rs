//! Error types for the petstore test suite.

use thiserror::Error;

/// Top-level error type for API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failure (connect, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded as the expected JSON shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Fixture setup did not report success.
    #[error("fixture setup failed: {0}")]
    Setup(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, Error>;
