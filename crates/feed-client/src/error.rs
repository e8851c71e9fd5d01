//! Error types for feed fetching.

use thiserror::Error;

/// Errors that can arise when fetching or parsing the storm report
/// feed. Any of these ends the cycle in the published error state.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Failed to construct the HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    /// Transport-level failure (connect, timeout, TLS).
    #[error("Request failed: {0}")]
    Request(reqwest::Error),

    /// Non-2xx response status.
    #[error("Feed returned HTTP {0}")]
    Status(u16),

    /// Response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(reqwest::Error),

    /// Response body was not valid JSON.
    #[error("Feed body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
