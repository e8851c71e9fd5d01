//! HTTP client for the storm report feed.

use report_core::{parse_feed, FeedPayload};
use reqwest::Client;
use tracing::debug;

use crate::config::{FETCH_TIMEOUT, USER_AGENT};
use crate::error::FeedError;

/// Fetches the feed and runs the shape check on the body.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Create a client with the fixed request timeout and User-Agent.
    pub fn new() -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FeedError::Client)?;

        Ok(Self { client })
    }

    /// Fetch the feed body from `url` and shape-check it.
    pub async fn fetch(&self, url: &str) -> Result<FeedPayload, FeedError> {
        debug!(url, "Fetching feed");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(FeedError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(FeedError::Body)?;
        Ok(parse_feed(&body)?)
    }
}
