//! Browserless `/content` API client

use super::{FetchResult, PageFetcher};
use crate::error::FetchError;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Default hosted Browserless content endpoint
pub const DEFAULT_ENDPOINT: &str = "https://chrome.browserless.io/content";

const USER_AGENT: &str = concat!("bookscrape/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
struct ContentRequest<'a> {
    url: &'a str,
}

/// Fetches pages through a headless Chrome hosted by Browserless
pub struct BrowserlessFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl BrowserlessFetcher {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::UpstreamFetchFailed(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PageFetcher for BrowserlessFetcher {
    async fn fetch_rendered_page(&self, access_token: &str, url: &str) -> FetchResult<Vec<u8>> {
        tracing::debug!(endpoint = %self.endpoint, url, "requesting rendered page");

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("token", access_token)])
            .json(&ContentRequest { url })
            .send()
            .await
            .map_err(|e| FetchError::UpstreamFetchFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::UpstreamFetchFailed(format!(
                "browserless returned status {status}: {body}"
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::UpstreamFetchFailed(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
