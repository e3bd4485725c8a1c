//! Application state

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use bookscrape_core::fetch::{BrowserlessFetcher, PageFetcher};
use bookscrape_core::FieldExtractor;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Source of rendered product pages
    pub fetcher: Arc<dyn PageFetcher>,

    /// Compiled amazon.com.br extraction rules
    pub extractor: Arc<FieldExtractor>,

    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create state backed by the configured Browserless endpoint
    pub fn new(config: ServerConfig) -> Result<Self> {
        let fetcher = BrowserlessFetcher::new(&config.browserless_url, config.fetch_timeout)
            .context("Failed to build Browserless client")?;

        Self::with_fetcher(config, Arc::new(fetcher))
    }

    /// Create state around any page source
    pub fn with_fetcher(config: ServerConfig, fetcher: Arc<dyn PageFetcher>) -> Result<Self> {
        let extractor = FieldExtractor::amazon_br().context("Failed to compile extraction rules")?;

        Ok(Self {
            fetcher,
            extractor: Arc::new(extractor),
            config: Arc::new(config),
        })
    }
}
