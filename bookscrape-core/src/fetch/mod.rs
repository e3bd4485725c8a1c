//! Rendered page retrieval

mod browserless;

pub use browserless::{BrowserlessFetcher, DEFAULT_ENDPOINT};

use crate::error::FetchError;
use async_trait::async_trait;

/// Result type for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Source of fully rendered product pages
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the rendered HTML of `url`, authenticating with `access_token`
    async fn fetch_rendered_page(&self, access_token: &str, url: &str) -> FetchResult<Vec<u8>>;
}
