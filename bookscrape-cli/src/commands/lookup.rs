//! Lookup command implementation

use super::print_record;
use anyhow::{Context, Result};
use bookscrape_core::fetch::BrowserlessFetcher;
use bookscrape_core::pipeline::lookup_book;
use bookscrape_core::FieldExtractor;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Fetch the product page through Browserless and print the record
pub async fn lookup(
    asin: &str,
    isbn: &str,
    token: &str,
    endpoint: &str,
    timeout: u64,
    json: bool,
) -> Result<()> {
    let fetcher = BrowserlessFetcher::new(endpoint, Duration::from_secs(timeout))?;
    let extractor = FieldExtractor::amazon_br()?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Fetching product page...");

    let result = lookup_book(&fetcher, &extractor, token, asin, isbn).await;
    pb.finish_and_clear();

    let record = result.context("Lookup failed")?;
    tracing::info!("Found '{}'", record.title());

    print_record(&record, json)
}
