//! Extract command implementation

use super::print_record;
use anyhow::{Context, Result};
use bookscrape_core::{assemble, code, FieldExtractor};
use std::fs;

/// Extract a record from a saved product page
pub fn extract(input: &str, asin: &str, isbn: &str, json: bool) -> Result<()> {
    let code = code::validate(asin, isbn)?;

    let page = fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?;

    let extractor = FieldExtractor::amazon_br()?;
    let partial = extractor
        .extract_bytes(&page)
        .with_context(|| format!("Failed to extract metadata from {}", input))?;

    tracing::debug!("Extracted '{}'", partial.title);

    print_record(&assemble(partial, code), json)
}
