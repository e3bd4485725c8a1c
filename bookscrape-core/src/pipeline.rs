//! End-to-end lookup: code validation, page retrieval, extraction, assembly

use crate::code;
use crate::error::Result;
use crate::extract::FieldExtractor;
use crate::fetch::PageFetcher;
use crate::types::{assemble, BookCode, BookMetadataRecord};

/// Product page URL template; `{code}` is replaced by the ASIN or ISBN-13
pub const AMAZON_BR_PRODUCT_URL: &str = "https://www.amazon.com.br/dp/{code}";

/// Product page URL for a validated code
pub fn product_url(template: &str, code: &BookCode) -> String {
    template.replace("{code}", &code.value)
}

/// Look a book up by ASIN or ISBN.
///
/// Every failure is terminal; nothing is retried here.
pub async fn lookup_book(
    fetcher: &dyn PageFetcher,
    extractor: &FieldExtractor,
    access_token: &str,
    asin: &str,
    isbn: &str,
) -> Result<BookMetadataRecord> {
    let code = code::validate(asin, isbn)?;
    let url = product_url(AMAZON_BR_PRODUCT_URL, &code);
    tracing::info!(code = %code, %url, "looking up book");

    let page = fetcher.fetch_rendered_page(access_token, &url).await?;
    tracing::debug!(bytes = page.len(), "page fetched");

    let partial = extractor.extract_bytes(&page)?;
    Ok(assemble(partial, code))
}
