//! Book lookup handlers

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bookscrape_core::pipeline::lookup_book;
use bookscrape_core::{BookMetadataRecord, BookscrapeError, PackageDocument, PackageVersion};
use serde::Deserialize;

const MISSING_PARAMS: &str = r#"the query param "mobiAsin" and "browserlessToken" is required"#;

/// Edge caches keep a lookup for a day; browsers always revalidate
const CACHE_CONTROL: &str = "max-age=0, s-maxage=86400";

const OPF_CONTENT_TYPE: &str = "application/oebps-package+xml";

/// Query parameters for the lookup endpoints
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupQuery {
    pub mobi_asin: Option<String>,
    pub browserless_token: Option<String>,

    /// OPF revision, `2.0` or `3.0` (only for `/opf`)
    pub version: Option<String>,
}

/// Look a book up by ASIN and return its metadata record as JSON
pub async fn amazon_record(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> Response {
    let record = match lookup(&state, &query).await {
        Ok(record) => record,
        Err(response) => return response,
    };

    match serde_json::to_string(&record) {
        Ok(body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/json; charset=utf-8"),
                (header::CACHE_CONTROL, CACHE_CONTROL),
            ],
            body,
        )
            .into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

/// Look a book up by ASIN and return EPUB package metadata for it
pub async fn amazon_opf(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> Response {
    let version = match query.version.as_deref() {
        None => PackageVersion::default(),
        Some(v) => match PackageVersion::parse(v) {
            Some(version) => version,
            None => {
                return (
                    StatusCode::BAD_REQUEST,
                    format!("unsupported package version: {v}"),
                )
                    .into_response()
            }
        },
    };

    let record = match lookup(&state, &query).await {
        Ok(record) => record,
        Err(response) => return response,
    };

    match PackageDocument::from_record(version, &record).to_xml() {
        Ok(xml) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, OPF_CONTENT_TYPE),
                (header::CACHE_CONTROL, CACHE_CONTROL),
            ],
            xml,
        )
            .into_response(),
        Err(e) => failure(e.into()),
    }
}

/// Run the lookup, mapping missing params and failures to responses
async fn lookup(state: &AppState, query: &LookupQuery) -> Result<BookMetadataRecord, Response> {
    let (Some(asin), Some(token)) = (
        query.mobi_asin.as_deref().filter(|s| !s.is_empty()),
        query.browserless_token.as_deref().filter(|s| !s.is_empty()),
    ) else {
        return Err((StatusCode::BAD_REQUEST, MISSING_PARAMS).into_response());
    };

    lookup_book(state.fetcher.as_ref(), &state.extractor, token, asin, "")
        .await
        .map_err(failure)
}

fn failure(err: BookscrapeError) -> Response {
    tracing::error!(code = err.code(), "lookup failed: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
}
