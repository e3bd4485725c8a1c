//! Error types for Bookscrape Core

use thiserror::Error;

/// Result type alias using BookscrapeError
pub type Result<T> = std::result::Result<T, BookscrapeError>;

/// Top-level error type for all Bookscrape operations
#[derive(Debug, Error)]
pub enum BookscrapeError {
    #[error(transparent)]
    Code(#[from] CodeError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Opf(#[from] OpfError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl BookscrapeError {
    /// Stable machine-readable code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            Self::Code(CodeError::MissingCode) => "missing_code",
            Self::Code(CodeError::InvalidAsin(_)) => "invalid_asin",
            Self::Code(CodeError::InvalidIsbn(_)) => "invalid_isbn",
            Self::Parse(ParseError::InvalidDateFormat(_)) => "invalid_date_format",
            Self::Parse(ParseError::UnknownLanguage(_)) => "unknown_language",
            Self::Parse(ParseError::FieldNotFound(_)) => "field_not_found",
            Self::Parse(ParseError::DocumentParseFailed(_)) => "document_parse_failed",
            Self::Parse(ParseError::InvalidSelector(_)) => "invalid_selector",
            Self::Opf(OpfError::UnknownReference(_)) => "unknown_reference",
            Self::Opf(OpfError::DanglingReference(_)) => "dangling_reference",
            Self::Opf(OpfError::Xml(_))
            | Self::Opf(OpfError::Io(_))
            | Self::Opf(OpfError::MalformedPackage(_)) => "opf_xml",
            Self::Fetch(FetchError::UpstreamFetchFailed(_)) => "upstream_fetch_failed",
        }
    }
}

/// Errors raised while validating a book code
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodeError {
    #[error("ASIN or ISBN-13 codes are mandatory")]
    MissingCode,

    #[error("invalid ASIN code: {0}")]
    InvalidAsin(String),

    #[error("invalid ISBN code: {0}")]
    InvalidIsbn(String),
}

/// Errors that occur while reading the product page
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("field not found: {0}")]
    FieldNotFound(String),

    #[error("document parse failed: {0}")]
    DocumentParseFailed(String),

    #[error("invalid selector: {0}")]
    InvalidSelector(String),
}

/// Errors raised by the package document builder
#[derive(Debug, Error)]
pub enum OpfError {
    #[error("unknown reference: {0}")]
    UnknownReference(String),

    #[error("refines target does not exist: {0}")]
    DanglingReference(String),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed package document: {0}")]
    MalformedPackage(String),
}

/// Errors raised by page retrieval
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream fetch failed: {0}")]
    UpstreamFetchFailed(String),
}
