//! Bookscrape Core Library
//!
//! This crate turns a rendered book product page into a validated
//! [`BookMetadataRecord`] and builds EPUB package metadata (OPF) from it.
//! Page retrieval sits behind the [`fetch::PageFetcher`] trait; everything
//! else is synchronous and pure.

pub mod code;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod locale;
pub mod opf;
pub mod pipeline;
pub mod types;

pub use error::{BookscrapeError, CodeError, FetchError, OpfError, ParseError, Result};
pub use extract::{ExtractionRules, FieldExtractor};
pub use locale::Locale;
pub use opf::{ContributorRole, PackageDocument, PackageVersion, TitleType};
pub use types::{
    assemble, BookCode, BookMetadataRecord, CodeKind, LanguageTag, PartialBookMetadata,
};
