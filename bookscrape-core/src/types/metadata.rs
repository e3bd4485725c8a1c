//! Metadata read from a product page, before the book code is attached

use super::LanguageTag;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Every field the page extractor produces
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartialBookMetadata {
    /// Book title
    pub title: String,

    /// Authors in page order
    pub authors: Vec<String>,

    /// URL of the largest cover image variant
    pub cover_image_url: String,

    /// Book language
    pub language: LanguageTag,

    /// Publisher name
    pub publisher: String,

    /// Publication date
    pub published_at: NaiveDate,

    /// Concatenated description fragments
    pub description: String,
}
