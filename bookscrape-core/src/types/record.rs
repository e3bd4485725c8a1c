//! The assembled book record - the output of the extraction pipeline

use super::{BookCode, CodeKind, LanguageTag, PartialBookMetadata};
use crate::code;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Immutable book metadata record.
///
/// Exactly one of `asin` / `isbn13` is non-empty. The record is only built by
/// [`assemble`] or by deserializing JSON that satisfies the same rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "RawRecord")]
pub struct BookMetadataRecord {
    title: String,
    authors: Vec<String>,
    cover_image_url: String,
    language: LanguageTag,
    publisher: String,
    published_at: NaiveDate,
    description: String,
    asin: String,
    isbn13: String,
}

/// Compose extracted page fields and a validated code into a record
pub fn assemble(partial: PartialBookMetadata, code: BookCode) -> BookMetadataRecord {
    let (asin, isbn13) = match code.kind {
        CodeKind::Asin => (code.value, String::new()),
        CodeKind::Isbn13 => (String::new(), code.value),
    };

    BookMetadataRecord {
        title: partial.title,
        authors: partial.authors,
        cover_image_url: partial.cover_image_url,
        language: partial.language,
        publisher: partial.publisher,
        published_at: partial.published_at,
        description: partial.description,
        asin,
        isbn13,
    }
}

impl BookMetadataRecord {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// First listed author
    pub fn primary_author(&self) -> Option<&str> {
        self.authors.first().map(|s| s.as_str())
    }

    pub fn cover_image_url(&self) -> &str {
        &self.cover_image_url
    }

    pub fn language(&self) -> LanguageTag {
        self.language
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn published_at(&self) -> NaiveDate {
        self.published_at
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn asin(&self) -> &str {
        &self.asin
    }

    pub fn isbn13(&self) -> &str {
        &self.isbn13
    }

    /// The populated identifier
    pub fn primary_identifier(&self) -> BookCode {
        if self.asin.is_empty() {
            BookCode::isbn13(self.isbn13.clone())
        } else {
            BookCode::asin(self.asin.clone())
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecord {
    title: String,
    authors: Vec<String>,
    cover_image_url: String,
    language: LanguageTag,
    publisher: String,
    published_at: NaiveDate,
    description: String,
    #[serde(default)]
    asin: String,
    #[serde(default)]
    isbn13: String,
}

impl TryFrom<RawRecord> for BookMetadataRecord {
    type Error = String;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        if raw.asin.is_empty() == raw.isbn13.is_empty() {
            return Err("exactly one of asin and isbn13 must be set".to_string());
        }
        if !raw.asin.is_empty() {
            code::validate(&raw.asin, "").map_err(|e| e.to_string())?;
        }
        if !raw.isbn13.is_empty()
            && !(raw.isbn13.len() == 13 && raw.isbn13.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(format!("isbn13 must be 13 digits: {}", raw.isbn13));
        }
        if raw.title.is_empty() || raw.authors.is_empty() {
            return Err("title and authors must not be empty".to_string());
        }

        Ok(Self {
            title: raw.title,
            authors: raw.authors,
            cover_image_url: raw.cover_image_url,
            language: raw.language,
            publisher: raw.publisher,
            published_at: raw.published_at,
            description: raw.description,
            asin: raw.asin,
            isbn13: raw.isbn13,
        })
    }
}
