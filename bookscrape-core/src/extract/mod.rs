//! Field extraction from rendered product pages

mod rules;

pub use rules::ExtractionRules;

use crate::error::ParseError;
use crate::locale::{map_language, parse_date, Locale};
use crate::types::PartialBookMetadata;
use scraper::{ElementRef, Html, Selector};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Parse a rendered page into a queryable document
pub fn parse_page(bytes: &[u8]) -> Result<Html, ParseError> {
    let text =
        std::str::from_utf8(bytes).map_err(|e| ParseError::DocumentParseFailed(e.to_string()))?;
    Ok(Html::parse_document(text))
}

/// Compiled location rules, reusable across pages
#[derive(Debug)]
pub struct FieldExtractor {
    title: Selector,
    authors: Selector,
    description: Selector,
    publisher: Selector,
    language: Selector,
    publication_date: Selector,
    cover_image: Selector,
    cover_image_attribute: String,
    locale: Locale,
}

impl FieldExtractor {
    /// Compile the rules' selectors
    pub fn new(rules: &ExtractionRules, locale: Locale) -> Result<Self, ParseError> {
        Ok(Self {
            title: compile(&rules.title)?,
            authors: compile(&rules.authors)?,
            description: compile(&rules.description)?,
            publisher: compile(&rules.publisher)?,
            language: compile(&rules.language)?,
            publication_date: compile(&rules.publication_date)?,
            cover_image: compile(&rules.cover_image)?,
            cover_image_attribute: rules.cover_image_attribute.clone(),
            locale,
        })
    }

    /// Extractor for amazon.com.br pages
    pub fn amazon_br() -> Result<Self, ParseError> {
        Self::new(&ExtractionRules::amazon_br(), Locale::PortugueseBrazil)
    }

    /// Extract every field, stopping at the first one that fails
    pub fn extract(&self, document: &Html) -> Result<PartialBookMetadata, ParseError> {
        let title = self.scalar(document, &self.title, "title")?;
        let authors = self.authors(document)?;
        let description = self.description(document)?;
        let publisher = self.scalar(document, &self.publisher, "publisher")?;

        let raw_language = self.scalar(document, &self.language, "language")?;
        let language = map_language(&raw_language)?;

        let raw_date = self.scalar(document, &self.publication_date, "publicationDate")?;
        let published_at = parse_date(&raw_date, self.locale)?;

        let cover_image_url = self.cover_image(document)?;

        Ok(PartialBookMetadata {
            title,
            authors,
            cover_image_url,
            language,
            publisher,
            published_at,
            description,
        })
    }

    /// Parse and extract in one step
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<PartialBookMetadata, ParseError> {
        let document = parse_page(bytes)?;
        self.extract(&document)
    }

    fn scalar(
        &self,
        document: &Html,
        selector: &Selector,
        field: &str,
    ) -> Result<String, ParseError> {
        document
            .select(selector)
            .next()
            .map(element_text)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ParseError::FieldNotFound(field.to_string()))
    }

    fn authors(&self, document: &Html) -> Result<Vec<String>, ParseError> {
        let authors: Vec<String> = document.select(&self.authors).map(element_text).collect();

        if authors.is_empty() || authors.iter().any(|a| a.is_empty()) {
            return Err(ParseError::FieldNotFound("authors".to_string()));
        }
        Ok(authors)
    }

    fn description(&self, document: &Html) -> Result<String, ParseError> {
        let fragments: Vec<ElementRef> = document.select(&self.description).collect();
        let matched: HashSet<_> = fragments.iter().map(|el| el.id()).collect();

        // Nested matches would repeat their text through the outer fragment
        let description: String = fragments
            .iter()
            .filter(|el| !el.ancestors().any(|a| matched.contains(&a.id())))
            .map(|el| element_text(*el))
            .collect();

        if description.is_empty() {
            return Err(ParseError::FieldNotFound("description".to_string()));
        }
        Ok(description)
    }

    fn cover_image(&self, document: &Html) -> Result<String, ParseError> {
        let not_found = || ParseError::FieldNotFound("coverImage".to_string());

        let raw = document
            .select(&self.cover_image)
            .find_map(|el| el.value().attr(&self.cover_image_attribute))
            .ok_or_else(not_found)?;

        let sizes: IndexMap<String, [u32; 2]> =
            serde_json::from_str(raw).map_err(|_| not_found())?;

        largest_by_height(&sizes).ok_or_else(not_found)
    }
}

fn compile(selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector)
        .map_err(|e| ParseError::InvalidSelector(format!("{selector}: {e:?}")))
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// URL whose height is strictly greater than every earlier entry, in
/// attribute order
fn largest_by_height(sizes: &IndexMap<String, [u32; 2]>) -> Option<String> {
    let mut best: Option<(&String, u32)> = None;
    for (url, [_, height]) in sizes {
        if best.map_or(true, |(_, h)| *height > h) {
            best = Some((url, *height));
        }
    }
    best.map(|(url, _)| url.clone())
}
