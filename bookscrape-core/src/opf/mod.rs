//! EPUB package metadata (OPF `<package>`/`<metadata>`) generation
//!
//! [`PackageDocument`] owns every element. Titles, creators and contributors
//! get sequential ids per category (`title01`, `creator01`, `contributor01`)
//! and each one is described by companion `<meta refines="#id">` entries.
//! A meta is only ever appended when its `refines` target already exists.

mod document;
mod xml;

pub use xml::read_package;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id of the identifier named by `<package unique-identifier>`
pub const UNIQUE_IDENTIFIER_ID: &str = "pub_id";

// XML Namespaces
pub const NS_OPF: &str = "http://www.idpf.org/2007/opf";
pub const NS_DC: &str = "http://purl.org/dc/elements/1.1/";

/// OPF schema revision
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PackageVersion {
    #[serde(rename = "2.0")]
    V2,
    #[default]
    #[serde(rename = "3.0")]
    V3,
}

impl PackageVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V2 => "2.0",
            Self::V3 => "3.0",
        }
    }

    pub fn parse(version: &str) -> Option<Self> {
        match version {
            "2.0" => Some(Self::V2),
            "3.0" => Some(Self::V3),
            _ => None,
        }
    }

    /// Whether the revision carries a `dcterms:modified` timestamp
    pub fn supports_modified(&self) -> bool {
        matches!(self, Self::V3)
    }
}

/// Value of the `title-type` meta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleType {
    Main,
    Subtitle,
    Short,
    Collection,
    Edition,
    Expanded,
}

impl TitleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Subtitle => "subtitle",
            Self::Short => "short",
            Self::Collection => "collection",
            Self::Edition => "edition",
            Self::Expanded => "expanded",
        }
    }
}

/// MARC relator role of a creator or contributor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributorRole {
    Author,
    Translator,
    Editor,
    Illustrator,
}

impl ContributorRole {
    /// MARC relator code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Author => "aut",
            Self::Translator => "trl",
            Self::Editor => "edt",
            Self::Illustrator => "ill",
        }
    }

    fn category(&self) -> ContributorCategory {
        match self {
            Self::Author => ContributorCategory::Creator,
            _ => ContributorCategory::Contributor,
        }
    }
}

/// Value of the `identifier-type` meta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierType {
    Uuid,
    Isbn,
    Asin,
}

impl IdentifierType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uuid => "uuid",
            Self::Isbn => "isbn",
            Self::Asin => "asin",
        }
    }
}

/// Which sequence a contributor lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributorCategory {
    /// `dc:creator` (authors)
    Creator,
    /// `dc:contributor` (everyone else)
    Contributor,
}

/// Lookup key for a contributor added to a specific document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorRef {
    document: Uuid,
    category: ContributorCategory,
    id: String,
}

impl ContributorRef {
    /// Element id (`creator01`, `contributor02`, ...)
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn category(&self) -> ContributorCategory {
        self.category
    }
}

/// `dc:identifier`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierElement {
    pub value: String,
    pub id: String,
}

/// `dc:title`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleElement {
    pub value: String,
    pub id: String,
}

/// `dc:creator` / `dc:contributor`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorElement {
    pub value: String,
    pub id: String,
}

/// `<meta property="...">`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaElement {
    pub value: String,
    pub property: String,
    /// `#id` of the described element
    pub refines: Option<String>,
    pub scheme: Option<String>,
    pub lang: Option<String>,
}

impl MetaElement {
    /// Standalone meta
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            property: property.into(),
            refines: None,
            scheme: None,
            lang: None,
        }
    }

    /// Describe the element with the given id
    pub fn refining(mut self, id: &str) -> Self {
        self.refines = Some(format!("#{id}"));
        self
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }
}

/// Contents of the `<metadata>` element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMetadata {
    pub identifiers: Vec<IdentifierElement>,
    pub titles: Vec<TitleElement>,
    pub language: String,
    pub creators: Vec<ContributorElement>,
    pub contributors: Vec<ContributorElement>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub publisher: Option<String>,
    pub metas: Vec<MetaElement>,
}

impl PackageMetadata {
    /// Whether an identifier, title, creator or contributor has this id
    pub fn contains_id(&self, id: &str) -> bool {
        self.identifiers.iter().any(|e| e.id == id)
            || self.titles.iter().any(|e| e.id == id)
            || self.creators.iter().any(|e| e.id == id)
            || self.contributors.iter().any(|e| e.id == id)
    }

    /// Metas with the given property, in document order
    pub fn metas_with_property<'a>(
        &'a self,
        property: &'a str,
    ) -> impl Iterator<Item = &'a MetaElement> + 'a {
        self.metas.iter().filter(move |m| m.property == property)
    }
}

/// An OPF package document under construction
#[derive(Debug, Clone)]
pub struct PackageDocument {
    /// Distinguishes documents so references can't cross between them
    instance: Uuid,
    version: PackageVersion,
    unique_identifier_id: String,
    language: String,
    text_direction: Option<String>,
    metadata: PackageMetadata,
}
