//! Language tags supported by the extractor

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical BCP 47 language tag for a book
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum LanguageTag {
    #[serde(rename = "pt-BR")]
    PortugueseBrazil,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "it")]
    Italian,
    /// Language could not be determined
    #[default]
    #[serde(rename = "und")]
    Unresolved,
}

impl LanguageTag {
    /// Tag string as written in `xml:lang` and `dc:language`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PortugueseBrazil => "pt-BR",
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
            Self::Italian => "it",
            Self::Unresolved => "und",
        }
    }

    /// Parse a tag string back into a known tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        [
            Self::PortugueseBrazil,
            Self::English,
            Self::Spanish,
            Self::French,
            Self::German,
            Self::Italian,
            Self::Unresolved,
        ]
        .into_iter()
        .find(|t| t.as_str() == tag)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
