//! Language display name lookup

use crate::error::ParseError;
use crate::types::LanguageTag;

const LANGUAGE_NAMES: &[(&str, LanguageTag)] = &[
    ("Português", LanguageTag::PortugueseBrazil),
    ("Inglês", LanguageTag::English),
    ("Espanhol", LanguageTag::Spanish),
    ("Francês", LanguageTag::French),
    ("Alemão", LanguageTag::German),
    ("Italiano", LanguageTag::Italian),
    ("Portuguese", LanguageTag::PortugueseBrazil),
    ("English", LanguageTag::English),
    ("Spanish", LanguageTag::Spanish),
    ("French", LanguageTag::French),
    ("German", LanguageTag::German),
    ("Italian", LanguageTag::Italian),
];

/// Exact, case-sensitive lookup of a language display name
pub fn map_language(text: &str) -> Result<LanguageTag, ParseError> {
    LANGUAGE_NAMES
        .iter()
        .find(|(name, _)| *name == text)
        .map(|(_, tag)| *tag)
        .ok_or_else(|| ParseError::UnknownLanguage(text.to_string()))
}
