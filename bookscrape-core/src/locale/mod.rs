//! Locale-aware normalization of page text (dates, language names)

mod date;
mod language;

pub use date::parse_date;
pub use language::map_language;

use serde::{Deserialize, Serialize};

/// Locale the product page is written in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Locale {
    /// Brazilian Portuguese (amazon.com.br)
    #[default]
    PortugueseBrazil,
    /// English month names, no translation needed
    English,
}
