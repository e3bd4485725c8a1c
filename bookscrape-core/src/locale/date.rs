//! Publication date parsing

use super::Locale;
use crate::error::ParseError;
use chrono::NaiveDate;

const PT_BR_MONTHS: [(&str, &str); 12] = [
    ("janeiro", "January"),
    ("fevereiro", "February"),
    ("março", "March"),
    ("abril", "April"),
    ("maio", "May"),
    ("junho", "June"),
    ("julho", "July"),
    ("agosto", "August"),
    ("setembro", "September"),
    ("outubro", "October"),
    ("novembro", "November"),
    ("dezembro", "December"),
];

impl Locale {
    fn month_table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::PortugueseBrazil => &PT_BR_MONTHS,
            Locale::English => &[],
        }
    }

    /// Connective words dropped before parsing ("1 de novembro de 2019")
    fn filler_words(&self) -> &'static [&'static str] {
        match self {
            Locale::PortugueseBrazil => &["de"],
            Locale::English => &[],
        }
    }

    fn translate_month<'a>(&self, token: &'a str) -> &'a str {
        let lower = token.to_lowercase();
        self.month_table()
            .iter()
            .find(|(local, _)| *local == lower)
            .map(|(_, english)| *english)
            .unwrap_or(token)
    }
}

/// Parse `"<day> <month-name> <year>"` written in `locale`.
///
/// Month names missing from the locale table are left as-is and then fail
/// to parse.
pub fn parse_date(text: &str, locale: Locale) -> Result<NaiveDate, ParseError> {
    let normalized = text
        .split_whitespace()
        .filter(|token| !locale.filler_words().contains(&token.to_lowercase().as_str()))
        .map(|token| locale.translate_month(token))
        .collect::<Vec<_>>()
        .join(" ");

    NaiveDate::parse_from_str(&normalized, "%d %B %Y")
        .map_err(|_| ParseError::InvalidDateFormat(text.to_string()))
}
