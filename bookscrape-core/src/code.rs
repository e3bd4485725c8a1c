//! Book code validation (ASIN / ISBN) and ISBN-10 to ISBN-13 conversion

use crate::error::CodeError;
use crate::types::BookCode;
use once_cell::sync::Lazy;
use regex::Regex;

/// Digits with hyphens anywhere, optionally ending in an `X` check character
static ISBN_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9-]*[0-9][0-9-]*[Xx]?$").expect("valid regex"));

/// Validate the book code pair, preferring the ASIN when both are given.
///
/// ISBN-10 input is converted to ISBN-13; hyphens are stripped from ISBNs.
pub fn validate(asin: &str, isbn: &str) -> Result<BookCode, CodeError> {
    if asin.is_empty() && isbn.is_empty() {
        return Err(CodeError::MissingCode);
    }

    if !asin.is_empty() {
        if !asin.to_lowercase().starts_with('b') {
            return Err(CodeError::InvalidAsin(asin.to_string()));
        }
        return Ok(BookCode::asin(asin));
    }

    if !ISBN_SHAPE.is_match(isbn) {
        return Err(CodeError::InvalidIsbn(isbn.to_string()));
    }

    let digits: String = isbn.chars().filter(|c| c.is_ascii_digit()).collect();
    let has_check_x = isbn.ends_with(['X', 'x']);

    match (digits.len(), has_check_x) {
        (9, true) | (10, false) => Ok(BookCode::isbn13(isbn10_to_13(&digits))),
        (13, false) => Ok(BookCode::isbn13(digits)),
        _ => Err(CodeError::InvalidIsbn(isbn.to_string())),
    }
}

/// Convert the digits of an ISBN-10 to ISBN-13.
///
/// Only the first nine digits are used; the ISBN-10 check character is
/// replaced by a freshly computed ISBN-13 checksum.
pub fn isbn10_to_13(isbn10: &str) -> String {
    let mut isbn13 = String::with_capacity(13);
    isbn13.push_str("978");
    isbn13.extend(isbn10.chars().filter(|c| c.is_ascii_digit()).take(9));

    let check = isbn13_checksum(&isbn13);
    isbn13.push(char::from(b'0' + check));
    isbn13
}

/// Checksum digit over the first twelve digits, weights 1,3 alternating
pub fn isbn13_checksum(first_twelve: &str) -> u8 {
    let sum: u32 = first_twelve
        .bytes()
        .filter(u8::is_ascii_digit)
        .take(12)
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 0 {
                digit
            } else {
                digit * 3
            }
        })
        .sum();

    ((10 - sum % 10) % 10) as u8
}
