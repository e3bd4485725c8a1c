//! Code command implementation

use anyhow::Result;
use bookscrape_core::code::validate;
use bookscrape_core::CodeKind;

/// Validate an ASIN/ISBN pair and print the code that would be looked up
pub fn code(asin: &str, isbn: &str) -> Result<()> {
    let code = validate(asin, isbn)?;

    let kind = match code.kind {
        CodeKind::Asin => "ASIN",
        CodeKind::Isbn13 => "ISBN-13",
    };
    println!("{kind} {}", code.value);

    Ok(())
}
