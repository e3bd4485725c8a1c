//! CLI command implementations

mod code;
mod extract;
mod lookup;
mod opf;

pub use code::code;
pub use extract::extract;
pub use lookup::lookup;
pub use opf::opf;

use anyhow::Result;
use bookscrape_core::BookMetadataRecord;

/// Print a record as pretty JSON or as aligned fields
fn print_record(record: &BookMetadataRecord, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    println!("Title:       {}", record.title());
    println!("Authors:     {}", record.authors().join(", "));
    println!("Language:    {}", record.language());
    println!("Publisher:   {}", record.publisher());
    println!("Published:   {}", record.published_at());
    println!("Cover:       {}", record.cover_image_url());
    println!("Code:        {}", record.primary_identifier());
    if !record.description().is_empty() {
        println!("Description: {}", record.description());
    }

    Ok(())
}
