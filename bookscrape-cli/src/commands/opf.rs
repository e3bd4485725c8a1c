//! OPF command implementation

use anyhow::{Context, Result};
use bookscrape_core::{BookMetadataRecord, ContributorRole, PackageDocument, PackageVersion};
use std::fs;

/// Build package metadata from a saved record
pub fn opf(input: &str, version: &str, translators: &[String], output: Option<&str>) -> Result<()> {
    let version = PackageVersion::parse(version)
        .with_context(|| format!("Unsupported package version: {}", version))?;

    let data =
        fs::read_to_string(input).with_context(|| format!("Failed to read input file: {}", input))?;
    let record: BookMetadataRecord = serde_json::from_str(&data)
        .with_context(|| format!("Invalid record in {}", input))?;

    let mut document = PackageDocument::from_record(version, &record);
    for translator in translators {
        document.add_contributor(translator, ContributorRole::Translator);
    }

    let xml = document.to_xml()?;

    match output {
        Some(path) => {
            fs::write(path, &xml)
                .with_context(|| format!("Failed to write output file: {}", path))?;
            tracing::info!("Wrote package metadata for '{}' to {}", record.title(), path);
        }
        None => println!("{xml}"),
    }

    Ok(())
}
