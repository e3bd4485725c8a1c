//! Core types for extracted book metadata

mod code;
mod language;
mod metadata;
mod record;

pub use code::{BookCode, CodeKind};
pub use language::LanguageTag;
pub use metadata::PartialBookMetadata;
pub use record::{assemble, BookMetadataRecord};
