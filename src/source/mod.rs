//! Document sources.
//!
//! A source knows which languages exist and yields the raw documents of a
//! language. The registry parses and merges them; sources do no parsing.
//!
//! - `directory`: `<root>/<language>/**/*.{yaml,yml,json}` on disk
//! - `memory`: documents registered in memory (e.g. via `include_str!`)
//! - `parse`: YAML/JSON document parsing into a [`Mapping`](crate::Mapping)

mod directory;
mod memory;
mod parse;

use std::path::Path;

pub use directory::DirectorySource;
pub use memory::MemorySource;
pub use parse::parse_document;

use crate::error::Result;

/// Where a registry reads language documents from.
pub trait DocumentSource: Send + Sync {
    /// Whether the source has documents for `language` at all.
    fn language_exists(&self, language: &str) -> bool;

    /// All documents of `language`, in merge order.
    fn documents(&self, language: &str) -> Result<Vec<Document>>;
}

/// Syntax of a raw document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file name: `.json` is JSON, anything else YAML.
    pub fn from_name(name: &str) -> Self {
        match extension(name) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Whether a file name looks like a language document.
pub fn is_document_file(name: &str) -> bool {
    matches!(
        extension(name).map(str::to_ascii_lowercase).as_deref(),
        Some("yaml" | "yml" | "json")
    )
}

fn extension(name: &str) -> Option<&str> {
    Path::new(name).extension().and_then(|e| e.to_str())
}

/// One raw document of a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name or other identifier, used in error messages.
    pub name: String,
    pub format: DocumentFormat,
    pub content: String,
}

impl Document {
    /// Create a document, inferring the format from `name`.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            format: DocumentFormat::from_name(&name),
            name,
            content: content.into(),
        }
    }
}
