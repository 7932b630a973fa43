use std::collections::HashMap;

use super::{Document, DocumentSource};
use crate::error::{Error, Result};

/// Documents held in memory, the counterpart of an embedded bundle.
///
/// ```
/// use langtree::MemorySource;
///
/// let source = MemorySource::new()
///     .with_document("en", "fruits.yaml", "fruits:\n  banana: banana\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    languages: HashMap<String, Vec<Document>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MemorySource::add_document`].
    pub fn with_document(
        mut self,
        language: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.add_document(language, name, content);
        self
    }

    /// Append a document; documents of a language merge in insertion order.
    pub fn add_document(
        &mut self,
        language: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) {
        self.languages
            .entry(language.into())
            .or_default()
            .push(Document::new(name, content));
    }
}

impl DocumentSource for MemorySource {
    fn language_exists(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    fn documents(&self, language: &str) -> Result<Vec<Document>> {
        self.languages
            .get(language)
            .cloned()
            .ok_or_else(|| Error::LanguageNotOnStorage(language.to_string()))
    }
}
