use std::{
    fs,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use super::{Document, DocumentSource, is_document_file};
use crate::error::{Error, Result};

/// Reads `<root>/<language>/` recursively.
///
/// Every `.yaml`, `.yml` and `.json` file below the language directory is a
/// document. Files are returned sorted by name within each directory, so the
/// merge order (and therefore which document wins a collision) is stable.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::SourceRoot(root));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Language directory, or `None` for names that would leave the root.
    fn language_dir(&self, language: &str) -> Option<PathBuf> {
        let escapes = language.is_empty()
            || language == "."
            || language == ".."
            || language.contains(['/', '\\']);
        if escapes {
            None
        } else {
            Some(self.root.join(language))
        }
    }
}

impl DocumentSource for DirectorySource {
    fn language_exists(&self, language: &str) -> bool {
        self.language_dir(language).is_some_and(|dir| dir.is_dir())
    }

    fn documents(&self, language: &str) -> Result<Vec<Document>> {
        let dir = self
            .language_dir(language)
            .filter(|dir| dir.is_dir())
            .ok_or_else(|| Error::LanguageNotOnStorage(language.to_string()))?;

        let mut documents = Vec::new();
        for entry in WalkDir::new(&dir).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::Io {
                path: e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.clone()),
                source: e.into(),
            })?;

            let name = entry.file_name().to_string_lossy();
            if !entry.file_type().is_file() || !is_document_file(&name) {
                continue;
            }

            let path = entry.path();
            let content = fs::read_to_string(path).map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let name = path
                .strip_prefix(&self.root)
                .unwrap_or(path)
                .to_string_lossy()
                .replace('\\', "/");
            documents.push(Document::new(name, content));
        }

        tracing::debug!(language, count = documents.len(), dir = %dir.display(), "found documents");
        Ok(documents)
    }
}
