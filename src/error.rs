use std::{io, path::PathBuf};

use thiserror::Error;

use crate::core::{MergeError, ValueKind};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while loading documents and resolving paths.
///
/// Lookup failures (`InvalidPath` through `NotASequence`) are recoverable and
/// are swallowed by the typed accessors, which return the caller's default.
#[derive(Debug, Error)]
pub enum Error {
    #[error("path [{path}] is invalid: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("language [{0}] is not loaded")]
    LanguageNotLoaded(String),

    #[error("language [{0}] does not exist in the document source")]
    LanguageNotOnStorage(String),

    /// An intermediate segment resolved to something other than a mapping.
    #[error(
        "path [{}] does not point to an object, can't continue to get value",
        mark_segment(.resolved, .segment, .remaining)
    )]
    PathNotObject {
        resolved: String,
        segment: String,
        remaining: String,
    },

    #[error("path [{0}] does not point to a value")]
    PathNotValue(String),

    #[error("index {index} is out of range for sequence [{key}] of length {len}")]
    IndexOutOfRange { key: String, index: i64, len: usize },

    #[error("index of key <{key}[{index}]> is invalid")]
    InvalidIndex { key: String, index: String },

    #[error("[{key}] holds a {found}, not a sequence")]
    NotASequence { key: String, found: ValueKind },

    #[error(transparent)]
    Merge(#[from] MergeError),

    #[error("registry is not initialized")]
    NotInitialized,

    #[error("registry has already been initialized")]
    AlreadyInitialized,

    #[error("{role} language [{language}] is not loaded")]
    DistinguishedLanguageMissing {
        role: &'static str,
        language: String,
    },

    #[error("a default value must be provided")]
    MissingDefault,

    #[error("document root {0:?} is not a directory")]
    SourceRoot(PathBuf),

    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse document {document}: {message}")]
    Parse { document: String, message: String },
}

impl Error {
    /// True for errors that mean "nothing usable at this path".
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            Error::InvalidPath { .. }
                | Error::LanguageNotLoaded(_)
                | Error::PathNotObject { .. }
                | Error::PathNotValue(_)
                | Error::IndexOutOfRange { .. }
                | Error::InvalidIndex { .. }
                | Error::NotASequence { .. }
        )
    }
}

/// Render `a.b.<c>.d.e`, omitting empty sides.
fn mark_segment(resolved: &str, segment: &str, remaining: &str) -> String {
    let mut parts = Vec::with_capacity(3);
    if !resolved.is_empty() {
        parts.push(resolved.to_string());
    }
    parts.push(format!("<{}>", segment));
    if !remaining.is_empty() {
        parts.push(remaining.to_string());
    }
    parts.join(".")
}
