//! Langtree - a path-addressable translation resource store
//!
//! Langtree loads per-language YAML/JSON documents, merges them into one nested
//! key tree per language, and resolves dotted paths such as `menu.items[2].label`
//! to typed values. String values may reference other entries with `${path}` or
//! `${lang:path}` templates, and every accessor falls back from the default
//! language to the fallback language before returning the caller's default.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing and output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Resolution engine (values, paths, tree merging, templates, conversion)
//! - `error`: Library error types
//! - `registry`: Caller-owned registry with lifecycle and typed accessors
//! - `source`: Document sources (directory, in-memory) and document parsing
//!
//! ## Example
//!
//! ```
//! use langtree::{MemorySource, Options, Registry};
//!
//! let source = MemorySource::new()
//!     .with_document("en", "fruits.yaml", "fruits:\n  banana: banana\n")
//!     .with_document("zh-CN", "fruits.yaml", "fruits:\n  banana: 香蕉\n");
//!
//! let options = Options::new("zh-CN", "en").with_languages(["en", "zh-CN"]);
//! let registry = Registry::with_source(source, &options).unwrap();
//!
//! assert_eq!(registry.get_string("fruits.banana"), "香蕉");
//! assert_eq!(registry.get_string_in("en", "fruits.banana"), "banana");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod registry;
pub mod source;

pub use crate::core::{
    Arg, Convert, LanguageTree, Mapping, MergeError, MergeMode, NOT_FOUND_PLACEHOLDER,
    ResourcePath, Value, ValueKind,
};
pub use error::{Error, Result};
pub use registry::{Options, Registry, Resolution};
pub use source::{
    DirectorySource, Document, DocumentFormat, DocumentSource, MemorySource, parse_document,
};
