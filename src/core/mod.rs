//! Core resolution engine.
//!
//! Leaf-first:
//! - `value`: Generic document values and the `Mapping` node type
//! - `path`: Dotted resource path parsing
//! - `tree`: Per-language tree merging and path resolution
//! - `template`: `${...}` placeholder expansion
//! - `convert`: Typed conversion with per-type sentinels
//! - `format`: printf-style positional substitution

pub mod convert;
pub mod format;
pub mod path;
pub mod template;
pub mod tree;
pub mod value;

pub use convert::*;
pub use format::{Arg, format_positional};
pub use path::{ResourcePath, Segment};
pub use template::{NOT_FOUND_PLACEHOLDER, interpolate};
pub use tree::{LanguageTree, MergeError, MergeMode};
pub use value::{Mapping, Value, ValueKind};
