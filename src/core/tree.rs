use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    path::{ResourcePath, Segment, join_segments},
    value::{Mapping, Value, ValueKind},
};
use crate::error::{Error, Result};

/// How a merge treats a leaf path that already holds a different value.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MergeMode {
    /// Later documents silently win.
    #[default]
    Overwrite,
    /// Later documents win and the collision is logged.
    Warn,
    /// Collisions fail the merge.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("cannot set [{path}] in language [{language}]: [{blocked_at}] holds a {found}")]
    NotAMapping {
        language: String,
        path: String,
        blocked_at: String,
        found: ValueKind,
    },

    #[error("conflicting values for [{path}] in language [{language}]")]
    Conflict { language: String, path: String },
}

/// The fully merged key tree of one language.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageTree {
    language: String,
    root: Mapping,
}

impl LanguageTree {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            root: Mapping::new(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn root(&self) -> &Mapping {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Merge a parsed document into this tree.
    ///
    /// Every leaf of `document` (any value that is not a mapping; sequences
    /// are leaves) is set at its fully-qualified path, creating intermediate
    /// mappings as needed. Dots inside keys split into nested mappings.
    /// Returns the number of leaves written.
    ///
    /// A failing merge may leave earlier leaves of the same document applied;
    /// callers wanting atomicity merge into a clone.
    pub fn merge(&mut self, document: &Mapping, mode: MergeMode) -> Result<usize, MergeError> {
        let mut leaves = Vec::new();
        collect_leaves(document, &mut Vec::new(), &mut leaves);

        for (path, value) in &leaves {
            self.set(path, value, mode)?;
        }
        Ok(leaves.len())
    }

    fn set(&mut self, path: &[&str], value: &Value, mode: MergeMode) -> Result<(), MergeError> {
        let Some((last, parents)) = path.split_last() else {
            return Ok(());
        };

        let language = &self.language;
        let mut node = &mut self.root;
        for (depth, key) in parents.iter().enumerate() {
            let entry = node
                .entry(key.to_string())
                .or_insert_with(|| Value::Map(Mapping::new()));
            node = match entry {
                Value::Map(map) => map,
                other => {
                    return Err(MergeError::NotAMapping {
                        language: language.clone(),
                        path: path.join("."),
                        blocked_at: parents[..=depth].join("."),
                        found: other.kind(),
                    });
                }
            };
        }

        if let Some(existing) = node.get(*last)
            && existing != value
        {
            let full_path = path.join(".");
            match mode {
                MergeMode::Overwrite => {}
                MergeMode::Warn => tracing::warn!(
                    language = %language,
                    path = %full_path,
                    old = %existing,
                    new = %value,
                    "overriding existing translation"
                ),
                MergeMode::Strict => {
                    return Err(MergeError::Conflict {
                        language: language.clone(),
                        path: full_path,
                    });
                }
            }
        }

        node.insert(last.to_string(), value.clone());
        Ok(())
    }

    /// Walk `path` to a concrete value without template expansion.
    pub fn lookup(&self, path: &ResourcePath) -> Result<&Value> {
        let segments = path.segments();
        let Some((last, parents)) = segments.split_last() else {
            return Err(Error::PathNotValue(path.to_string()));
        };

        let mut node = &self.root;
        for (i, segment) in parents.iter().enumerate() {
            match select(node, segment)? {
                Some(Value::Map(map)) => node = map,
                _ => {
                    return Err(Error::PathNotObject {
                        resolved: join_segments(&segments[..i]),
                        segment: segment.to_string(),
                        remaining: join_segments(&segments[i + 1..]),
                    });
                }
            }
        }

        match select(node, last)? {
            None | Some(Value::Null) | Some(Value::Map(_)) => {
                Err(Error::PathNotValue(path.to_string()))
            }
            Some(value) => Ok(value),
        }
    }

    /// All leaves as `(dotted path, value)`, in key order.
    pub fn flatten(&self) -> Vec<(String, &Value)> {
        let mut leaves = Vec::new();
        collect_leaves(&self.root, &mut Vec::new(), &mut leaves);
        leaves
            .into_iter()
            .map(|(path, value)| (path.join("."), value))
            .collect()
    }
}

fn collect_leaves<'a>(
    mapping: &'a Mapping,
    prefix: &mut Vec<&'a str>,
    leaves: &mut Vec<(Vec<&'a str>, &'a Value)>,
) {
    for (key, value) in mapping {
        // `menu.open: x` and `menu: {open: x}` address the same leaf.
        let depth = prefix.len();
        prefix.extend(key.split('.'));
        match value {
            Value::Map(nested) => collect_leaves(nested, prefix, leaves),
            leaf => leaves.push((prefix.clone(), leaf)),
        }
        prefix.truncate(depth);
    }
}

/// Look one segment up in `mapping`.
///
/// A literal key always wins; `key[n]` is only interpreted when no such
/// literal key exists.
fn select<'a>(mapping: &'a Mapping, segment: &Segment) -> Result<Option<&'a Value>> {
    if let Some(value) = mapping.get(segment.as_str()) {
        return Ok(Some(value));
    }
    let Some(index) = segment.index() else {
        return Ok(None);
    };
    let (key, index) = index?;

    match mapping.get(key) {
        None => Ok(None),
        Some(Value::Seq(items)) => usize::try_from(index)
            .ok()
            .and_then(|i| items.get(i))
            .map(Some)
            .ok_or_else(|| Error::IndexOutOfRange {
                key: key.to_string(),
                index,
                len: items.len(),
            }),
        Some(other) => Err(Error::NotASequence {
            key: key.to_string(),
            found: other.kind(),
        }),
    }
}
