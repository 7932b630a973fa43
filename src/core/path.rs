use std::fmt;

use crate::error::{Error, Result};

/// A parsed dotted path such as `test.items[2].name`.
///
/// Parsing only splits and validates; bracket indices stay part of the raw
/// segment text and are interpreted lazily during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    raw: String,
    segments: Vec<Segment>,
}

/// One dot-separated segment of a [`ResourcePath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment(String);

impl ResourcePath {
    /// Parse a dotted path.
    ///
    /// Fails with [`Error::InvalidPath`] if the path is empty, contains any
    /// whitespace, or has an empty segment (`a..b`, `.a`, `a.`).
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = |reason| Error::InvalidPath {
            path: raw.to_string(),
            reason,
        };

        if raw.is_empty() {
            return Err(invalid("path is empty"));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(invalid("contains whitespace"));
        }

        let segments = raw
            .split('.')
            .map(|part| {
                if part.is_empty() {
                    Err(invalid("contains an empty segment"))
                } else {
                    Ok(Segment(part.to_string()))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: a parsed path has at least one segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for ResourcePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Join segments back into dotted form.
pub fn join_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(Segment::as_str)
        .collect::<Vec<_>>()
        .join(".")
}

impl Segment {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split a trailing `[n]` off the segment.
    ///
    /// Returns `None` when the segment has no index syntax (`key`, `[0]`,
    /// `key]`), so it can only be matched literally. An empty or non-numeric
    /// index is reported as [`Error::InvalidIndex`]; negative indices are
    /// returned as-is and rejected by the resolver.
    pub fn index(&self) -> Option<Result<(&str, i64)>> {
        let text = self.0.as_str();
        if !text.ends_with(']') {
            return None;
        }
        let open = text.rfind('[').filter(|&open| open > 0)?;

        let key = &text[..open];
        let index = &text[open + 1..text.len() - 1];
        Some(
            index
                .parse::<i64>()
                .map(|index| (key, index))
                .map_err(|_| Error::InvalidIndex {
                    key: key.to_string(),
                    index: index.to_string(),
                }),
        )
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
