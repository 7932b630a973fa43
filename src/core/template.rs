//! `${path}` and `${lang:path}` placeholders inside string values.
//!
//! Expansion is one level deep: the resolve callback returns raw values, so a
//! replacement that itself contains `${...}` is inserted verbatim. Cyclic
//! references therefore cannot loop.

use std::collections::HashMap;

use super::{path::ResourcePath, value::Value};
use crate::error::Result;

/// Substituted for any reference that cannot be resolved.
pub const NOT_FOUND_PLACEHOLDER: &str = "<NotFound>";

/// Location of a template candidate inside a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TemplateSpan<'a> {
    /// Byte offset of the `$`.
    start: usize,
    /// Byte offset of the `{`.
    open: usize,
    /// Byte offset just past the `}`.
    end: usize,
    payload: &'a str,
}

impl TemplateSpan<'_> {
    /// Byte offset of the `${` that opens the placeholder, if the brace is
    /// directly preceded by a dollar. Text between `start` and that offset
    /// is kept as written.
    fn placeholder_start(&self, s: &str) -> Option<usize> {
        (s.as_bytes()[self.open - 1] == b'$').then_some(self.open - 1)
    }
}

/// Find the first `$`, the next `{` after it and the next `}` after that.
///
/// Braces are not nested: `${a${b}}` yields the payload `a${b`.
fn find_first_template(s: &str) -> Option<TemplateSpan<'_>> {
    let start = s.find('$')?;
    let open = start + 1 + s[start + 1..].find('{')?;
    let close = open + 1 + s[open + 1..].find('}')?;
    Some(TemplateSpan {
        start,
        open,
        end: close + 1,
        payload: &s[open + 1..close],
    })
}

/// Expand every `${...}` reference in `value`.
///
/// `resolve` receives the language and parsed path of each reference and
/// returns the raw value there. Identical references are resolved once and
/// substituted identically.
pub fn interpolate<F>(value: &str, current_language: &str, mut resolve: F) -> String
where
    F: FnMut(&str, &ResourcePath) -> Result<Value>,
{
    let mut output = String::with_capacity(value.len());
    let mut resolved: HashMap<&str, String> = HashMap::new();
    let mut rest = value;

    while let Some(span) = find_first_template(rest) {
        if let Some(placeholder) = span.placeholder_start(rest) {
            output.push_str(&rest[..placeholder]);
            let replacement = resolved.entry(span.payload).or_insert_with(|| {
                resolve_reference(span.payload, current_language, &mut resolve)
            });
            output.push_str(replacement);
        } else {
            output.push_str(&rest[..span.end]);
        }
        rest = &rest[span.end..];
    }
    output.push_str(rest);
    output
}

fn resolve_reference<F>(payload: &str, current_language: &str, resolve: &mut F) -> String
where
    F: FnMut(&str, &ResourcePath) -> Result<Value>,
{
    let (language, path) = payload
        .split_once(':')
        .unwrap_or((current_language, payload));

    if language.is_empty() || path.is_empty() {
        return NOT_FOUND_PLACEHOLDER.to_string();
    }

    let value = ResourcePath::parse(path).and_then(|path| resolve(language, &path));
    match value {
        Ok(value) => value
            .scalar_string()
            .unwrap_or_else(|| NOT_FOUND_PLACEHOLDER.to_string()),
        Err(err) => {
            tracing::trace!(reference = payload, language, error = %err, "unresolved template reference");
            NOT_FOUND_PLACEHOLDER.to_string()
        }
    }
}
