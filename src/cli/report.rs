//! Output formatting for CLI commands.
//!
//! Kept apart from the registry so the library never prints.

use std::io::{self, Write};

use anyhow::{Context, Result};
use unicode_width::UnicodeWidthStr;

use crate::core::Value;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Gap between the path column and the value column.
const COLUMN_GAP: usize = 2;

/// Render a value for terminal output.
///
/// Scalars print as themselves; sequences and mappings print as compact JSON
/// so nested data stays readable.
pub fn render_value(value: &Value) -> Result<String> {
    match value {
        Value::Seq(_) | Value::Map(_) => {
            serde_json::to_string(value).context("Failed to render value as JSON.")
        }
        scalar => Ok(scalar.to_string()),
    }
}

/// Print `path  value` lines to stdout, values aligned in one column.
pub fn print_leaves(leaves: &[(String, &Value)]) -> Result<()> {
    print_leaves_to(leaves, &mut io::stdout().lock())
}

/// Print leaves to a custom writer.
///
/// Column alignment uses display width, so CJK paths line up.
pub fn print_leaves_to<W: Write>(leaves: &[(String, &Value)], writer: &mut W) -> Result<()> {
    let path_width = leaves
        .iter()
        .map(|(path, _)| UnicodeWidthStr::width(path.as_str()))
        .max()
        .unwrap_or(0);

    for (path, value) in leaves {
        let padding = path_width - UnicodeWidthStr::width(path.as_str()) + COLUMN_GAP;
        writeln!(
            writer,
            "{}{}{}",
            path,
            " ".repeat(padding),
            render_value(value)?
        )?;
    }
    Ok(())
}

/// Leaves as one pretty-printed JSON object keyed by dotted path.
pub fn leaves_to_json(leaves: &[(String, &Value)]) -> Result<String> {
    let mut object = serde_json::Map::new();
    for (path, value) in leaves {
        object.insert(
            path.clone(),
            serde_json::to_value(value).context("Failed to convert value to JSON.")?,
        );
    }
    serde_json::to_string_pretty(&serde_json::Value::Object(object))
        .context("Failed to render JSON output.")
}
