use super::{Document, DocumentFormat};
use crate::core::{Mapping, Value};
use crate::error::{Error, Result};

/// Parse a raw document into its top-level mapping.
///
/// An empty document is an empty mapping. Anything other than a mapping at the
/// root (a bare scalar or a list) is rejected.
pub fn parse_document(document: &Document) -> Result<Mapping> {
    let parse_error = |message: String| Error::Parse {
        document: document.name.clone(),
        message,
    };

    if document.content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    let value = match document.format {
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<serde_yaml::Value>(&document.content)
                .map(Value::from)
                .map_err(|e| parse_error(e.to_string()))?
        }
        DocumentFormat::Json => {
            serde_json::from_str::<serde_json::Value>(&document.content)
                .map(Value::from)
                .map_err(|e| parse_error(e.to_string()))?
        }
    };

    match value {
        Value::Map(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        other => Err(parse_error(format!(
            "expected a mapping at the document root, found a {}",
            other.kind()
        ))),
    }
}
