//! Document Codec - YAML/JSON text and file round-tripping.
//!
//! Serializes any document model to YAML or JSON text and parses it back,
//! preserving field order, list order, and defaulted fields. File helpers
//! pick the format from the path extension via `Format::from_path`.
//!
//! Parsing happens in two phases so failures carry the right meaning:
//! 1. Text to a raw value tree. Failure here is `DocumentError::Parse`,
//!    the input is not well-formed in the requested format.
//! 2. Raw value to the typed model. Failure here is
//!    `DocumentError::SchemaMismatch`, the input is well-formed but its
//!    shape does not fit the model.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::domain::foundation::{DocumentError, Format};

/// Renders a document as text in the given format.
///
/// JSON output is pretty-printed; YAML output is block-style. Empty lists
/// are written out rather than omitted, so a reloaded document compares
/// equal to the original.
pub fn to_string<T: Serialize>(value: &T, format: Format) -> Result<String, DocumentError> {
    match format {
        Format::Yaml => {
            serde_yaml::to_string(value).map_err(|e| DocumentError::schema_mismatch(e.to_string()))
        }
        Format::Json => serde_json::to_string_pretty(value)
            .map_err(|e| DocumentError::schema_mismatch(e.to_string())),
    }
}

/// Parses text in the given format into a document model.
///
/// Malformed text yields `DocumentError::Parse`; well-formed text whose
/// shape does not fit `T` yields `DocumentError::SchemaMismatch`.
pub fn from_str<T: DeserializeOwned>(text: &str, format: Format) -> Result<T, DocumentError> {
    match format {
        Format::Yaml => {
            let raw: serde_yaml::Value = serde_yaml::from_str(text)
                .map_err(|e| DocumentError::parse(format, e.to_string()))?;
            serde_yaml::from_value(raw).map_err(|e| DocumentError::schema_mismatch(e.to_string()))
        }
        Format::Json => {
            let raw: serde_json::Value = serde_json::from_str(text)
                .map_err(|e| DocumentError::parse(format, e.to_string()))?;
            serde_json::from_value(raw).map_err(|e| DocumentError::schema_mismatch(e.to_string()))
        }
    }
}

/// Writes a document to a file, picking the format from the extension.
///
/// `.yaml` and `.yml` write YAML; any other extension writes JSON.
pub fn save<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<(), DocumentError> {
    let path = path.as_ref();
    save_as(value, path, Format::from_path(path))
}

/// Writes a document to a file in an explicit format.
///
/// Missing parent directories are created. I/O failures carry the
/// offending path.
pub fn save_as<T: Serialize>(
    value: &T,
    path: impl AsRef<Path>,
    format: Format,
) -> Result<(), DocumentError> {
    let path = path.as_ref();
    let text = to_string(value, format)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| DocumentError::io(parent, e))?;
        }
    }

    fs::write(path, text).map_err(|e| DocumentError::io(path, e))?;
    tracing::debug!("Saved {} document to {}", format, path.display());
    Ok(())
}

/// Reads a document from a file, picking the format from the extension.
pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, DocumentError> {
    let path = path.as_ref();
    let format = Format::from_path(path);
    let text = fs::read_to_string(path).map_err(|e| DocumentError::io(path, e))?;
    tracing::debug!("Loaded {} document from {}", format, path.display());
    from_str(&text, format)
}
