//! Error types for the document library.

use std::path::PathBuf;
use thiserror::Error;

use super::Format;

/// Errors surfaced by builder operations, the codec, and validator setup.
///
/// Schema violations found by validation are not errors; they are returned
/// as plain [`ValidationIssue`](crate::ports::ValidationIssue) lists.
#[derive(Debug, Clone, Error)]
pub enum DocumentError {
    /// The input text is not well-formed YAML or JSON.
    #[error("Malformed {format} input: {message}")]
    Parse { format: Format, message: String },

    /// Well-formed input whose shape cannot be coerced into the model.
    #[error("Document shape mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A builder operation received an out-of-range or non-enumerated value.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// The source or destination path could not be read or written.
    #[error("I/O failure at '{}': {message}", .path.display())]
    Io { path: PathBuf, message: String },

    /// The validator could not obtain or compile its reference schema.
    #[error("Schema unavailable: {reason}")]
    SchemaUnavailable { reason: String },
}

impl DocumentError {
    /// Creates a parse error for malformed input text.
    pub fn parse(format: Format, message: impl Into<String>) -> Self {
        DocumentError::Parse {
            format,
            message: message.into(),
        }
    }

    /// Creates a shape mismatch error.
    pub fn schema_mismatch(message: impl Into<String>) -> Self {
        DocumentError::SchemaMismatch {
            message: message.into(),
        }
    }

    /// Creates an invalid value error for a builder operation.
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DocumentError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an I/O error with the offending path attached.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocumentError::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Creates a schema unavailable error.
    pub fn schema_unavailable(reason: impl Into<String>) -> Self {
        DocumentError::SchemaUnavailable {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_displays_format_and_message() {
        let err = DocumentError::parse(Format::Yaml, "mapping values are not allowed here");
        assert_eq!(
            format!("{}", err),
            "Malformed yaml input: mapping values are not allowed here"
        );
    }

    #[test]
    fn schema_mismatch_displays_message() {
        let err = DocumentError::schema_mismatch("invalid type: string, expected a sequence");
        assert_eq!(
            format!("{}", err),
            "Document shape mismatch: invalid type: string, expected a sequence"
        );
    }

    #[test]
    fn invalid_value_displays_field_and_reason() {
        let err = DocumentError::invalid_value("confidence", "must be between 0 and 100, got 150");
        assert_eq!(
            format!("{}", err),
            "Invalid value for 'confidence': must be between 0 and 100, got 150"
        );
    }

    #[test]
    fn io_error_carries_path() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = DocumentError::io("/var/records/db.yaml", source);
        let rendered = format!("{}", err);
        assert!(rendered.contains("/var/records/db.yaml"));
        assert!(rendered.contains("denied"));
    }

    #[test]
    fn schema_unavailable_displays_reason() {
        let err = DocumentError::schema_unavailable("schema file missing");
        assert_eq!(format!("{}", err), "Schema unavailable: schema file missing");
    }

    #[test]
    fn errors_are_cloneable() {
        let err = DocumentError::invalid_value("phase", "unknown variant");
        let cloned = err.clone();
        assert_eq!(format!("{}", err), format!("{}", cloned));
    }
}
