//! Schema Validator Port - Document validation interface.
//!
//! This port defines the contract for checking a document against its
//! published JSON Schema. The domain depends on this trait, while adapters
//! (like JsonSchemaValidator) provide the implementation.

use serde_json::Value;
use std::fmt;

use crate::domain::foundation::DocumentKind;

/// Port for validating documents against their schemas.
///
/// # Contract
///
/// Implementations must:
/// - Hold a compiled schema for each document kind
/// - Report every violation found, never just the first
/// - Return issues as plain data; non-conformance is not an error
/// - Provide schema access for introspection
///
/// # Usage
///
/// ```rust,ignore
/// let validator: &dyn SchemaValidator = get_validator();
///
/// let issues = validator.validate_value(DocumentKind::Decision, &raw);
/// if issues.is_empty() {
///     persist(&raw);
/// }
///
/// // Get the raw schema for publication or client-side validation
/// let schema = validator.schema_for(DocumentKind::Context);
/// ```
pub trait SchemaValidator: Send + Sync {
    /// Checks a raw document value against the schema for its kind.
    ///
    /// Returns the complete list of violations, empty iff the document
    /// conforms. The input is never mutated.
    fn validate_value(&self, kind: DocumentKind, document: &Value) -> Vec<ValidationIssue>;

    /// Returns the JSON Schema for a document kind.
    ///
    /// Schemas are published artifacts and safe to expose.
    fn schema_for(&self, kind: DocumentKind) -> &Value;
}

/// What kind of schema violation an issue describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// A required field is absent.
    MissingField,
    /// A field holds a value of the wrong type.
    TypeMismatch,
    /// A field holds a value outside its enumerated set.
    EnumViolation,
    /// A numeric or length bound is violated.
    RangeViolation,
    /// Any other schema violation.
    Generic,
}

impl ViolationKind {
    /// Returns a short label for the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::MissingField => "missing_field",
            ViolationKind::TypeMismatch => "type_mismatch",
            ViolationKind::EnumViolation => "enum_violation",
            ViolationKind::RangeViolation => "range_violation",
            ViolationKind::Generic => "generic",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One schema violation found in a document.
///
/// Not an error type: a list of these is the ordinary return value of
/// validation. `path` points into the document in dotted-index form,
/// e.g. `constraints[2].negotiable`; the document root is the empty path,
/// rendered as `(root)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: String,
    pub kind: ViolationKind,
    pub message: String,
}

impl ValidationIssue {
    /// Creates an issue at a path.
    pub fn new(path: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}
