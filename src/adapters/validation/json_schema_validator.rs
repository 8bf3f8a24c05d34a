//! JSON Schema Validator - Implementation of SchemaValidator.
//!
//! Compiles the published decision and context schemas once, then reports
//! every violation found in a document as a list of `ValidationIssue`s.
//! The bundled schemas are embedded in the binary via `include_str!`;
//! callers can substitute their own with `with_schemas` or `from_files`.

use std::fs;
use std::path::Path;

use jsonschema::error::ValidationErrorKind;
use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::Value;

use crate::adapters::codec;
use crate::domain::context::ContextDocument;
use crate::domain::decision::DecisionDocument;
use crate::domain::foundation::{DocumentError, DocumentKind, Format};
use crate::ports::{SchemaValidator, ValidationIssue, ViolationKind};

/// Bundled schema for decision documents.
static DECISION_SCHEMA: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../domain/schemas/decision.json"))
        .unwrap_or_else(|e| panic!("Bundled decision schema is not valid JSON: {}", e))
});

/// Bundled schema for context documents.
static CONTEXT_SCHEMA: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../domain/schemas/context.json"))
        .unwrap_or_else(|e| panic!("Bundled context schema is not valid JSON: {}", e))
});

/// JSON Schema-backed validator for decision and context documents.
///
/// Holds one compiled validator per document kind. Validation walks the
/// whole document and returns every violation, so a caller sees the full
/// repair list in one pass rather than one failure at a time.
///
/// # Thread Safety
///
/// This struct is `Send + Sync` and can be shared across threads.
pub struct JsonSchemaValidator {
    decision_schema: Value,
    context_schema: Value,
    decision: Validator,
    context: Validator,
}

impl JsonSchemaValidator {
    /// Creates a validator backed by the bundled schemas.
    pub fn new() -> Result<Self, DocumentError> {
        Self::with_schemas(DECISION_SCHEMA.clone(), CONTEXT_SCHEMA.clone())
    }

    /// Creates a validator from caller-supplied schema documents.
    pub fn with_schemas(
        decision_schema: Value,
        context_schema: Value,
    ) -> Result<Self, DocumentError> {
        let decision = compile(DocumentKind::Decision, &decision_schema)?;
        let context = compile(DocumentKind::Context, &context_schema)?;
        tracing::debug!("Compiled decision and context document schemas");
        Ok(Self {
            decision_schema,
            context_schema,
            decision,
            context,
        })
    }

    /// Creates a validator from schema files on disk.
    pub fn from_files(
        decision_path: impl AsRef<Path>,
        context_path: impl AsRef<Path>,
    ) -> Result<Self, DocumentError> {
        Self::with_schemas(
            read_schema(decision_path.as_ref())?,
            read_schema(context_path.as_ref())?,
        )
    }

    /// Validates a typed decision document.
    pub fn validate_decision(&self, document: &DecisionDocument) -> Vec<ValidationIssue> {
        self.validate_typed(DocumentKind::Decision, document)
    }

    /// Validates a typed context document.
    pub fn validate_context(&self, document: &ContextDocument) -> Vec<ValidationIssue> {
        self.validate_typed(DocumentKind::Context, document)
    }

    /// Validates document text without building a typed model first.
    ///
    /// This checks documents the typed model would refuse to load, so a
    /// caller can report all schema violations in raw input. The only
    /// error case is text that cannot be parsed at all.
    pub fn validate_text(
        &self,
        kind: DocumentKind,
        text: &str,
        format: Format,
    ) -> Result<Vec<ValidationIssue>, DocumentError> {
        let raw: Value = codec::from_str(text, format)?;
        Ok(self.validate_value(kind, &raw))
    }

    fn validate_typed<T: Serialize>(&self, kind: DocumentKind, document: &T) -> Vec<ValidationIssue> {
        match serde_json::to_value(document) {
            Ok(raw) => self.validate_value(kind, &raw),
            Err(e) => vec![ValidationIssue::new(
                "",
                ViolationKind::Generic,
                format!("document cannot be rendered for validation: {}", e),
            )],
        }
    }
}

impl SchemaValidator for JsonSchemaValidator {
    fn validate_value(&self, kind: DocumentKind, document: &Value) -> Vec<ValidationIssue> {
        let validator = match kind {
            DocumentKind::Decision => &self.decision,
            DocumentKind::Context => &self.context,
        };
        validator
            .iter_errors(document)
            .map(|e| issue_from_error(&e))
            .collect()
    }

    fn schema_for(&self, kind: DocumentKind) -> &Value {
        match kind {
            DocumentKind::Decision => &self.decision_schema,
            DocumentKind::Context => &self.context_schema,
        }
    }
}

// =========================================================================
// Helpers
// =========================================================================

fn compile(kind: DocumentKind, schema: &Value) -> Result<Validator, DocumentError> {
    jsonschema::validator_for(schema).map_err(|e| {
        DocumentError::schema_unavailable(format!("cannot compile {} schema: {}", kind, e))
    })
}

fn read_schema(path: &Path) -> Result<Value, DocumentError> {
    let text = fs::read_to_string(path).map_err(|e| {
        DocumentError::schema_unavailable(format!("cannot read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&text).map_err(|e| {
        DocumentError::schema_unavailable(format!("cannot parse {}: {}", path.display(), e))
    })
}

/// Converts one schema violation into a `ValidationIssue`.
///
/// `required` violations point at the object that lacks the field, so the
/// missing field name is appended to the reported path.
fn issue_from_error(error: &jsonschema::ValidationError<'_>) -> ValidationIssue {
    let mut path = json_pointer_to_path(&error.instance_path.to_string());
    let kind = match &error.kind {
        ValidationErrorKind::Required { property } => {
            let field = property
                .as_str()
                .map(str::to_owned)
                .unwrap_or_else(|| property.to_string());
            path = if path.is_empty() {
                field
            } else {
                format!("{}.{}", path, field)
            };
            ViolationKind::MissingField
        }
        ValidationErrorKind::Type { .. } => ViolationKind::TypeMismatch,
        ValidationErrorKind::Enum { .. } | ValidationErrorKind::Constant { .. } => {
            ViolationKind::EnumViolation
        }
        ValidationErrorKind::Minimum { .. }
        | ValidationErrorKind::Maximum { .. }
        | ValidationErrorKind::ExclusiveMinimum { .. }
        | ValidationErrorKind::ExclusiveMaximum { .. }
        | ValidationErrorKind::MinLength { .. }
        | ValidationErrorKind::MaxLength { .. }
        | ValidationErrorKind::MinItems { .. }
        | ValidationErrorKind::MaxItems { .. } => ViolationKind::RangeViolation,
        _ => ViolationKind::Generic,
    };
    ValidationIssue::new(path, kind, error.to_string())
}

/// Rewrites a JSON Pointer as a dotted path with bracketed indexes.
///
/// `/constraints/2/negotiable` becomes `constraints[2].negotiable`; the
/// root pointer becomes the empty path.
fn json_pointer_to_path(pointer: &str) -> String {
    let mut path = String::new();
    for token in pointer.split('/').skip(1) {
        let token = token.replace("~1", "/").replace("~0", "~");
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            path.push('[');
            path.push_str(&token);
            path.push(']');
        } else {
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(&token);
        }
    }
    path
}
