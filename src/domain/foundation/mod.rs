//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, vocabulary enums, and the error
//! type shared by both document families.

mod ids;
mod timestamp;
mod confidence;
mod format;
mod document_kind;
mod errors;

pub use ids::{ContextId, DecisionId};
pub use timestamp::Timestamp;
pub use confidence::Confidence;
pub use format::Format;
pub use document_kind::DocumentKind;
pub use errors::DocumentError;
