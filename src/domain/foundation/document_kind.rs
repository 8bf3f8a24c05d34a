//! DocumentKind enum naming the two document families.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two document families this library models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Decision,
    Context,
}

impl DocumentKind {
    /// Returns both kinds.
    pub fn all() -> &'static [DocumentKind] {
        &[DocumentKind::Decision, DocumentKind::Context]
    }

    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Decision => "decision",
            DocumentKind::Context => "context",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
