//! Confidence value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::DocumentError;

/// A confidence level between 0 and 100 inclusive.
///
/// Any `u8` deserializes; builders go through [`Confidence::new`], and the
/// schema validator reports out-of-range values found in raw documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(u8);

impl Confidence {
    /// No confidence at all.
    pub const ZERO: Self = Self(0);

    /// Full confidence.
    pub const FULL: Self = Self(100);

    /// Creates a Confidence, returning an error if the value exceeds 100.
    pub fn new(value: u8) -> Result<Self, DocumentError> {
        if value > 100 {
            return Err(DocumentError::invalid_value(
                "confidence",
                format!("must be between 0 and 100, got {}", value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
