//! Sub-entities of a context document.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Confidence, Timestamp};

use super::{Enforcement, FactType, PolicyStatus, PolicyType};

/// Loosely typed scalar value of a fact.
///
/// Untagged on the wire: the YAML/JSON scalar carries its own type. Integer
/// is tried before Float so whole numbers stay integral through round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FactValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<bool> for FactValue {
    fn from(value: bool) -> Self {
        FactValue::Boolean(value)
    }
}

impl From<i32> for FactValue {
    fn from(value: i32) -> Self {
        FactValue::Integer(i64::from(value))
    }
}

impl From<i64> for FactValue {
    fn from(value: i64) -> Self {
        FactValue::Integer(value)
    }
}

impl From<f64> for FactValue {
    fn from(value: f64) -> Self {
        FactValue::Float(value)
    }
}

impl From<&str> for FactValue {
    fn from(value: &str) -> Self {
        FactValue::Text(value.to_string())
    }
}

impl From<String> for FactValue {
    fn from(value: String) -> Self {
        FactValue::Text(value)
    }
}

/// An organizational rule with a lifecycle status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub name: String,
    pub description: String,
    pub status: PolicyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<PolicyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforcement: Option<Enforcement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Policy {
    /// Creates a policy with the core fields; optional attributes attach
    /// through the `with_*` methods.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        status: PolicyStatus,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            status,
            policy_type: None,
            enforcement: None,
            scope: None,
            owner: None,
        }
    }

    /// Sets the governance area.
    pub fn with_type(mut self, policy_type: PolicyType) -> Self {
        self.policy_type = Some(policy_type);
        self
    }

    /// Sets how strongly the policy binds.
    pub fn with_enforcement(mut self, enforcement: Enforcement) -> Self {
        self.enforcement = Some(enforcement);
        self
    }

    /// Sets where the policy applies.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the owning party.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }
}

/// A typed, named piece of contextual information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub name: String,
    pub fact_type: FactType,
    pub value: FactValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_reference: Option<String>,
}

impl Fact {
    /// Creates a fact with the core fields; optional attributes attach
    /// through the `with_*` methods.
    pub fn new(name: impl Into<String>, fact_type: FactType, value: impl Into<FactValue>) -> Self {
        Self {
            name: name.into(),
            fact_type,
            value: value.into(),
            unit: None,
            confidence: None,
            source_reference: None,
        }
    }

    /// Sets the unit of measure.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Sets how reliable the fact is held to be.
    pub fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Sets a reference to where the fact was taken from.
    pub fn with_source_reference(mut self, reference: impl Into<String>) -> Self {
        self.source_reference = Some(reference.into());
        self
    }
}

/// Origin metadata of a context document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub source: String,
    #[serde(default)]
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Provenance {
    /// Provenance of a hand-authored document.
    pub fn manual() -> Self {
        Self::from_source("manual")
    }

    /// Provenance from a named source.
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            created_at: Timestamp::now(),
            updated_at: None,
        }
    }
}

impl Default for Provenance {
    fn default() -> Self {
        Self::manual()
    }
}
