//! Context document aggregate and its builder surface.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ContextId;

use super::{Fact, Policy, Provenance};

/// Wire version of the context record format.
pub const CRF_VERSION: &str = "0.1.0";

fn default_crf_version() -> String {
    CRF_VERSION.to_string()
}

/// A structured record of organizational policies and facts shared across
/// decisions.
///
/// Like the decision side, fields are private and mutation goes through the
/// consuming builder methods. The two lists are the document: both are
/// required on the wire even when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextDocument {
    #[serde(default = "default_crf_version")]
    crf_version: String,
    #[serde(default)]
    id: ContextId,
    policies: Vec<Policy>,
    facts: Vec<Fact>,
    #[serde(default)]
    provenance: Provenance,
}

impl ContextDocument {
    /// Creates an empty context document with manual provenance.
    pub fn new() -> Self {
        Self {
            crf_version: CRF_VERSION.to_string(),
            id: ContextId::new(),
            policies: Vec::new(),
            facts: Vec::new(),
            provenance: Provenance::manual(),
        }
    }

    /// Creates an empty context document attributed to a named source.
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            provenance: Provenance::from_source(source),
            ..Self::new()
        }
    }

    /// Returns the wire format version this document carries.
    pub fn version(&self) -> &str {
        &self.crf_version
    }

    /// Returns the document id.
    pub fn id(&self) -> ContextId {
        self.id
    }

    /// Returns the policies in insertion order.
    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    /// Returns the facts in insertion order.
    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    /// Returns the origin metadata.
    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// Appends a policy. Repeated calls append again; nothing is
    /// deduplicated.
    pub fn add_policy(mut self, policy: Policy) -> Self {
        self.policies.push(policy);
        self
    }

    /// Appends a fact.
    pub fn add_fact(mut self, fact: Fact) -> Self {
        self.facts.push(fact);
        self
    }
}

impl Default for ContextDocument {
    fn default() -> Self {
        Self::new()
    }
}
