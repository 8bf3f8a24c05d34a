//! Sub-entities of a decision document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Confidence, Timestamp};

use super::{DecisionStatus, Impact, Phase, Priority};

/// A boundary condition on the decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub description: String,
    /// Where the constraint comes from (e.g., "regulatory", "budget owner").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub negotiable: bool,
}

/// A desired outcome with a priority tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub measurable: bool,
}

/// The author's current stage of reasoning and how sure they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CognitivePhase {
    pub phase: Phase,
    pub confidence: Confidence,
}

/// A belief the decision rests on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumption {
    pub description: String,
    #[serde(default)]
    pub validated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// An unresolved conflict the decision leaves open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tension {
    pub description: String,
    pub impact: Impact,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mitigation: Option<String>,
}

/// An option that was considered and set aside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub decision: String,
    pub rationale_against: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions_for_reconsideration: Option<String>,
}

/// An action item attached to the synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUp {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

/// The concluding decision statement and its rationale.
///
/// Presence of a synthesis signals the document has reached a concluding
/// state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synthesis {
    pub decision: String,
    pub rationale: String,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
    #[serde(default)]
    pub follow_ups: Vec<FollowUp>,
}

impl Synthesis {
    /// Creates a synthesis with empty alternative and follow-up lists.
    pub fn new(decision: impl Into<String>, rationale: impl Into<String>) -> Self {
        Self {
            decision: decision.into(),
            rationale: rationale.into(),
            alternatives: Vec::new(),
            follow_ups: Vec::new(),
        }
    }
}

/// Lifecycle metadata of a decision document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    #[serde(default)]
    pub status: DecisionStatus,
    #[serde(default)]
    pub tags: Vec<String>,
}
