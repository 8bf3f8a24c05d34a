//! Closed vocabularies of the decision record format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::DocumentError;

/// The author's stated stage of reasoning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Exploration,
    Analysis,
    Synthesis,
    Decision,
}

impl Phase {
    /// Returns the canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Exploration => "exploration",
            Phase::Analysis => "analysis",
            Phase::Synthesis => "synthesis",
            Phase::Decision => "decision",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Phase {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exploration" => Ok(Phase::Exploration),
            "analysis" => Ok(Phase::Analysis),
            "synthesis" => Ok(Phase::Synthesis),
            "decision" => Ok(Phase::Decision),
            other => Err(DocumentError::invalid_value(
                "phase",
                format!("'{}' is not a recognized phase", other),
            )),
        }
    }
}

/// Priority tier of an objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    MustHave,
    ShouldHave,
    NiceToHave,
}

impl Priority {
    /// Returns the canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::MustHave => "must_have",
            Priority::ShouldHave => "should_have",
            Priority::NiceToHave => "nice_to_have",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Impact rating of an unresolved tension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Low,
    Medium,
    High,
    Critical,
}

impl Impact {
    /// Returns the canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Low => "low",
            Impact::Medium => "medium",
            Impact::High => "high",
            Impact::Critical => "critical",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a decision document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    Draft,
    Review,
    Approved,
    Rejected,
    Superseded,
    Archived,
}

impl DecisionStatus {
    /// Returns the canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionStatus::Draft => "draft",
            DecisionStatus::Review => "review",
            DecisionStatus::Approved => "approved",
            DecisionStatus::Rejected => "rejected",
            DecisionStatus::Superseded => "superseded",
            DecisionStatus::Archived => "archived",
        }
    }
}

impl Default for DecisionStatus {
    fn default() -> Self {
        DecisionStatus::Draft
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named style of reasoning applied while working the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasoningPattern {
    Operational,
    RiskBased,
    Contrafactual,
    Comparative,
    CostBenefit,
    Intuitive,
    Deliberative,
    Heuristic,
    Systematic,
    Creative,
    Consensus,
    Authority,
    Delegation,
    Voting,
    Escalation,
}

impl ReasoningPattern {
    /// Returns the canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasoningPattern::Operational => "operational",
            ReasoningPattern::RiskBased => "risk_based",
            ReasoningPattern::Contrafactual => "contrafactual",
            ReasoningPattern::Comparative => "comparative",
            ReasoningPattern::CostBenefit => "cost_benefit",
            ReasoningPattern::Intuitive => "intuitive",
            ReasoningPattern::Deliberative => "deliberative",
            ReasoningPattern::Heuristic => "heuristic",
            ReasoningPattern::Systematic => "systematic",
            ReasoningPattern::Creative => "creative",
            ReasoningPattern::Consensus => "consensus",
            ReasoningPattern::Authority => "authority",
            ReasoningPattern::Delegation => "delegation",
            ReasoningPattern::Voting => "voting",
            ReasoningPattern::Escalation => "escalation",
        }
    }
}

impl fmt::Display for ReasoningPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
