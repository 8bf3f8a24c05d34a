//! Decision document aggregate and its fluent builder surface.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Confidence, DecisionId, DocumentError, Timestamp};

use super::{
    Alternative, Assumption, CognitivePhase, Constraint, DecisionStatus, FollowUp, Impact, Meta,
    Objective, Phase, Priority, ReasoningPattern, Synthesis, Tension,
};

/// Wire version of the decision record format.
pub const DRF_VERSION: &str = "0.1.0";

fn default_drf_version() -> String {
    DRF_VERSION.to_string()
}

/// A structured record of one decision: its intent, boundaries, reasoning
/// state, and outcome.
///
/// Fields are private; the document is mutated through the builder methods,
/// each of which consumes and returns the document so calls chain. A
/// document may be transiently invalid while under construction; conformance
/// is checked by the schema validator, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionDocument {
    #[serde(default = "default_drf_version")]
    drf_version: String,
    #[serde(default)]
    id: DecisionId,
    title: String,
    domain: String,
    intent: String,
    #[serde(default)]
    constraints: Vec<Constraint>,
    #[serde(default)]
    objectives: Vec<Objective>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cognitive_phase: Option<CognitivePhase>,
    #[serde(default)]
    reasoning: Vec<ReasoningPattern>,
    #[serde(default)]
    assumptions: Vec<Assumption>,
    #[serde(default)]
    unresolved_tensions: Vec<Tension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    synthesis: Option<Synthesis>,
    #[serde(default)]
    meta: Meta,
}

impl DecisionDocument {
    /// Creates a draft decision with a fresh id and empty lists.
    pub fn new(
        title: impl Into<String>,
        domain: impl Into<String>,
        intent: impl Into<String>,
    ) -> Self {
        Self {
            drf_version: DRF_VERSION.to_string(),
            id: DecisionId::new(),
            title: title.into(),
            domain: domain.into(),
            intent: intent.into(),
            constraints: Vec::new(),
            objectives: Vec::new(),
            cognitive_phase: None,
            reasoning: Vec::new(),
            assumptions: Vec::new(),
            unresolved_tensions: Vec::new(),
            synthesis: None,
            meta: Meta::default(),
        }
    }

    // ────────────────────────────────────────────────────────────────
    // Accessors
    // ────────────────────────────────────────────────────────────────

    /// Returns the wire format version this document carries.
    pub fn version(&self) -> &str {
        &self.drf_version
    }

    /// Returns the document id.
    pub fn id(&self) -> DecisionId {
        self.id
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the domain category.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the intent statement.
    pub fn intent(&self) -> &str {
        &self.intent
    }

    /// Returns the constraints in insertion order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Returns the objectives in insertion order.
    pub fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    /// Returns the current cognitive phase, if one has been stated.
    pub fn cognitive_phase(&self) -> Option<&CognitivePhase> {
        self.cognitive_phase.as_ref()
    }

    /// Returns the reasoning patterns in insertion order.
    pub fn reasoning(&self) -> &[ReasoningPattern] {
        &self.reasoning
    }

    /// Returns the assumptions in insertion order.
    pub fn assumptions(&self) -> &[Assumption] {
        &self.assumptions
    }

    /// Returns the unresolved tensions in insertion order.
    pub fn unresolved_tensions(&self) -> &[Tension] {
        &self.unresolved_tensions
    }

    /// Returns the synthesis, if the decision has concluded.
    pub fn synthesis(&self) -> Option<&Synthesis> {
        self.synthesis.as_ref()
    }

    /// Returns the lifecycle metadata.
    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    // ────────────────────────────────────────────────────────────────
    // Builder operations
    // ────────────────────────────────────────────────────────────────

    /// Appends a constraint. Repeated calls append again; nothing is
    /// deduplicated.
    pub fn add_constraint(
        mut self,
        description: impl Into<String>,
        source: Option<&str>,
        negotiable: bool,
    ) -> Self {
        self.constraints.push(Constraint {
            description: description.into(),
            source: source.map(str::to_owned),
            negotiable,
        });
        self
    }

    /// Appends an objective.
    pub fn add_objective(
        mut self,
        description: impl Into<String>,
        priority: Option<Priority>,
        measurable: bool,
    ) -> Self {
        self.objectives.push(Objective {
            description: description.into(),
            priority,
            measurable,
        });
        self
    }

    /// Sets or replaces the cognitive phase.
    ///
    /// Fails with `InvalidValue` when confidence is outside 0-100.
    pub fn set_phase(mut self, phase: Phase, confidence: u8) -> Result<Self, DocumentError> {
        let confidence = Confidence::new(confidence)?;
        self.cognitive_phase = Some(CognitivePhase { phase, confidence });
        Ok(self)
    }

    /// Appends a reasoning pattern.
    pub fn add_reasoning_pattern(mut self, pattern: ReasoningPattern) -> Self {
        self.reasoning.push(pattern);
        self
    }

    /// Appends an assumption.
    ///
    /// Fails with `InvalidValue` when a confidence is given outside 0-100.
    pub fn add_assumption(
        mut self,
        description: impl Into<String>,
        validated: bool,
        confidence: Option<u8>,
        source: Option<&str>,
    ) -> Result<Self, DocumentError> {
        let confidence = confidence.map(Confidence::new).transpose()?;
        self.assumptions.push(Assumption {
            description: description.into(),
            validated,
            confidence,
            source: source.map(str::to_owned),
        });
        Ok(self)
    }

    /// Appends an unresolved tension.
    pub fn add_tension(
        mut self,
        description: impl Into<String>,
        impact: Impact,
        mitigation: Option<&str>,
    ) -> Self {
        self.unresolved_tensions.push(Tension {
            description: description.into(),
            impact,
            mitigation: mitigation.map(str::to_owned),
        });
        self
    }

    /// Sets or replaces the synthesis, starting with empty alternative and
    /// follow-up lists.
    pub fn synthesize(
        mut self,
        decision: impl Into<String>,
        rationale: impl Into<String>,
    ) -> Self {
        self.synthesis = Some(Synthesis::new(decision, rationale));
        self
    }

    /// Appends a rejected alternative to the synthesis.
    ///
    /// Fails with `InvalidValue` when no synthesis has been recorded yet.
    pub fn add_alternative(
        mut self,
        decision: impl Into<String>,
        rationale_against: impl Into<String>,
        conditions_for_reconsideration: Option<&str>,
    ) -> Result<Self, DocumentError> {
        match self.synthesis.as_mut() {
            Some(synthesis) => {
                synthesis.alternatives.push(Alternative {
                    decision: decision.into(),
                    rationale_against: rationale_against.into(),
                    conditions_for_reconsideration: conditions_for_reconsideration
                        .map(str::to_owned),
                });
                Ok(self)
            }
            None => Err(DocumentError::invalid_value(
                "synthesis",
                "record a synthesis before adding alternatives",
            )),
        }
    }

    /// Appends a follow-up action to the synthesis.
    ///
    /// Fails with `InvalidValue` when no synthesis has been recorded yet.
    pub fn add_follow_up(
        mut self,
        action: impl Into<String>,
        owner: Option<&str>,
        due_date: Option<NaiveDate>,
    ) -> Result<Self, DocumentError> {
        match self.synthesis.as_mut() {
            Some(synthesis) => {
                synthesis.follow_ups.push(FollowUp {
                    action: action.into(),
                    owner: owner.map(str::to_owned),
                    due_date,
                });
                Ok(self)
            }
            None => Err(DocumentError::invalid_value(
                "synthesis",
                "record a synthesis before adding follow-ups",
            )),
        }
    }

    /// Appends a tag to the lifecycle metadata.
    pub fn add_tag(mut self, tag: impl Into<String>) -> Self {
        self.meta.tags.push(tag.into());
        self
    }

    /// Marks the decision approved and refreshes `meta.updated_at`.
    pub fn approve(mut self) -> Self {
        self.meta.status = DecisionStatus::Approved;
        self.meta.updated_at = Some(Timestamp::now());
        self
    }
}
