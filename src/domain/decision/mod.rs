//! Decision module - the decision record document family.
//!
//! A decision document records one decision: its intent, boundaries,
//! reasoning state, and outcome.

mod enums;
mod parts;
mod document;

pub use enums::{DecisionStatus, Impact, Phase, Priority, ReasoningPattern};
pub use parts::{
    Alternative, Assumption, CognitivePhase, Constraint, FollowUp, Meta, Objective, Synthesis,
    Tension,
};
pub use document::{DecisionDocument, DRF_VERSION};
