//! Hansard - Typed decision and context records with schema-backed validation.
//!
//! This crate models two small document formats: decision records, which
//! capture one decision's intent, boundaries, reasoning state, and outcome,
//! and context records, which capture the policies and facts a decision is
//! made under. Documents build up through fluent methods, round-trip
//! losslessly through YAML or JSON, and validate against published JSON
//! Schemas with every violation reported as data.
//!
//! ```rust,ignore
//! use hansard::{codec, DecisionDocument, Format, JsonSchemaValidator, Phase};
//!
//! let doc = DecisionDocument::new(
//!     "Use PostgreSQL for Primary Database",
//!     "architecture",
//!     "Choose the primary datastore for the new platform",
//! )
//! .add_constraint("Must support JSONB", Some("platform team"), false)
//! .set_phase(Phase::Decision, 85)?;
//!
//! let validator = JsonSchemaValidator::new()?;
//! assert!(validator.validate_decision(&doc).is_empty());
//!
//! codec::save(&doc, "records/postgres.yaml")?;
//! let reloaded: DecisionDocument = codec::load("records/postgres.yaml")?;
//! assert_eq!(doc, reloaded);
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::codec;
pub use adapters::validation::JsonSchemaValidator;
pub use domain::context::{
    ContextDocument, Enforcement, Fact, FactType, FactValue, Policy, PolicyStatus, PolicyType,
    Provenance, CRF_VERSION,
};
pub use domain::decision::{
    Alternative, Assumption, CognitivePhase, Constraint, DecisionDocument, DecisionStatus,
    FollowUp, Impact, Meta, Objective, Phase, Priority, ReasoningPattern, Synthesis, Tension,
    DRF_VERSION,
};
pub use domain::foundation::{
    Confidence, ContextId, DecisionId, DocumentError, DocumentKind, Format, Timestamp,
};
pub use ports::{SchemaValidator, ValidationIssue, ViolationKind};
