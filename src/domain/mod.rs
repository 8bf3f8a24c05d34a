//! Domain layer containing the document models and their builders.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `decision` - Decision record documents (constraints, objectives, synthesis)
//! - `context` - Context record documents (policies, facts)
//!
//! The JSON Schemas both families validate against live in `schemas/`.

pub mod context;
pub mod decision;
pub mod foundation;
