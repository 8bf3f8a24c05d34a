//! Context module - the context record document family.
//!
//! A context document carries the organizational policies and facts a
//! decision is made against.

mod enums;
mod parts;
mod document;

pub use enums::{Enforcement, FactType, PolicyStatus, PolicyType};
pub use parts::{Fact, FactValue, Policy, Provenance};
pub use document::{ContextDocument, CRF_VERSION};
