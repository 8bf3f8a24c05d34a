//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SchemaValidator` - Port for checking documents against their
//!   published JSON Schemas, returning every violation as plain data

mod schema_validator;

pub use schema_validator::{SchemaValidator, ValidationIssue, ViolationKind};
