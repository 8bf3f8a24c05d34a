//! Validation Adapters - Schema validation implementations.
//!
//! Contains adapters for validating documents against their published
//! JSON Schemas.

mod json_schema_validator;

pub use json_schema_validator::JsonSchemaValidator;
