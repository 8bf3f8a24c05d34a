//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the document models to the outside world:
//! - `codec` - YAML/JSON text and file round-tripping
//! - `validation` - JSON Schema validation

pub mod codec;
pub mod validation;

pub use validation::JsonSchemaValidator;
