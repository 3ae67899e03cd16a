//! Document model
//!
//! The caller-supplied description of an API: groups of endpoint contracts
//! with their expected request and response bodies. Every generator reads
//! these values through shared references and never mutates them.

mod loader;
mod types;
mod validate;

pub use loader::{load_docs, parse_docs};
pub use types::{ApiDescription, ApiDoc, Condition, ConditionKind, ExampleValue, QueryParameter};
pub use validate::{placeholders, validate_doc, validate_docs, Violation};
