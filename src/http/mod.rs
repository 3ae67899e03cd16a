//! HTTP protocol constants
//!
//! Provides the method vocabulary used to validate endpoint descriptions
//! and to emit request builder calls in generated test source.

mod method;

pub use method::*;
