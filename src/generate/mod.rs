//! Artifact generation
//!
//! Turns the document model into text:
//!
//! - **Blueprint**: an API Blueprint document for every group
//! - **Test source**: a supertest/chai suite per group, with assertions
//!   built from the example response body and rewritten by conditions
//! - **Monitor config**: a JSON snapshot of the model for API monitoring
//!
//! Everything here is pure; writing files is left to [`crate::output`].

pub mod assertions;
pub mod blueprint;
pub mod conditions;
pub mod monitor;
pub mod test_source;
mod uri;

pub use assertions::{build_assertions, render_path, Accessor, AssertionKind, AssertionRecord};
pub use blueprint::render_blueprint;
pub use conditions::{apply_conditions, resolve_key_path};
pub use monitor::MonitorConfig;
pub use test_source::{render_assertion, render_test_source, BaseUrl, TestSourceOptions};
pub use uri::substitute_uri;
