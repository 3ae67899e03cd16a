//! Execution context

mod environment;

pub use environment::{Environment, CONFIG_DIR_ENV};
