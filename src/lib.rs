//! apidocgen library interface
//!
//! Generates API Blueprint documents, supertest/chai test suites and
//! monitoring configurations from a JSON description of an HTTP API.
//!
//! # Module Organization
//!
//! - [`model`] - The document model and model file loading
//! - [`generate`] - Blueprint, test source and monitor config generation
//! - [`output`] - Writing generated artifacts
//! - [`errors`] - Error types (ApidocError, Result)
//! - [`status`] - Exit status codes (ExitStatus)
//! - [`core`] - Main execution logic

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod errors;
pub mod fs;
pub mod generate;
pub mod http;
pub mod json;
pub mod logging;
pub mod model;
pub mod output;
pub mod status;
pub mod strings;
