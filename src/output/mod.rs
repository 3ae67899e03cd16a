//! Output handling (writing generated artifacts)

pub mod writer;

pub use writer::{write_monitor_config, write_test_sources, write_text, STDOUT_PATH};
pub use crate::fs::test_file_name;
