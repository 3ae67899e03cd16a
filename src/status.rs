//! Exit status codes for the CLI
//!
//! apidocgen follows standard Unix exit code conventions:
//! - 0: Success
//! - 1: Any error (unreadable model, failed render, failed write)
//! - 2: The model was loaded but violates one or more invariants (`--validate`)

use std::process::{ExitCode, Termination};

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Every requested artifact was generated
    Success = 0,
    /// Any error
    Error = 1,
    /// Model validation reported violations
    Invalid = 2,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}

impl ExitStatus {
    /// Create an exit status from a raw exit code
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ExitStatus::Success,
            2 => ExitStatus::Invalid,
            _ => ExitStatus::Error,
        }
    }
}
