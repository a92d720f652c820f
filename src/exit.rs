// src/exit.rs
//! Standardized process exit codes for `vitals`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum VitalsExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (IO, config, walk failure).
    Error = 1,
    /// Input validation failed (unknown or empty argument).
    InvalidInput = 2,
    /// The scan or report surfaced critical issues.
    CriticalIssues = 3,
}

impl VitalsExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for VitalsExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
