//! Shared types for CLI command handlers.

use std::fmt;

/// Result type used by all CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,
    /// Input failed validation (bad color, unknown context, ...).
    ValidationFailed = 1,
    /// An I/O or serialization operation failed.
    IoError = 2,
}

/// Error raised by a CLI command handler.
#[derive(Debug)]
pub struct CliError {
    message: String,
    code: ExitCode,
}

impl CliError {
    /// Builds an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: ExitCode::IoError,
        }
    }

    /// Builds a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: ExitCode::ValidationFailed,
        }
    }

    /// The exit code this error maps to.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        self.code
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}
