//! Shared error and exit-code types for CLI commands.

use std::fmt;

/// Process exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Bad arguments or usage
    Usage = 2,
    /// Input failed validation (e.g., unknown color name)
    Validation = 3,
    /// I/O failure (database, clipboard, output)
    Io = 4,
}

/// Error type for CLI command execution.
#[derive(Debug, Clone)]
pub enum CliError {
    /// Bad arguments or usage
    Usage(String),
    /// Input failed validation
    Validation(String),
    /// I/O failure
    Io(String),
}

impl CliError {
    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// The exit code this error maps to.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Usage(_) => ExitCode::Usage,
            Self::Validation(_) => ExitCode::Validation,
            Self::Io(_) => ExitCode::Io,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) | Self::Validation(msg) | Self::Io(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;
