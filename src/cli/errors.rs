//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use thiserror::Error;

use crate::submit::SubmitError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing, unreadable, or invalid
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime or listener could not be started
    #[error("Boot failed: {0}")]
    BootFailed(String),

    /// Submission failed
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

impl CliError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        CliError::BootFailed(msg.into())
    }

    /// Stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "CLI_CONFIG_ERROR",
            CliError::BootFailed(_) => "CLI_BOOT_FAILED",
            CliError::Submit(_) => "CLI_SUBMIT_FAILED",
        }
    }
}
