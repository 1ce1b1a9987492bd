//! # Submit Errors

use thiserror::Error;

/// Result type for the submitter
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Failures of a one-shot submission. None of them are retried.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Source file unreadable or not a JSON array
    #[error("Source error: {0}")]
    Source(String),

    /// Every source patient is marked deleted
    #[error("No patients with deleted != 1 in source")]
    NoActivePatient,

    /// Full name has fewer than three tokens
    #[error("Cannot split full name into 3 parts: '{0}'")]
    ShortName(String),

    /// Birth date is not DD.MM.YYYY
    #[error("Invalid birth date '{0}', expected DD.MM.YYYY")]
    BirthDate(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Could not connect to server: {0}")]
    Connect(String),

    #[error("Request failed: {0}")]
    Request(String),

    /// Server replied with a body that is not JSON
    #[error("Server returned invalid JSON: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SubmitError::Timeout
        } else if e.is_connect() {
            SubmitError::Connect(e.to_string())
        } else {
            SubmitError::Request(e.to_string())
        }
    }
}
