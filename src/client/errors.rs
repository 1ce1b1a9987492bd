//! # Validation Errors
//!
//! Client-facing rejections of a submitted payload. All of them map to
//! `400 Bad Request`.

use thiserror::Error;

/// Result type for payload validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Reasons a submitted client payload is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Request content type is not JSON
    #[error("Content-Type must be application/json")]
    NotJson,

    /// Body does not parse to a JSON object
    #[error("Invalid JSON")]
    MalformedBody,

    /// Required keys absent, in declaration order
    #[error("Missing fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A name field or birthDate is not a non-blank string
    #[error("Fields lastName, firstName, patrName and birthDate must be non-empty strings")]
    InvalidNames,

    /// status is present but not a JSON boolean
    #[error("Field status must be a boolean")]
    InvalidStatus,

    /// birthDate does not match YYYY-MM-DDTHH:MM:SS
    #[error("Invalid birthDate format. Use YYYY-MM-DDTHH:MM:SS")]
    InvalidBirthDate,
}

impl ValidationError {
    /// Short machine-readable tag, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::NotJson | ValidationError::MalformedBody => "body_schema",
            ValidationError::MissingFields(_) => "missing_field",
            ValidationError::InvalidNames | ValidationError::InvalidStatus => "type",
            ValidationError::InvalidBirthDate => "date_format",
        }
    }
}
