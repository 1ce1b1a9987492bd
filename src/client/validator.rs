//! Payload validator
//!
//! Checks run in a fixed order and stop at the first failing rule:
//! 1. content type is JSON and the body is a JSON object
//! 2. all required keys are present
//! 3. name fields and birthDate are non-blank strings
//! 4. status is a boolean
//! 5. birthDate matches `YYYY-MM-DDTHH:MM:SS`
//!
//! Validation does not mutate or trim the submitted values.

use chrono::{Datelike, NaiveDateTime};
use serde_json::{Map, Value};

use super::errors::{ValidationError, ValidationResult};
use super::record::ClientSubmission;

/// Required keys in declaration order
pub const REQUIRED_FIELDS: [&str; 5] = ["lastName", "firstName", "patrName", "birthDate", "status"];

/// Accepted birthDate layout
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Byte layout of a birthDate: `d` is an ASCII digit, anything else is literal
const BIRTH_DATE_SHAPE: &[u8; 19] = b"dddd-dd-ddTdd:dd:dd";

/// Validates a raw request: content type, body shape, then fields.
pub fn validate_request(content_type: Option<&str>, body: &[u8]) -> ValidationResult<ClientSubmission> {
    if !content_type.map(is_json_content_type).unwrap_or(false) {
        return Err(ValidationError::NotJson);
    }

    let value: Value = serde_json::from_slice(body).map_err(|_| ValidationError::MalformedBody)?;
    match value {
        Value::Object(fields) => validate_fields(&fields),
        _ => Err(ValidationError::MalformedBody),
    }
}

/// Validates an already-parsed JSON object.
pub fn validate_fields(fields: &Map<String, Value>) -> ValidationResult<ClientSubmission> {
    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|name| !fields.contains_key(*name))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let last_name = non_blank(&fields["lastName"]);
    let first_name = non_blank(&fields["firstName"]);
    let patr_name = non_blank(&fields["patrName"]);
    let birth_date = non_blank(&fields["birthDate"]);

    let (Some(last_name), Some(first_name), Some(patr_name), Some(birth_date)) =
        (last_name, first_name, patr_name, birth_date)
    else {
        return Err(ValidationError::InvalidNames);
    };

    let status = fields["status"]
        .as_bool()
        .ok_or(ValidationError::InvalidStatus)?;

    let born_at = parse_birth_date(birth_date)?;

    Ok(ClientSubmission {
        last_name: last_name.to_string(),
        first_name: first_name.to_string(),
        patr_name: patr_name.to_string(),
        birth_date: birth_date.to_string(),
        born_at,
        status,
    })
}

/// Parses a birthDate in the exact `YYYY-MM-DDTHH:MM:SS` layout.
///
/// Zero-padded fields, years 1 through 9999, no sign, no timezone, no
/// fractional seconds, no surrounding whitespace.
pub fn parse_birth_date(value: &str) -> ValidationResult<NaiveDateTime> {
    if !matches_shape(value.as_bytes()) {
        return Err(ValidationError::InvalidBirthDate);
    }
    NaiveDateTime::parse_from_str(value, BIRTH_DATE_FORMAT)
        .ok()
        .filter(|born_at| born_at.year() >= 1)
        .ok_or(ValidationError::InvalidBirthDate)
}

fn matches_shape(bytes: &[u8]) -> bool {
    bytes.len() == BIRTH_DATE_SHAPE.len()
        && bytes
            .iter()
            .zip(BIRTH_DATE_SHAPE)
            .all(|(&b, &shape)| match shape {
                b'd' => b.is_ascii_digit(),
                literal => b == literal,
            })
}

/// `application/json` or any `application/*+json`, parameters ignored.
pub fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

fn non_blank(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.trim().is_empty())
}
