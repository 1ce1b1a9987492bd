//! Source patient list
//!
//! The upstream list is a JSON array of patients with a free-form full name
//! (`fio`), a `DD.MM.YYYY` birth date and an optional `deleted` flag. This
//! module turns the first active patient into the `/client` wire payload.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{SubmitError, SubmitResult};

/// Time of day appended to converted birth dates
pub const BIRTH_TIME_SUFFIX: &str = "T11:16:32";

/// One entry of the upstream list
#[derive(Debug, Clone, Deserialize)]
pub struct SourcePatient {
    pub fio: String,
    pub birth_date: String,
}

/// Body of `POST /client`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    pub last_name: String,
    pub first_name: String,
    pub patr_name: String,
    pub birth_date: String,
    pub status: bool,
}

impl ClientPayload {
    pub fn from_patient(patient: &SourcePatient) -> SubmitResult<Self> {
        let (last_name, first_name, patr_name) = split_fio(&patient.fio)?;
        Ok(Self {
            last_name,
            first_name,
            patr_name,
            birth_date: to_wire_birth_date(&patient.birth_date)?,
            status: true,
        })
    }
}

/// Reads `path` and returns its first patient not marked deleted.
pub fn load_first_active(path: &Path) -> SubmitResult<SourcePatient> {
    let content = fs::read_to_string(path)
        .map_err(|e| SubmitError::Source(format!("{}: {}", path.display(), e)))?;
    first_active(&content)
}

fn first_active(content: &str) -> SubmitResult<SourcePatient> {
    let patients: Vec<Value> =
        serde_json::from_str(content).map_err(|e| SubmitError::Source(e.to_string()))?;

    let patient = patients
        .into_iter()
        .find(|p| !is_deleted(p.get("deleted")))
        .ok_or(SubmitError::NoActivePatient)?;

    serde_json::from_value(patient).map_err(|e| SubmitError::Source(e.to_string()))
}

fn is_deleted(flag: Option<&Value>) -> bool {
    match flag {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() == Some(1.0),
        _ => false,
    }
}

/// Splits on whitespace: surname, given name, then the rest as patronymic.
pub fn split_fio(fio: &str) -> SubmitResult<(String, String, String)> {
    let parts: Vec<&str> = fio.split_whitespace().collect();
    match parts.as_slice() {
        [last, first, rest @ ..] if !rest.is_empty() => {
            Ok((last.to_string(), first.to_string(), rest.join(" ")))
        }
        _ => Err(SubmitError::ShortName(fio.to_string())),
    }
}

/// `DD.MM.YYYY` to `YYYY-MM-DDT11:16:32`
pub fn to_wire_birth_date(value: &str) -> SubmitResult<String> {
    let date = NaiveDate::parse_from_str(value, "%d.%m.%Y")
        .map_err(|_| SubmitError::BirthDate(value.to_string()))?;
    Ok(format!("{}{}", date.format("%Y-%m-%d"), BIRTH_TIME_SUFFIX))
}
