//! # Client Records
//!
//! The persisted [`ClientRecord`], its public projection [`ClientView`], and
//! the typed [`ClientSubmission`] produced by validation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::age::age_at;

/// Prefix of every generated client id
pub const CLIENT_ID_PREFIX: &str = "usr_";

/// A stored client.
///
/// `id`, `fio` and `age` are written once at creation. Only `status` changes
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "patrName")]
    pub patr_name: String,
    /// Stored verbatim as submitted
    #[serde(rename = "birthDate")]
    pub birth_date: String,
    pub status: bool,
    #[serde(rename = "FIO")]
    pub fio: String,
    pub age: u32,
}

impl ClientRecord {
    /// Build a new record from a validated submission.
    pub fn create(submission: ClientSubmission, id: String, now: NaiveDateTime) -> Self {
        let fio = full_name(
            &submission.last_name,
            &submission.first_name,
            &submission.patr_name,
        );
        let age = age_at(submission.born_at, now);

        Self {
            id,
            last_name: submission.last_name,
            first_name: submission.first_name,
            patr_name: submission.patr_name,
            birth_date: submission.birth_date,
            status: submission.status,
            fio,
            age,
        }
    }

    pub fn identity(&self) -> IdentityKey<'_> {
        IdentityKey {
            last_name: &self.last_name,
            first_name: &self.first_name,
            patr_name: &self.patr_name,
            birth_date: &self.birth_date,
        }
    }

    pub fn view(&self) -> ClientView {
        ClientView {
            id: self.id.clone(),
            fio: self.fio.clone(),
            age: self.age,
        }
    }
}

/// Public projection returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientView {
    pub id: String,
    #[serde(rename = "FIO")]
    pub fio: String,
    pub age: u32,
}

/// Identity of a client: compared by exact, case-sensitive string equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityKey<'a> {
    pub last_name: &'a str,
    pub first_name: &'a str,
    pub patr_name: &'a str,
    pub birth_date: &'a str,
}

/// A payload that passed every validation rule.
///
/// Name fields and `birth_date` keep the caller's exact text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSubmission {
    pub last_name: String,
    pub first_name: String,
    pub patr_name: String,
    pub birth_date: String,
    pub born_at: NaiveDateTime,
    pub status: bool,
}

impl ClientSubmission {
    pub fn identity(&self) -> IdentityKey<'_> {
        IdentityKey {
            last_name: &self.last_name,
            first_name: &self.first_name,
            patr_name: &self.patr_name,
            birth_date: &self.birth_date,
        }
    }
}

/// Single-space join of the three name parts, trimmed at the outer edges.
pub fn full_name(last_name: &str, first_name: &str, patr_name: &str) -> String {
    format!("{} {} {}", last_name, first_name, patr_name)
        .trim()
        .to_string()
}

/// Id for a record created at `now`: `usr_` + `YYYYMMDDHHMMSS` + microseconds.
pub fn client_id_at(now: NaiveDateTime) -> String {
    format!("{}{}", CLIENT_ID_PREFIX, now.format("%Y%m%d%H%M%S%6f"))
}
