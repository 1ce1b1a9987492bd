//! # Client Domain
//!
//! Validation of submitted payloads, derived fields, and the upsert service
//! that ties them to a [`ClientStore`](crate::store::ClientStore).

pub mod age;
pub mod clock;
pub mod errors;
pub mod record;
pub mod service;
pub mod validator;

pub use age::age_at;
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{ValidationError, ValidationResult};
pub use record::{ClientRecord, ClientSubmission, ClientView, IdentityKey};
pub use service::{ClientService, UpsertOutcome};
pub use validator::{validate_fields, validate_request};
