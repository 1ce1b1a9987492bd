//! # Upstream Submitter
//!
//! Reads a local patient list, converts the first active patient into the
//! `/client` payload and posts it once.

mod errors;
mod sender;
mod source;

pub use errors::{SubmitError, SubmitResult};
pub use sender::{submit, SubmitTarget, SUBMIT_TIMEOUT};
pub use source::{load_first_active, split_fio, to_wire_birth_date, ClientPayload, SourcePatient};
