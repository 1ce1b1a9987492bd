//! # Client Service
//!
//! Upsert of a validated submission: load the collection, look up the
//! identity, then either append a new record or change the matched record's
//! status, and save. The whole cycle runs under one writer lock so requests
//! against the same store are serialized.

use std::sync::Mutex;

use chrono::{Duration, NaiveDateTime};

use crate::store::{find_by_identity, ClientStore, StoreResult};

use super::clock::Clock;
use super::record::{client_id_at, ClientRecord, ClientSubmission, ClientView};

/// What an upsert did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new record was appended
    Created(ClientView),
    /// An existing record's status was overwritten
    Updated(ClientView),
}

impl UpsertOutcome {
    pub fn view(&self) -> &ClientView {
        match self {
            UpsertOutcome::Created(view) | UpsertOutcome::Updated(view) => view,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, UpsertOutcome::Created(_))
    }
}

/// Client upsert service over a store and a clock
pub struct ClientService<S: ClientStore, C: Clock> {
    store: S,
    clock: C,
    writer: Mutex<()>,
}

impl<S: ClientStore, C: Clock> ClientService<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            writer: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates or updates the client identified by `submission`.
    ///
    /// On a storage error nothing is written.
    pub fn upsert(&self, submission: ClientSubmission) -> StoreResult<UpsertOutcome> {
        // The guard protects no data, so a poisoned lock is still usable.
        let _guard = self.writer.lock().unwrap_or_else(|e| e.into_inner());

        let mut records = self.store.load()?;

        match find_by_identity(&records, &submission.identity()) {
            Some(index) => {
                records[index].status = submission.status;
                self.store.save(&records)?;
                Ok(UpsertOutcome::Updated(records[index].view()))
            }
            None => {
                let now = self.clock.now();
                let id = unique_id(&records, now);
                let record = ClientRecord::create(submission, id, now);
                let view = record.view();
                records.push(record);
                self.store.save(&records)?;
                Ok(UpsertOutcome::Created(view))
            }
        }
    }
}

/// Id for `now`, stepped forward one microsecond at a time past any id
/// already present.
fn unique_id(records: &[ClientRecord], now: NaiveDateTime) -> String {
    let mut at = now;
    loop {
        let id = client_id_at(at);
        if !records.iter().any(|r| r.id == id) {
            return id;
        }
        at += Duration::microseconds(1);
    }
}
