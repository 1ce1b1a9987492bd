//! # In-Memory Store

use std::sync::RwLock;

use crate::client::ClientRecord;

use super::backend::ClientStore;
use super::errors::{StoreError, StoreResult};

/// Client store held in memory, for tests and ephemeral runs
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<Vec<ClientRecord>>,
    saves: RwLock<usize>,
    load_fault: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `records`
    pub fn with_records(records: Vec<ClientRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            ..Self::default()
        }
    }

    /// Store whose every load fails as corrupt storage
    pub fn corrupt(reason: impl Into<String>) -> Self {
        Self {
            load_fault: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Current contents
    pub fn records(&self) -> Vec<ClientRecord> {
        self.records.read().map(|r| r.clone()).unwrap_or_default()
    }

    /// Number of completed saves
    pub fn save_count(&self) -> usize {
        self.saves.read().map(|n| *n).unwrap_or_default()
    }
}

impl ClientStore for InMemoryStore {
    fn load(&self) -> StoreResult<Vec<ClientRecord>> {
        if let Some(reason) = &self.load_fault {
            return Err(StoreError::Corrupt(reason.clone()));
        }
        self.records
            .read()
            .map(|r| r.clone())
            .map_err(|_| StoreError::Io("lock poisoned".to_string()))
    }

    fn save(&self, records: &[ClientRecord]) -> StoreResult<()> {
        let mut stored = self
            .records
            .write()
            .map_err(|_| StoreError::Io("lock poisoned".to_string()))?;
        *stored = records.to_vec();

        let mut saves = self
            .saves
            .write()
            .map_err(|_| StoreError::Io("lock poisoned".to_string()))?;
        *saves += 1;
        Ok(())
    }
}
