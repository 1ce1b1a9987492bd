//! # Client Store Trait

use std::sync::Arc;

use crate::client::ClientRecord;

use super::errors::StoreResult;

/// Whole-collection persistence for client records.
///
/// `load` and `save` always operate on the full ordered sequence.
pub trait ClientStore: Send + Sync {
    /// Returns every stored record in storage order; empty if nothing has
    /// been stored yet.
    fn load(&self) -> StoreResult<Vec<ClientRecord>>;

    /// Replaces the stored collection with `records`.
    fn save(&self, records: &[ClientRecord]) -> StoreResult<()>;
}

impl<T: ClientStore + ?Sized> ClientStore for Arc<T> {
    fn load(&self) -> StoreResult<Vec<ClientRecord>> {
        (**self).load()
    }

    fn save(&self, records: &[ClientRecord]) -> StoreResult<()> {
        (**self).save(records)
    }
}
