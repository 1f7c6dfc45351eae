// crates/travelmap-core/src/loader/mod.rs

//! # State Storage
//!
//! Implementations of [`StateStorage`] and the store's load/save entry
//! points. The store itself never does I/O; these are the collaborators
//! that move its export document to and from a medium.

use crate::error::Result;
use crate::store::TravelStore;
use crate::traits::StateStorage;
use crate::transfer::ImportSummary;
use serde_json::Value;
use std::cell::RefCell;

#[cfg(feature = "json")]
mod common_io;
#[cfg(feature = "json")]
mod file;

#[cfg(feature = "json")]
pub use file::JsonFileStorage;

impl TravelStore {
    /// Build a store from whatever `storage` holds.
    ///
    /// An empty storage yields an empty store. Otherwise the document goes
    /// through [`import_snapshot`](TravelStore::import_snapshot), so history
    /// starts at the loaded state.
    pub fn restore(storage: &impl StateStorage) -> Result<(Self, Option<ImportSummary>)> {
        let mut store = TravelStore::new();
        let summary = match storage.load()? {
            Some(payload) => Some(store.import_snapshot(&payload)?),
            None => None,
        };
        Ok((store, summary))
    }

    /// Save the current export document to `storage`.
    pub fn persist(&self, storage: &impl StateStorage) -> Result<()> {
        let payload = self.export_value()?;
        storage.save(&payload)?;
        tracing::debug!(
            cities = self.cities().len(),
            trips = self.trips().len(),
            "state persisted"
        );
        Ok(())
    }
}

/// Keeps the document in memory. Handy for tests and for hosts that
/// persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<Value>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(payload: Value) -> Self {
        Self {
            slot: RefCell::new(Some(payload)),
        }
    }

    pub fn snapshot(&self) -> Option<Value> {
        self.slot.borrow().clone()
    }
}

impl StateStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Value>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, payload: &Value) -> Result<()> {
        *self.slot.borrow_mut() = Some(payload.clone());
        Ok(())
    }
}
