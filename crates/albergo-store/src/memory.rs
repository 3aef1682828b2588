//! # In-Memory Store
//!
//! Holds the last persisted snapshot in process memory. Used by tests and
//! by front desks started without a data file.

use std::sync::Mutex;

use albergo_core::catalog::Catalog;
use albergo_core::inventory::Inventory;
use albergo_core::Ledger;
use tracing::debug;

use crate::error::StoreResult;
use crate::record::LedgerRecord;
use crate::LedgerStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Mutex<Option<LedgerRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Number of stays in the last persisted snapshot.
    pub fn persisted_len(&self) -> usize {
        self.snapshot
            .lock()
            .expect("Store mutex poisoned")
            .as_ref()
            .map_or(0, |r| r.stays.len())
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self, inventory: &Inventory, catalog: &Catalog) -> StoreResult<Ledger> {
        let snapshot = self.snapshot.lock().expect("Store mutex poisoned").clone();
        match snapshot {
            Some(record) => record.into_ledger(inventory, catalog),
            None => Ok(Ledger::new()),
        }
    }

    fn persist(&self, ledger: &Ledger) -> StoreResult<()> {
        let record = LedgerRecord::from_ledger(ledger);
        debug!(stays = record.stays.len(), "Ledger kept in memory");
        *self.snapshot.lock().expect("Store mutex poisoned") = Some(record);
        Ok(())
    }
}
