//! # JSON File Store
//!
//! Keeps the ledger in one pretty-printed JSON file.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  persist(ledger)                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LedgerRecord::from_ledger → serde_json::to_string_pretty               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  write albergo.json.tmp   (same directory as the target)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rename → albergo.json    (readers see the old or the new file, never   │
//! │                            a half-written one)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use albergo_core::catalog::Catalog;
use albergo_core::inventory::Inventory;
use albergo_core::Ledger;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::record::LedgerRecord;
use crate::LedgerStore;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl LedgerStore for JsonFileStore {
    fn load(&self, inventory: &Inventory, catalog: &Catalog) -> StoreResult<Ledger> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "No snapshot yet, starting with an empty ledger");
            return Ok(Ledger::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let record: LedgerRecord = serde_json::from_str(&contents)?;
        let ledger = record.into_ledger(inventory, catalog)?;

        info!(path = %self.path.display(), stays = ledger.len(), "Ledger loaded");
        Ok(ledger)
    }

    fn persist(&self, ledger: &Ledger) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(&LedgerRecord::from_ledger(ledger))?;
        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|e| StoreError::io(&temp, e))?;
        fs::rename(&temp, &self.path).map_err(|e| StoreError::io(&self.path, e))?;

        debug!(path = %self.path.display(), stays = ledger.len(), "Ledger persisted");
        Ok(())
    }
}
