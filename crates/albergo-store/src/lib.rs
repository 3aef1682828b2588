//! # albergo-store: Persistence for the Albergo Ledger
//!
//! Saves the stay ledger between runs and restores it against the current
//! room inventory and service catalog.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Albergo Data Flow                                │
//! │                                                                         │
//! │  Front desk command (book_stay)                                        │
//! │       │  validate + insert in albergo-core                             │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  albergo-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  LedgerStore  │    │ JsonFileStore │    │ MemoryStore  │  │   │
//! │  │   │   (trait)     │◄───│  (file.rs)    │    │ (memory.rs)  │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │  records (record.rs)          │   │
//! │  └────────────────────────────────┼────────────────────────────────┘   │
//! │                                   ▼                                     │
//! │                 <data dir>/albergo.json                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`file`] - JSON snapshot file with atomic replace
//! - [`memory`] - in-process store
//! - [`record`] - snapshot layout and conversions
//! - [`error`] - store error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod file;
pub mod memory;
pub mod record;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use albergo_core::catalog::Catalog;
use albergo_core::inventory::Inventory;
use albergo_core::Ledger;

/// Where the ledger lives between runs.
///
/// `persist` is called with the whole ledger after every accepted change;
/// implementations replace the previous snapshot.
pub trait LedgerStore: Send + Sync {
    /// Restores the ledger, reattaching stays to `inventory` and `catalog`.
    /// A store with nothing saved yet returns an empty ledger.
    fn load(&self, inventory: &Inventory, catalog: &Catalog) -> StoreResult<Ledger>;

    /// Replaces the saved snapshot with `ledger`.
    fn persist(&self, ledger: &Ledger) -> StoreResult<()>;
}
