//! # Hotel State
//!
//! The shared hotel and the store it is saved to.
//!
//! ## Thread Safety
//! The hotel sits behind `Arc<Mutex<T>>`. Every write command holds the lock
//! from the conflict check to the end of the persist, so two desks can never
//! both pass the check for the same room and nights.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Write Command Sequence                               │
//! │                                                                         │
//! │  lock ──► snapshot ledger ──► validate + mutate (albergo-core)          │
//! │                                   │                                     │
//! │                         error ◄───┤ (ledger untouched)                  │
//! │                                   ▼                                     │
//! │                              store.persist(ledger)                      │
//! │                                   │                                     │
//! │         failure: restore snapshot ┤                                     │
//! │                                   ▼                                     │
//! │                                unlock                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use albergo_core::{CoreResult, Hotel};
use albergo_store::{LedgerStore, MemoryStore, StoreResult};
use tracing::{error, info};

use crate::error::ApiResult;

pub struct HotelState {
    hotel: Arc<Mutex<Hotel>>,
    store: Arc<dyn LedgerStore>,
}

impl HotelState {
    /// Restores the ledger from `store` into `hotel`.
    pub fn open(mut hotel: Hotel, store: Arc<dyn LedgerStore>) -> StoreResult<Self> {
        let ledger = store.load(hotel.inventory(), hotel.catalog())?;
        info!(stays = ledger.len(), "Ledger restored");
        hotel.replace_ledger(ledger);

        Ok(HotelState {
            hotel: Arc::new(Mutex::new(hotel)),
            store,
        })
    }

    /// A hotel whose bookings live only as long as the process.
    pub fn in_memory(hotel: Hotel) -> Self {
        HotelState {
            hotel: Arc::new(Mutex::new(hotel)),
            store: Arc::new(MemoryStore::new()),
        }
    }

    /// Executes a function with read access to the hotel.
    pub fn with_hotel<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Hotel) -> R,
    {
        let hotel = self.hotel.lock().expect("Hotel mutex poisoned");
        f(&hotel)
    }

    /// Runs a write under the lock and persists the ledger when it succeeds.
    ///
    /// If the store fails, the in-memory ledger is put back to what it was
    /// before `f` ran, so memory and disk never disagree.
    pub fn with_hotel_mut<F, R>(&self, f: F) -> ApiResult<R>
    where
        F: FnOnce(&mut Hotel) -> CoreResult<R>,
    {
        let mut hotel = self.hotel.lock().expect("Hotel mutex poisoned");
        let before = hotel.ledger().clone();

        let result = f(&mut *hotel)?;

        if let Err(e) = self.store.persist(hotel.ledger()) {
            error!("Persist failed, rolling back ledger");
            hotel.replace_ledger(before);
            return Err(e.into());
        }

        Ok(result)
    }
}

impl std::fmt::Debug for HotelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HotelState").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use albergo_core::{BookingRequest, Ledger};
    use albergo_store::{JsonFileStore, StoreError};
    use std::thread;

    /// A store that refuses every write.
    struct BrokenStore;

    impl LedgerStore for BrokenStore {
        fn load(
            &self,
            _: &albergo_core::inventory::Inventory,
            _: &albergo_core::catalog::Catalog,
        ) -> StoreResult<Ledger> {
            Ok(Ledger::new())
        }

        fn persist(&self, _: &Ledger) -> StoreResult<()> {
            Err(StoreError::io(
                std::path::Path::new("broken.json"),
                std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            ))
        }
    }

    fn mario() -> BookingRequest {
        BookingRequest::new("Mario", "Rossi", "101", "2025-08-01", "2025-08-03")
    }

    #[test]
    fn test_failed_persist_rolls_back() {
        let state = HotelState::open(Hotel::standard(), Arc::new(BrokenStore)).unwrap();

        assert!(state.with_hotel_mut(|h| h.book(mario())).is_err());
        assert!(state.with_hotel(|h| h.ledger().is_empty()));
    }

    #[test]
    fn test_open_restores_persisted_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let store: Arc<dyn LedgerStore> = Arc::new(JsonFileStore::new(dir.path().join("albergo.json")));

        let state = HotelState::open(Hotel::standard(), Arc::clone(&store)).unwrap();
        state.with_hotel_mut(|h| h.book(mario())).unwrap();

        let reopened = HotelState::open(Hotel::standard(), store).unwrap();
        assert_eq!(reopened.with_hotel(|h| h.ledger().len()), 1);
    }

    #[test]
    fn test_concurrent_bookings_for_same_room_admit_one() {
        let state = Arc::new(HotelState::in_memory(Hotel::standard()));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let state = Arc::clone(&state);
                thread::spawn(move || {
                    let request = BookingRequest::new(
                        "Guest",
                        format!("N{}", i),
                        "101",
                        "2025-08-01",
                        "2025-08-03",
                    );
                    state.with_hotel_mut(|h| h.book(request)).is_ok()
                })
            })
            .collect();

        let admitted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(admitted, 1);
        assert_eq!(state.with_hotel(|h| h.ledger().len()), 1);
    }
}
