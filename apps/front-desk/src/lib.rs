//! # Albergo Front Desk Library
//!
//! The hotel as the desk sees it: one shared [`Hotel`] behind a lock, saved
//! after every change, and a set of commands that speak DTOs and
//! `{ code, message }` errors.
//!
//! ## Module Organization
//! ```text
//! albergo_frontdesk/
//! ├── lib.rs             ◄─── You are here (tracing + bootstrap)
//! ├── state/
//! │   ├── mod.rs         ◄─── State type exports
//! │   ├── hotel.rs       ◄─── Locked hotel + ledger store
//! │   └── config.rs      ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs         ◄─── Command exports
//! │   ├── availability.rs◄─── Room search
//! │   ├── booking.rs     ◄─── Quote / book / edit / cancel
//! │   ├── revenue.rs     ◄─── Income reports
//! │   └── config.rs      ◄─── Configuration retrieval
//! └── error.rs           ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::sync::Arc;

use albergo_core::catalog::Catalog;
use albergo_core::inventory::Inventory;
use albergo_core::{Hotel, Ledger};
use albergo_store::{JsonFileStore, LedgerStore};
use tracing::{info, Subscriber};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use error::ApiResult;
use state::{ConfigState, HotelState};

/// Builds the shared hotel from configuration.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Front Desk Startup                                │
/// │                                                                         │
/// │  1. Discount tiers ─────────► parsed from config.discount_codes         │
/// │                                                                         │
/// │  2. Hotel ──────────────────► standard rooms + services + tiers         │
/// │                                                                         │
/// │  3. Store ──────────────────► data_path set:  JSON snapshot file        │
/// │                               data_path None: memory only               │
/// │                                                                         │
/// │  4. Restore ────────────────► ledger loaded from the store              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Errors
/// - `VALIDATION_ERROR` for a malformed discount list
/// - `STORAGE_ERROR` when the snapshot exists but cannot be read
pub fn bootstrap(config: &ConfigState) -> ApiResult<HotelState> {
    let discounts = config.discount_table()?;
    let hotel = Hotel::new(Inventory::standard(), Catalog::standard(), discounts, Ledger::new());

    let state = match &config.data_path {
        Some(path) => {
            info!(?path, "Using ledger snapshot");
            let store: Arc<dyn LedgerStore> = Arc::new(JsonFileStore::new(path.clone()));
            HotelState::open(hotel, store)?
        }
        None => {
            info!("No data path configured, bookings kept in memory");
            HotelState::in_memory(hotel)
        }
    };

    info!(hotel = %config.hotel_name, "Front desk ready");
    Ok(state)
}

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info,albergo=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=albergo=trace` - Show trace for albergo crates only
/// - Default: [`DEFAULT_LOG_FILTER`] (INFO, DEBUG for albergo crates)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    log_subscriber(filter).init();
}

/// The fmt subscriber, with `filter` as its only level control.
fn log_subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt().with_env_filter(filter).finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::booking::{book_stay, list_stays, BookingInput};
    use crate::error::ErrorCode;

    fn booking() -> BookingInput {
        BookingInput {
            first_name: "Mario".to_string(),
            last_name: "Rossi".to_string(),
            room_number: "101".to_string(),
            check_in: "2025-08-01".to_string(),
            check_out: "2025-08-03".to_string(),
            guests: None,
            services: Vec::new(),
            discount_code: Some("GOLD".to_string()),
        }
    }

    #[test]
    fn test_bootstrap_in_memory_with_custom_tiers() {
        let config = ConfigState {
            data_path: None,
            discount_codes: "GOLD:50".to_string(),
            ..ConfigState::default()
        };
        let state = bootstrap(&config).unwrap();

        let stay = book_stay(&state, booking()).unwrap();
        assert_eq!(stay.total_cents, 8000);
    }

    #[test]
    fn test_bootstrap_restores_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigState {
            data_path: Some(dir.path().join("desk").join("albergo.json")),
            discount_codes: "GOLD:50".to_string(),
            ..ConfigState::default()
        };

        book_stay(&bootstrap(&config).unwrap(), booking()).unwrap();

        let restored = bootstrap(&config).unwrap();
        let stays = list_stays(&restored);
        assert_eq!(stays.len(), 1);
        assert_eq!(stays[0].total_cents, 8000);
    }

    #[test]
    fn test_default_log_filter_levels() {
        let subscriber = log_subscriber(EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(target: "hyper", tracing::Level::INFO));
            assert!(!tracing::enabled!(target: "hyper", tracing::Level::DEBUG));
            assert!(!tracing::enabled!(target: "hyper", tracing::Level::TRACE));

            assert!(tracing::enabled!(target: "albergo_frontdesk", tracing::Level::DEBUG));
            assert!(!tracing::enabled!(target: "albergo_frontdesk", tracing::Level::TRACE));
        });
    }

    #[test]
    fn test_bootstrap_rejects_bad_discount_list() {
        let config = ConfigState {
            data_path: None,
            discount_codes: "GOLD".to_string(),
            ..ConfigState::default()
        };
        assert_eq!(bootstrap(&config).unwrap_err().code, ErrorCode::ValidationError);
    }
}
