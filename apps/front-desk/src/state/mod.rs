//! # State Module
//!
//! Shared state handed to every front-desk command.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────────┐    │
//! │  │         HotelState           │  │         ConfigState          │    │
//! │  │                              │  │                              │    │
//! │  │  Arc<Mutex<Hotel>>           │  │  hotel_name                  │    │
//! │  │  Arc<dyn LedgerStore>        │  │  data_path                   │    │
//! │  │                              │  │  daily_cost_cents            │    │
//! │  └──────────────────────────────┘  └──────────────────────────────┘    │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • HotelState: one lock around check, write and persist                │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod hotel;

pub use config::{default_data_path, ConfigState, SNAPSHOT_FILE};
pub use hotel::HotelState;
