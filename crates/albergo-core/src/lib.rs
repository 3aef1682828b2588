//! # albergo-core: Room Allocation and Pricing for Albergo
//!
//! This crate holds every hotel rule as pure functions over plain values:
//! which rooms are free, what a stay costs, whether an edit is allowed and
//! how much the hotel earned. No file, clock or network access happens here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Albergo Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Front desk (albergo-frontdesk)                  │   │
//! │  │   check_availability, book_stay, edit_stay, net_revenue, ...    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ albergo-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  ledger   │  │  pricing  │  │  revenue  │  │modification│ │   │
//! │  │   │ overlaps  │  │ standard  │  │  gross    │  │  guard     │  │   │
//! │  │   │ available │  │ tiered    │  │  net      │  │  apply     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 albergo-store (persistence)                     │   │
//! │  │              JSON snapshot file, in-memory store                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Room, Service, Stay
//! - [`inventory`] / [`catalog`] - the fixed rooms and add-ons
//! - [`ledger`] - stored stays, overlap and availability queries
//! - [`pricing`] - standard and discounted stay prices
//! - [`discount`] - discount tiers and the per-stay variant
//! - [`revenue`] - gross income and net revenue over a window
//! - [`modification`] - edit guard and edit application
//! - [`booking`] - request validation and insertion
//! - [`hotel`] - the aggregate tying it together
//! - [`money`] / [`dates`] - integer euros and calendar dates
//! - [`error`] / [`validation`] - typed errors and field checks
//!
//! ## Example Usage
//!
//! ```rust
//! use albergo_core::{BookingRequest, Hotel, Money};
//! use albergo_core::pricing::price;
//!
//! let mut hotel = Hotel::standard();
//! let stay = hotel
//!     .book(BookingRequest::new("Mario", "Rossi", "101", "2025-08-01", "2025-08-03")
//!         .with_discount_code("VIP2025"))
//!     .unwrap();
//!
//! // 2 nights × €80, 20% off
//! assert_eq!(price(&stay), Money::from_euros(128));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod booking;
pub mod catalog;
pub mod dates;
pub mod discount;
pub mod error;
pub mod hotel;
pub mod inventory;
pub mod ledger;
pub mod modification;
pub mod money;
pub mod pricing;
pub mod revenue;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use booking::BookingRequest;
pub use dates::StayWindow;
pub use discount::{DiscountRate, DiscountTable, DiscountVariant};
pub use error::{CoreError, CoreResult, ValidationError};
pub use hotel::Hotel;
pub use ledger::{AvailabilityReason, Ledger, RoomStatus};
pub use modification::StayEdit;
pub use money::Money;
pub use pricing::{DiscountBreakdown, PriceQuote};
pub use revenue::RevenueSummary;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a guest name or service name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a discount code.
pub const MAX_CODE_LENGTH: usize = 64;

/// Ceiling for any nightly, daily or per-service price (€1,000,000.00).
pub const MAX_PRICE_CENTS: i64 = 100_000_000;
