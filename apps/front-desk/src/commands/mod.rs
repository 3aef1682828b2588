//! # Front-Desk Commands
//!
//! Every operation the desk can perform. Commands take the state they need
//! by reference and return `ApiResult<T>` (or a plain value when they cannot
//! fail).
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs           ◄─── You are here (exports)
//! ├── availability.rs  ◄─── Room search and per-room status
//! ├── booking.rs       ◄─── Quote, book, edit, cancel
//! ├── revenue.rs       ◄─── Gross income and net revenue
//! └── config.rs        ◄─── Configuration and discount tiers
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  book_stay(&HotelState, BookingInput)                                   │
//! │         │                                                               │
//! │         │ BookingInput ──► BookingRequest                               │
//! │         ▼                                                               │
//! │  HotelState::with_hotel_mut ──► Hotel::book ──► store.persist           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Result<StayDto, ApiError>  ──► JSON { code, message } on failure       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod availability;
pub mod booking;
pub mod config;
pub mod revenue;
