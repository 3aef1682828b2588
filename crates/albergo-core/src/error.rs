//! # Error Types
//!
//! Domain-specific error types for albergo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  albergo-core errors (this file)                                       │
//! │  ├── CoreError        - Booking, edit and availability failures        │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  albergo-store errors (separate crate)                                 │
//! │  └── StoreError       - Snapshot read/write failures                   │
//! │                                                                         │
//! │  front-desk errors (in app)                                            │
//! │  └── ApiError         - What the presentation layer sees (serialized)  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Presentation           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! - An unknown discount code: it resolves to standard pricing.
//! - Removing a stay that does not exist: `Ledger::remove` returns `false`.
//! - A revenue window with no income: the margin is reported as zero.

use chrono::NaiveDate;
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised by booking, editing and availability
/// queries. Every variant is recoverable: the caller reports it and the
/// ledger is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A date could not be parsed, or the interval has no nights in it.
    ///
    /// ## When This Occurs
    /// - `"2025-13-01"` or an empty string as check-in
    /// - check-out on or before check-in
    /// - a revenue window whose end precedes its start
    #[error("Invalid date range: {reason}")]
    InvalidDateRange { reason: String },

    /// More guests than the room holds.
    #[error("Room {room} holds at most {capacity} guests, requested {requested}")]
    CapacityExceeded {
        room: String,
        capacity: u32,
        requested: u32,
    },

    /// Another stay already occupies the room on overlapping nights.
    ///
    /// ## User Workflow
    /// ```text
    /// Edit stay dates: 2025-08-02 → 2025-08-04, room 101
    ///      │
    ///      ▼
    /// conflicts_for(room 101, excluding this stay)
    ///      │
    ///      ▼
    /// RoomConflict { guest: "Mario Rossi", 2025-08-01 → 2025-08-03 }
    ///      │
    ///      ▼
    /// UI shows: "Room 101 is occupied by Mario Rossi from ..."
    /// ```
    #[error("Room {room} is occupied by {guest} from {check_in} to {check_out}")]
    RoomConflict {
        room: String,
        guest: String,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    /// Room number is not part of the inventory.
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    /// Service name is not part of the catalog.
    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    /// No stay with this id in the ledger.
    #[error("Stay not found: {0}")]
    StayNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates an InvalidDateRange error.
    pub fn invalid_dates(reason: impl Into<String>) -> Self {
        CoreError::InvalidDateRange {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur before any business rule runs: empty guest names, zero
/// guests, negative prices, duplicated room numbers in an inventory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., a malformed discount tier).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two rooms numbered 101).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
