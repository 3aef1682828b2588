//! # Validation Module
//!
//! Field-level input validation for Albergo.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation                                                 │
//! │  └── Immediate feedback (empty fields, date pickers)                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - field rules                                    │
//! │  ├── names non-empty and bounded                                       │
//! │  ├── guest counts positive                                             │
//! │  └── prices non-negative, rates within 0-100%                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Business rules (booking, modification)                       │
//! │  ├── capacity                                                          │
//! │  └── overlap with other stays                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use albergo_core::validation::{validate_guest_count, validate_person_name};
//!
//! validate_person_name("first_name", "Mario").unwrap();
//! assert!(validate_guest_count(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::{MAX_CODE_LENGTH, MAX_NAME_LENGTH, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a guest first or last name and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most MAX_NAME_LENGTH (100) characters
pub fn validate_person_name(field: &str, name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(name.to_string())
}

/// Validates a room number (non-empty, no surrounding whitespace).
pub fn validate_room_number(number: &str) -> ValidationResult<()> {
    if number.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "room number".to_string(),
        });
    }

    if number.trim() != number {
        return Err(ValidationError::InvalidFormat {
            field: "room number".to_string(),
            reason: "must not have leading or trailing spaces".to_string(),
        });
    }

    Ok(())
}

/// Validates a service name in the catalog.
pub fn validate_service_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "service name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "service name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a discount code being registered in a tier table.
///
/// Matching is exact, so a code with surrounding spaces could never be
/// typed back; such codes are rejected at registration.
pub fn validate_discount_code(code: &str) -> ValidationResult<()> {
    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "discount code".to_string(),
        });
    }

    if code.trim() != code {
        return Err(ValidationError::InvalidFormat {
            field: "discount code".to_string(),
            reason: "must not have leading or trailing spaces".to_string(),
        });
    }

    if code.chars().count() > MAX_CODE_LENGTH {
        return Err(ValidationError::TooLong {
            field: "discount code".to_string(),
            max: MAX_CODE_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates the number of guests on a stay (> 0).
pub fn validate_guest_count(guests: u32) -> ValidationResult<()> {
    if guests == 0 {
        return Err(ValidationError::MustBePositive {
            field: "guests".to_string(),
        });
    }

    Ok(())
}

/// Validates a room capacity (> 0).
pub fn validate_capacity(capacity: u32) -> ValidationResult<()> {
    if capacity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "capacity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Must not exceed [`MAX_PRICE_CENTS`]
/// - Zero is allowed (complimentary services)
///
/// ```rust
/// use albergo_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents("price", 8000).is_ok());
/// assert!(validate_price_cents("price", 0).is_ok());
/// assert!(validate_price_cents("price", -100).is_err());
/// assert!(validate_price_cents("price", i64::MAX).is_err());
/// ```
pub fn validate_price_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a discount rate in basis points (0% to 100%).
pub fn validate_discount_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "discount rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
