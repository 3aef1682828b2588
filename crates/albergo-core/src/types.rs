//! # Domain Types
//!
//! Core domain types used throughout Albergo.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │      Room       │   │     Service     │   │        Stay         │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  number (id)    │   │  name (id)      │   │  id (UUID)          │   │
//! │  │  room_type      │   │  price_per_day  │   │  guest names        │   │
//! │  │  capacity       │   └────────▲────────┘   │  check_in/out       │   │
//! │  │  nightly_price  │            │ Arc        │  room ──────────────┼─┐ │
//! │  └────────▲────────┘            └────────────┼─ services           │ │ │
//! │           │ Arc                              │  guests             │ │ │
//! │           └──────────────────────────────────┼─ discount variant   │ │ │
//! │                                              └─────────────────────┘ │ │
//! │           ◄──────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Shared, Not Copied
//! A stay holds an `Arc<Room>` handed out by the inventory, not a snapshot.
//! Two stays on room 101 point at the same allocation, and room identity is
//! the room number.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::dates::{days_between, StayWindow};
use crate::discount::DiscountVariant;
use crate::money::Money;

// =============================================================================
// Room
// =============================================================================

/// A bookable room. Immutable once the inventory is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Room {
    /// Room number - unique within the inventory.
    pub number: String,

    /// Category label ("Single", "Double", "Suite").
    pub room_type: String,

    /// Maximum number of guests.
    pub capacity: u32,

    /// Price per night in cents.
    pub nightly_price_cents: i64,
}

impl Room {
    pub fn new(
        number: impl Into<String>,
        room_type: impl Into<String>,
        capacity: u32,
        nightly_price: Money,
    ) -> Self {
        Room {
            number: number.into(),
            room_type: room_type.into(),
            capacity,
            nightly_price_cents: nightly_price.cents(),
        }
    }

    /// Returns the nightly price as Money.
    #[inline]
    pub fn nightly_price(&self) -> Money {
        Money::from_cents(self.nightly_price_cents)
    }

    /// Checks whether the room can host `guests` people.
    #[inline]
    pub fn fits(&self, guests: u32) -> bool {
        self.capacity >= guests
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Room {} ({})", self.number, self.room_type)
    }
}

// =============================================================================
// Service
// =============================================================================

/// An optional add-on charged per day of the stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Service {
    /// Display name - unique within the catalog.
    pub name: String,

    /// Price per day in cents.
    pub price_per_day_cents: i64,
}

impl Service {
    pub fn new(name: impl Into<String>, price_per_day: Money) -> Self {
        Service {
            name: name.into(),
            price_per_day_cents: price_per_day.cents(),
        }
    }

    /// Returns the daily price as Money.
    #[inline]
    pub fn price_per_day(&self) -> Money {
        Money::from_cents(self.price_per_day_cents)
    }
}

// =============================================================================
// Stay
// =============================================================================

/// Everything needed to rebuild a stay, e.g. from a persisted snapshot.
///
/// No validation happens here: a snapshot is trusted as written. Stays built
/// through booking and editing are always validated first.
#[derive(Debug, Clone)]
pub struct StayParts {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room: Arc<Room>,
    pub services: Vec<Arc<Service>>,
    pub guests: u32,
    pub discount: DiscountVariant,
}

/// A booked stay in one room.
///
/// Fields are private: the only ways to change a stay after creation are
/// the edit operations in [`crate::modification`], which validate first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stay {
    id: String,
    first_name: String,
    last_name: String,
    check_in: NaiveDate,
    check_out: NaiveDate,
    room: Arc<Room>,
    services: Vec<Arc<Service>>,
    guests: u32,
    discount: DiscountVariant,
}

impl Stay {
    /// Rebuilds a stay from its parts.
    pub fn from_parts(parts: StayParts) -> Self {
        Stay {
            id: parts.id,
            first_name: parts.first_name,
            last_name: parts.last_name,
            check_in: parts.check_in,
            check_out: parts.check_out,
            room: parts.room,
            services: parts.services,
            guests: parts.guests,
            discount: parts.discount,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[inline]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// "First Last", as used in conflict messages.
    pub fn guest_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[inline]
    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    #[inline]
    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Nights between check-in and check-out. Zero or negative only for a
    /// degenerate stay restored from storage.
    #[inline]
    pub fn nights(&self) -> i64 {
        days_between(self.check_in, self.check_out)
    }

    /// The stay's interval, or `None` for a degenerate stay.
    pub fn window(&self) -> Option<StayWindow> {
        StayWindow::new(self.check_in, self.check_out).ok()
    }

    #[inline]
    pub fn room(&self) -> &Arc<Room> {
        &self.room
    }

    #[inline]
    pub fn services(&self) -> &[Arc<Service>] {
        &self.services
    }

    #[inline]
    pub fn guests(&self) -> u32 {
        self.guests
    }

    #[inline]
    pub fn discount(&self) -> &DiscountVariant {
        &self.discount
    }

    /// Checks whether this stay is in the given room.
    #[inline]
    pub fn is_in_room(&self, number: &str) -> bool {
        self.room.number == number
    }

    /// Checks whether this stay occupies any night of `window`. A degenerate
    /// stay occupies no nights and never overlaps.
    #[inline]
    pub fn overlaps(&self, window: &StayWindow) -> bool {
        self.check_in < self.check_out && window.overlaps(self.check_in, self.check_out)
    }

    /// One-line description, with the discount tier when there is one.
    ///
    /// ```text
    /// Stay of Mario Rossi in room 101
    /// Stay of Mario Rossi in room 101 [discount VIP2025 -20%]
    /// ```
    pub fn describe(&self) -> String {
        let base = format!("Stay of {} in room {}", self.guest_name(), self.room.number);
        match &self.discount {
            DiscountVariant::Standard => base,
            DiscountVariant::Tiered { code, rate } => {
                format!("{} [discount {} -{}%]", base, code, rate.percentage())
            }
        }
    }

    // Mutators used by the modification guard once an edit has been accepted.

    pub(crate) fn set_names(&mut self, first_name: String, last_name: String) {
        self.first_name = first_name;
        self.last_name = last_name;
    }

    pub(crate) fn set_window(&mut self, window: StayWindow) {
        self.check_in = window.check_in();
        self.check_out = window.check_out();
    }

    pub(crate) fn set_guests(&mut self, guests: u32) {
        self.guests = guests;
    }

    pub(crate) fn set_services(&mut self, services: Vec<Arc<Service>>) {
        self.services = services;
    }
}

impl fmt::Display for Stay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Room {}", self.guest_name(), self.room.number)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::DiscountRate;

    fn test_stay(discount: DiscountVariant) -> Stay {
        Stay::from_parts(StayParts {
            id: "stay-1".to_string(),
            first_name: "Mario".to_string(),
            last_name: "Rossi".to_string(),
            check_in: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 8, 3).unwrap(),
            room: Arc::new(Room::new("101", "Single", 1, Money::from_euros(80))),
            services: Vec::new(),
            guests: 1,
            discount,
        })
    }

    #[test]
    fn test_room_price_and_fit() {
        let room = Room::new("201", "Double", 2, Money::from_euros(120));
        assert_eq!(room.nightly_price().cents(), 12000);
        assert!(room.fits(2));
        assert!(!room.fits(3));
        assert_eq!(room.to_string(), "Room 201 (Double)");
    }

    #[test]
    fn test_stay_accessors() {
        let stay = test_stay(DiscountVariant::Standard);
        assert_eq!(stay.nights(), 2);
        assert_eq!(stay.guest_name(), "Mario Rossi");
        assert!(stay.is_in_room("101"));
        assert!(stay.window().is_some());
        assert_eq!(stay.to_string(), "Mario Rossi - Room 101");
    }

    #[test]
    fn test_describe_mentions_tier() {
        assert_eq!(
            test_stay(DiscountVariant::Standard).describe(),
            "Stay of Mario Rossi in room 101"
        );

        let tiered = test_stay(DiscountVariant::Tiered {
            code: "VIP2025".to_string(),
            rate: DiscountRate::from_percentage(20.0),
        });
        assert_eq!(
            tiered.describe(),
            "Stay of Mario Rossi in room 101 [discount VIP2025 -20%]"
        );
    }

    #[test]
    fn test_degenerate_stay_has_no_window() {
        let mut parts = StayParts {
            id: "x".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            check_in: NaiveDate::from_ymd_opt(2025, 8, 3).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 8, 3).unwrap(),
            room: Arc::new(Room::new("101", "Single", 1, Money::from_euros(80))),
            services: Vec::new(),
            guests: 1,
            discount: DiscountVariant::Standard,
        };
        assert!(Stay::from_parts(parts.clone()).window().is_none());

        parts.check_out = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        assert_eq!(Stay::from_parts(parts).nights(), -2);
    }
}
