//! # Stay Ledger
//!
//! The mutable set of booked stays and the overlap queries built on it.
//!
//! ## The Invariant
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  For any two distinct stays on the same room:                          │
//! │                                                                         │
//! │      [a, b)  and  [c, d)   must NOT satisfy   a < d  &&  c < b         │
//! │                                                                         │
//! │  Room 101   ├── Rossi ──┤                                              │
//! │             08-01     08-03                                             │
//! │                         ├── Bianchi ──┤        ✅ back-to-back is fine │
//! │                       08-03         08-05                               │
//! │                    ├── Verdi ──┤                ❌ 08-02 < 08-03        │
//! │                  08-02       08-04                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validation vs. Mutation
//! The ledger answers questions ([`Ledger::conflicts_for`],
//! [`Ledger::find_available_rooms`]) and performs raw mutations
//! ([`Ledger::insert`], [`Ledger::remove`]). It does not re-check on insert:
//! booking and the modification guard run the same conflict query before
//! they mutate, so the check and the write share one code path.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use ts_rs::TS;

use crate::dates::StayWindow;
use crate::inventory::Inventory;
use crate::types::{Room, Stay};

// =============================================================================
// Availability Records
// =============================================================================

/// Why a room is or is not bookable for a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum AvailabilityReason {
    Available,
    /// Too small for the party.
    InsufficientCapacity { required: u32, capacity: u32 },
    /// Booked on overlapping nights; free again from `free_from`.
    Occupied {
        #[ts(as = "String")]
        free_from: NaiveDate,
    },
}

impl fmt::Display for AvailabilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvailabilityReason::Available => write!(f, "available"),
            AvailabilityReason::InsufficientCapacity { required, capacity } => write!(
                f,
                "insufficient capacity (max {} guests, {} requested)",
                capacity, required
            ),
            AvailabilityReason::Occupied { free_from } => {
                write!(f, "occupied, free from {}", free_from)
            }
        }
    }
}

/// One row of the detailed availability view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RoomStatus {
    pub room: Arc<Room>,
    pub available: bool,
    pub reason: AvailabilityReason,
    /// Rooms of the same type bookable for the same window and party size.
    pub same_type_available: usize,
}

// =============================================================================
// Ledger
// =============================================================================

/// All stays, keyed by id, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    stays: Vec<Stay>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger { stays: Vec::new() }
    }

    /// Wraps stays supplied by a persistence collaborator. Trusted as-is;
    /// see [`Ledger::overlapping_pairs`] for an integrity check.
    pub fn from_stays(stays: Vec<Stay>) -> Self {
        Ledger { stays }
    }

    /// Appends a stay. The caller has already ruled out conflicts.
    pub fn insert(&mut self, stay: Stay) {
        self.stays.push(stay);
    }

    /// Removes a stay by id. Returns `false` when no such stay exists.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.stays.iter().position(|s| s.id() == id) {
            Some(index) => {
                self.stays.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Stay> {
        self.stays.iter().find(|s| s.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Stay> {
        self.stays.iter_mut().find(|s| s.id() == id)
    }

    pub fn stays(&self) -> &[Stay] {
        &self.stays
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stay> {
        self.stays.iter()
    }

    pub fn len(&self) -> usize {
        self.stays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stays.is_empty()
    }

    /// Stays booked in the given room.
    pub fn stays_for_room<'a>(&'a self, number: &'a str) -> impl Iterator<Item = &'a Stay> + 'a {
        self.stays.iter().filter(move |s| s.is_in_room(number))
    }

    // =========================================================================
    // Overlap Queries
    // =========================================================================

    /// Every stay on `room` that occupies a night of `window`, skipping the
    /// stay with id `excluding` (the one being edited).
    pub fn conflicts_for(
        &self,
        room: &Room,
        window: &StayWindow,
        excluding: Option<&str>,
    ) -> Vec<&Stay> {
        self.stays
            .iter()
            .filter(|s| s.is_in_room(&room.number))
            .filter(|s| excluding.map_or(true, |id| s.id() != id))
            .filter(|s| s.overlaps(window))
            .collect()
    }

    /// Checks whether `room` has no stay overlapping `window`.
    pub fn is_room_free(&self, room: &Room, window: &StayWindow) -> bool {
        self.conflicts_for(room, window, None).is_empty()
    }

    /// Rooms that can take `min_guests` people for the whole window, in
    /// inventory order.
    pub fn find_available_rooms(
        &self,
        inventory: &Inventory,
        window: &StayWindow,
        min_guests: u32,
    ) -> Vec<Arc<Room>> {
        inventory
            .rooms()
            .iter()
            .filter(|room| room.fits(min_guests))
            .filter(|room| self.is_room_free(room, window))
            .cloned()
            .collect()
    }

    /// Number of available rooms per room type.
    pub fn available_counts_by_type(
        &self,
        inventory: &Inventory,
        window: &StayWindow,
        min_guests: u32,
    ) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for room in self.find_available_rooms(inventory, window, min_guests) {
            *counts.entry(room.room_type.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// A status row for every room in the inventory, bookable or not.
    ///
    /// ## User Workflow
    /// ```text
    /// Check availability 2025-08-02 → 2025-08-04, 2 guests
    ///      │
    ///      ▼
    /// 101 Single  ✗ insufficient capacity (max 1 guests, 2 requested)
    /// 201 Double  ✗ occupied, free from 2025-08-05
    /// 202 Double  ✓ available (3 Double rooms free)
    /// ...
    /// ```
    pub fn describe_availability(
        &self,
        inventory: &Inventory,
        window: &StayWindow,
        min_guests: u32,
    ) -> Vec<RoomStatus> {
        let counts = self.available_counts_by_type(inventory, window, min_guests);

        inventory
            .rooms()
            .iter()
            .map(|room| {
                if !room.fits(min_guests) {
                    return RoomStatus {
                        room: Arc::clone(room),
                        available: false,
                        reason: AvailabilityReason::InsufficientCapacity {
                            required: min_guests,
                            capacity: room.capacity,
                        },
                        same_type_available: 0,
                    };
                }

                let same_type_available = counts.get(&room.room_type).copied().unwrap_or(0);
                let latest_checkout = self
                    .conflicts_for(room, window, None)
                    .iter()
                    .map(|s| s.check_out())
                    .max();

                match latest_checkout {
                    None => RoomStatus {
                        room: Arc::clone(room),
                        available: true,
                        reason: AvailabilityReason::Available,
                        same_type_available,
                    },
                    Some(free_from) => RoomStatus {
                        room: Arc::clone(room),
                        available: false,
                        reason: AvailabilityReason::Occupied { free_from },
                        same_type_available,
                    },
                }
            })
            .collect()
    }

    /// Pairs of stays that break the no-overlap invariant. Always empty for
    /// a ledger built only through booking and accepted edits.
    pub fn overlapping_pairs(&self) -> Vec<(&Stay, &Stay)> {
        let mut pairs = Vec::new();
        for (i, a) in self.stays.iter().enumerate() {
            let Some(window) = a.window() else { continue };
            for b in &self.stays[i + 1..] {
                if a.room().number == b.room().number && b.overlaps(&window) {
                    pairs.push((a, b));
                }
            }
        }
        pairs
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
