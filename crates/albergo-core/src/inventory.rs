//! # Room Inventory
//!
//! The fixed set of rooms, supplied once at startup and read-only after.
//! Rooms are handed out as `Arc<Room>` so stays share them instead of
//! copying.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Room;
use crate::validation::{validate_capacity, validate_price_cents, validate_room_number};

/// The hotel's rooms, in a stable order.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    rooms: Vec<Arc<Room>>,
}

impl Inventory {
    /// Builds an inventory, rejecting duplicate numbers, zero capacities and
    /// negative prices.
    pub fn new(rooms: Vec<Room>) -> CoreResult<Self> {
        let mut checked: Vec<Arc<Room>> = Vec::with_capacity(rooms.len());

        for room in rooms {
            validate_room_number(&room.number)?;
            validate_capacity(room.capacity)?;
            validate_price_cents("nightly price", room.nightly_price_cents)?;

            if checked.iter().any(|r| r.number == room.number) {
                return Err(ValidationError::Duplicate {
                    field: "room number".to_string(),
                    value: room.number,
                }
                .into());
            }
            checked.push(Arc::new(room));
        }

        Ok(Inventory { rooms: checked })
    }

    /// The default hotel layout.
    ///
    /// ```text
    /// 101-104  Single  1 guest   €80/night
    /// 201-204  Double  2 guests  €120/night
    /// 301-302  Suite   4 guests  €200/night
    /// ```
    pub fn standard() -> Self {
        let singles = (101..=104).map(|n| Room::new(n.to_string(), "Single", 1, Money::from_euros(80)));
        let doubles = (201..=204).map(|n| Room::new(n.to_string(), "Double", 2, Money::from_euros(120)));
        let suites = (301..=302).map(|n| Room::new(n.to_string(), "Suite", 4, Money::from_euros(200)));

        Inventory {
            rooms: singles.chain(doubles).chain(suites).map(Arc::new).collect(),
        }
    }

    /// All rooms in inventory order.
    pub fn rooms(&self) -> &[Arc<Room>] {
        &self.rooms
    }

    /// Looks up a room by number.
    pub fn get(&self, number: &str) -> Option<&Arc<Room>> {
        self.rooms.iter().find(|r| r.number == number)
    }

    /// Looks up a room by number, failing with `RoomNotFound`.
    pub fn require(&self, number: &str) -> CoreResult<&Arc<Room>> {
        self.get(number)
            .ok_or_else(|| CoreError::RoomNotFound(number.to_string()))
    }

    /// Distinct room types in first-seen order.
    pub fn room_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for room in &self.rooms {
            if !types.contains(&room.room_type.as_str()) {
                types.push(&room.room_type);
            }
        }
        types
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let inventory = Inventory::standard();
        assert_eq!(inventory.len(), 10);
        assert_eq!(inventory.room_types(), vec!["Single", "Double", "Suite"]);

        let suite = inventory.require("302").unwrap();
        assert_eq!(suite.capacity, 4);
        assert_eq!(suite.nightly_price(), Money::from_euros(200));
    }

    #[test]
    fn test_lookup_shares_allocation() {
        let inventory = Inventory::standard();
        let a = inventory.get("101").unwrap();
        let b = inventory.get("101").unwrap();
        assert!(Arc::ptr_eq(a, b));
    }

    #[test]
    fn test_unknown_room() {
        let inventory = Inventory::standard();
        assert_eq!(
            inventory.require("999").unwrap_err(),
            CoreError::RoomNotFound("999".to_string())
        );
    }

    #[test]
    fn test_new_rejects_bad_rooms() {
        let dup = vec![
            Room::new("101", "Single", 1, Money::from_euros(80)),
            Room::new("101", "Double", 2, Money::from_euros(120)),
        ];
        assert!(Inventory::new(dup).is_err());

        let zero_cap = vec![Room::new("101", "Single", 0, Money::from_euros(80))];
        assert!(Inventory::new(zero_cap).is_err());

        let negative = vec![Room::new("101", "Single", 1, Money::from_cents(-1))];
        assert!(Inventory::new(negative).is_err());

        let priceless = vec![Room::new("101", "Single", 1, Money::from_cents(i64::MAX / 2))];
        assert!(Inventory::new(priceless).is_err());

        let ok = vec![Room::new("1", "Dorm", 6, Money::zero())];
        assert_eq!(Inventory::new(ok).unwrap().len(), 1);
    }
}
