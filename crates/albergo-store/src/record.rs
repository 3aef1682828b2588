//! # Snapshot Records
//!
//! The on-disk layout of a ledger, and conversions to and from core types.
//!
//! ## Snapshot Layout
//! ```text
//! {
//!   "version": 1,
//!   "stays": [
//!     {
//!       "id": "6f1c…",
//!       "firstName": "Mario", "lastName": "Rossi",
//!       "checkIn": "2025-08-01", "checkOut": "2025-08-03",
//!       "room": { "number": "101", "roomType": "Single",
//!                 "capacity": 1, "nightlyPriceCents": 8000 },
//!       "services": [ { "name": "WiFi", "pricePerDayCents": 500 } ],
//!       "guests": 1,
//!       "discount": { "kind": "tiered", "code": "VIP2025", "rate": 2000 }
//!     }
//!   ]
//! }
//! ```
//!
//! ## Reattaching on Load
//! Each stay carries a snapshot of its room and services. On load a stay is
//! reattached to the inventory or catalog entry when that entry still matches
//! the snapshot exactly. A room or service that is gone, or whose price or
//! attributes changed since, is rebuilt from the snapshot, so past stays keep
//! the prices they were booked at.
//! The discount variant is restored as stored and never re-resolved.

use std::sync::Arc;

use albergo_core::catalog::Catalog;
use albergo_core::inventory::Inventory;
use albergo_core::{DiscountVariant, Ledger, Room, Service, Stay, StayParts};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{StoreError, StoreResult};

/// Current snapshot format.
pub const SNAPSHOT_VERSION: u32 = 1;

// =============================================================================
// Records
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRecord {
    pub number: String,
    pub room_type: String,
    pub capacity: u32,
    pub nightly_price_cents: i64,
}

impl From<&Room> for RoomRecord {
    fn from(room: &Room) -> Self {
        RoomRecord {
            number: room.number.clone(),
            room_type: room.room_type.clone(),
            capacity: room.capacity,
            nightly_price_cents: room.nightly_price_cents,
        }
    }
}

impl From<RoomRecord> for Room {
    fn from(record: RoomRecord) -> Self {
        Room {
            number: record.number,
            room_type: record.room_type,
            capacity: record.capacity,
            nightly_price_cents: record.nightly_price_cents,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub name: String,
    pub price_per_day_cents: i64,
}

impl From<&Service> for ServiceRecord {
    fn from(service: &Service) -> Self {
        ServiceRecord {
            name: service.name.clone(),
            price_per_day_cents: service.price_per_day_cents,
        }
    }
}

impl From<ServiceRecord> for Service {
    fn from(record: ServiceRecord) -> Self {
        Service {
            name: record.name,
            price_per_day_cents: record.price_per_day_cents,
        }
    }
}

fn default_guests() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room: RoomRecord,
    #[serde(default)]
    pub services: Vec<ServiceRecord>,
    #[serde(default = "default_guests")]
    pub guests: u32,
    #[serde(default)]
    pub discount: DiscountVariant,
}

impl From<&Stay> for StayRecord {
    fn from(stay: &Stay) -> Self {
        StayRecord {
            id: stay.id().to_string(),
            first_name: stay.first_name().to_string(),
            last_name: stay.last_name().to_string(),
            check_in: stay.check_in(),
            check_out: stay.check_out(),
            room: RoomRecord::from(stay.room().as_ref()),
            services: stay
                .services()
                .iter()
                .map(|s| ServiceRecord::from(s.as_ref()))
                .collect(),
            guests: stay.guests(),
            discount: stay.discount().clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub version: u32,
    pub stays: Vec<StayRecord>,
}

// =============================================================================
// Conversions
// =============================================================================

impl LedgerRecord {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        LedgerRecord {
            version: SNAPSHOT_VERSION,
            stays: ledger.iter().map(StayRecord::from).collect(),
        }
    }

    /// Rebuilds a ledger against the current inventory and catalog.
    pub fn into_ledger(self, inventory: &Inventory, catalog: &Catalog) -> StoreResult<Ledger> {
        if self.version > SNAPSHOT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let mut rebuilder = Rebuilder::new(inventory, catalog);
        let stays = self
            .stays
            .into_iter()
            .map(|record| rebuilder.stay(record))
            .collect();

        Ok(Ledger::from_stays(stays))
    }
}

/// Resolves snapshot entries to shared rooms and services.
///
/// An inventory or catalog entry is reused only when it still matches the
/// snapshot field for field. Anything else is rebuilt from the snapshot and
/// cached, so two stays with the same retired room still share one `Arc`.
struct Rebuilder<'a> {
    inventory: &'a Inventory,
    catalog: &'a Catalog,
    rebuilt_rooms: Vec<Arc<Room>>,
    rebuilt_services: Vec<Arc<Service>>,
}

impl<'a> Rebuilder<'a> {
    fn new(inventory: &'a Inventory, catalog: &'a Catalog) -> Self {
        Rebuilder {
            inventory,
            catalog,
            rebuilt_rooms: Vec::new(),
            rebuilt_services: Vec::new(),
        }
    }

    fn room(&mut self, record: RoomRecord) -> Arc<Room> {
        let snapshot = Room::from(record);

        if let Some(room) = self.inventory.get(&snapshot.number).filter(|r| ***r == snapshot) {
            return Arc::clone(room);
        }
        if let Some(room) = self.rebuilt_rooms.iter().find(|r| ***r == snapshot) {
            return Arc::clone(room);
        }

        warn!(room = %snapshot.number, "Room missing or changed in inventory, rebuilt from snapshot");
        let room = Arc::new(snapshot);
        self.rebuilt_rooms.push(Arc::clone(&room));
        room
    }

    fn service(&mut self, record: ServiceRecord) -> Arc<Service> {
        let snapshot = Service::from(record);

        if let Some(service) = self.catalog.get(&snapshot.name).filter(|s| ***s == snapshot) {
            return Arc::clone(service);
        }
        if let Some(service) = self.rebuilt_services.iter().find(|s| ***s == snapshot) {
            return Arc::clone(service);
        }

        warn!(service = %snapshot.name, "Service missing or repriced in catalog, rebuilt from snapshot");
        let service = Arc::new(snapshot);
        self.rebuilt_services.push(Arc::clone(&service));
        service
    }

    fn stay(&mut self, record: StayRecord) -> Stay {
        let room = self.room(record.room);
        let services = record
            .services
            .into_iter()
            .map(|s| self.service(s))
            .collect();

        Stay::from_parts(StayParts {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            check_in: record.check_in,
            check_out: record.check_out,
            room,
            services,
            guests: record.guests,
            discount: record.discount,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
