//! # Hotel Aggregate
//!
//! One explicit value holding everything a front desk works with:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Hotel                                                                  │
//! │   ├── inventory   (read-only rooms)                                     │
//! │   ├── catalog     (read-only services)                                  │
//! │   ├── discounts   (code → tier table)                                   │
//! │   └── ledger      (every stay; the only mutable part)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers that share a hotel across threads wrap it in a mutex and hold the
//! lock for a whole check-then-act sequence.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::booking::{self, BookingRequest};
use crate::catalog::Catalog;
use crate::dates::StayWindow;
use crate::discount::{DiscountTable, DiscountVariant};
use crate::error::{CoreError, CoreResult};
use crate::inventory::Inventory;
use crate::ledger::{Ledger, RoomStatus};
use crate::modification::{self, StayEdit};
use crate::money::Money;
use crate::pricing::PriceQuote;
use crate::revenue::{self, RevenueSummary};
use crate::types::{Room, Stay};

#[derive(Debug, Clone, Default)]
pub struct Hotel {
    inventory: Inventory,
    catalog: Catalog,
    discounts: DiscountTable,
    ledger: Ledger,
}

impl Hotel {
    pub fn new(inventory: Inventory, catalog: Catalog, discounts: DiscountTable, ledger: Ledger) -> Self {
        Hotel {
            inventory,
            catalog,
            discounts,
            ledger,
        }
    }

    /// The default rooms, services and discount table with an empty ledger.
    pub fn standard() -> Self {
        Hotel::new(
            Inventory::standard(),
            Catalog::standard(),
            DiscountTable::standard(),
            Ledger::new(),
        )
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn discounts(&self) -> &DiscountTable {
        &self.discounts
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// Swaps in a ledger loaded from storage, returning the old one.
    pub fn replace_ledger(&mut self, ledger: Ledger) -> Ledger {
        std::mem::replace(&mut self.ledger, ledger)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Exact, case-sensitive lookup in the discount table.
    pub fn resolve_discount(&self, code: &str) -> DiscountVariant {
        self.discounts.resolve(code)
    }

    pub fn find_available_rooms(&self, window: &StayWindow, min_guests: u32) -> Vec<Arc<Room>> {
        self.ledger.find_available_rooms(&self.inventory, window, min_guests)
    }

    pub fn describe_availability(&self, window: &StayWindow, min_guests: u32) -> Vec<RoomStatus> {
        self.ledger.describe_availability(&self.inventory, window, min_guests)
    }

    pub fn stay(&self, id: &str) -> CoreResult<&Stay> {
        self.ledger
            .get(id)
            .ok_or_else(|| CoreError::StayNotFound(id.to_string()))
    }

    pub fn quote_booking(&self, request: &BookingRequest) -> CoreResult<PriceQuote> {
        booking::quote_booking(self, request)
    }

    /// Checks whether stay `id` may move to new dates.
    pub fn can_apply_edit(&self, id: &str, check_in: &str, check_out: &str) -> CoreResult<StayWindow> {
        modification::can_apply_edit(&self.ledger, self.stay(id)?, check_in, check_out)
    }

    pub fn gross_income(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Money {
        revenue::gross_income(&self.ledger, start, end)
    }

    pub fn net_revenue(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        daily_cost: Money,
    ) -> CoreResult<RevenueSummary> {
        revenue::net_revenue(&self.ledger, start, end, daily_cost)
    }

    // =========================================================================
    // Commands
    // =========================================================================

    pub fn book(&mut self, request: BookingRequest) -> CoreResult<Stay> {
        booking::book(self, request)
    }

    pub fn edit_stay(&mut self, id: &str, edit: StayEdit) -> CoreResult<&Stay> {
        modification::apply_edit(&mut self.ledger, &self.catalog, id, edit)
    }

    /// Removes a stay. Removing an unknown id is not an error.
    pub fn remove_stay(&mut self, id: &str) -> bool {
        self.ledger.remove(id)
    }
}
