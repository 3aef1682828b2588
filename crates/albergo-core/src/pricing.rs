//! # Pricing Engine
//!
//! Pure functions that turn a stay (or a candidate booking) into a charge.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  nights   = check_out - check_in        (whole days)                    │
//! │  standard = nights × nightly price                                     │
//! │           + nights × Σ service price per day                           │
//! │                                                                         │
//! │  nights <= 0  →  standard = €0.00      (never a negative charge)       │
//! │                                                                         │
//! │  Tiered { rate }:                                                      │
//! │    discount = standard × rate          (half-up to the cent)           │
//! │    final    = standard - discount                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing dispatches on the [`DiscountVariant`] stored on the stay; the code
//! table is never consulted again after booking.
//!
//! ## Example
//! ```rust
//! use albergo_core::dates::StayWindow;
//! use albergo_core::discount::DiscountTable;
//! use albergo_core::inventory::Inventory;
//! use albergo_core::pricing::quote;
//!
//! let inventory = Inventory::standard();
//! let room = inventory.require("101").unwrap();
//! let window = StayWindow::parse("2025-08-01", "2025-08-03").unwrap();
//! let discount = DiscountTable::standard().resolve("VIP2025");
//!
//! let q = quote(room, &[], &window, &discount);
//! assert_eq!(q.original.cents(), 16000);
//! assert_eq!(q.total.cents(), 12800);
//! ```

use std::sync::Arc;

use serde::Serialize;
use ts_rs::TS;

use crate::dates::StayWindow;
use crate::discount::DiscountVariant;
use crate::money::Money;
use crate::types::{Room, Service, Stay};

// =============================================================================
// Result Records
// =============================================================================

/// Before/after figures for a discounted stay.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiscountBreakdown {
    /// Standard price.
    pub original: Money,
    /// Amount taken off.
    pub discount_applied: Money,
    /// What the guest pays.
    pub final_total: Money,
    /// Tier percentage (20.0 = 20%).
    pub percentage: f64,
}

/// One add-on's contribution to a stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ServiceLine {
    pub name: String,
    pub price_per_day: Money,
    pub days: i64,
    pub subtotal: Money,
}

/// Full price breakdown of a stay or a candidate booking.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PriceQuote {
    pub nights: i64,
    pub room_total: Money,
    pub services_total: Money,
    pub service_lines: Vec<ServiceLine>,
    /// Standard price (room + services).
    pub original: Money,
    /// Present only for a tiered stay.
    pub discount: Option<DiscountBreakdown>,
    /// Amount charged.
    pub total: Money,
}

// =============================================================================
// Building Blocks
// =============================================================================

/// Standard price for a room and services over `nights`. Zero when
/// `nights <= 0`.
pub fn standard_total(room: &Room, services: &[Arc<Service>], nights: i64) -> Money {
    if nights <= 0 {
        return Money::zero();
    }
    let daily_services: Money = services.iter().map(|s| s.price_per_day()).sum();
    room.nightly_price().times(nights) + daily_services.times(nights)
}

/// Per-service cost lines for `days` days (empty lines cost zero when
/// `days <= 0`).
pub fn service_lines(services: &[Arc<Service>], days: i64) -> Vec<ServiceLine> {
    let billable = days.max(0);
    services
        .iter()
        .map(|s| ServiceLine {
            name: s.name.clone(),
            price_per_day: s.price_per_day(),
            days: billable,
            subtotal: s.price_per_day().times(billable),
        })
        .collect()
}

/// Applies a variant to a standard price. `None` for a standard stay.
pub fn discount_breakdown(original: Money, discount: &DiscountVariant) -> Option<DiscountBreakdown> {
    match discount {
        DiscountVariant::Standard => None,
        DiscountVariant::Tiered { rate, .. } => {
            let discount_applied = original.portion(*rate);
            Some(DiscountBreakdown {
                original,
                discount_applied,
                final_total: original - discount_applied,
                percentage: rate.percentage(),
            })
        }
    }
}

fn build_quote(
    room: &Room,
    services: &[Arc<Service>],
    nights: i64,
    discount: &DiscountVariant,
) -> PriceQuote {
    let billable = nights.max(0);
    let room_total = room.nightly_price().times(billable);
    let lines = service_lines(services, billable);
    let services_total: Money = lines.iter().map(|l| l.subtotal).sum();
    let original = room_total + services_total;
    let breakdown = discount_breakdown(original, discount);
    let total = breakdown.as_ref().map_or(original, |b| b.final_total);

    PriceQuote {
        nights: billable,
        room_total,
        services_total,
        service_lines: lines,
        original,
        discount: breakdown,
        total,
    }
}

// =============================================================================
// Stay Pricing
// =============================================================================

/// Standard price of a stay, ignoring any discount.
pub fn price_standard(stay: &Stay) -> Money {
    standard_total(stay.room(), stay.services(), stay.nights())
}

/// Discounted figures for a tiered stay; `None` when the stay is standard
/// and must be priced with [`price_standard`].
pub fn price_tiered(stay: &Stay) -> Option<DiscountBreakdown> {
    discount_breakdown(price_standard(stay), stay.discount())
}

/// The amount charged for a stay, honouring its stored variant.
pub fn price(stay: &Stay) -> Money {
    price_tiered(stay).map_or_else(|| price_standard(stay), |b| b.final_total)
}

/// Full breakdown of a booked stay.
pub fn quote_stay(stay: &Stay) -> PriceQuote {
    build_quote(stay.room(), stay.services(), stay.nights(), stay.discount())
}

/// Prices a candidate booking before it is committed.
pub fn quote(
    room: &Room,
    services: &[Arc<Service>],
    window: &StayWindow,
    discount: &DiscountVariant,
) -> PriceQuote {
    build_quote(room, services, window.nights(), discount)
}

// =============================================================================
// Unit Tests
// =============================================================================
