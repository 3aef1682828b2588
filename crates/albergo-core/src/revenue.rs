//! # Revenue Aggregator
//!
//! Gross income, operating cost, net revenue and margin over a date window.
//!
//! ## Window Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A stay counts when it lies entirely inside the window:                │
//! │                                                                         │
//! │     check_in  >= start   (skipped when start is None)                  │
//! │     check_out <= end     (skipped when end is None)                    │
//! │                                                                         │
//! │  days   = (end - start) + 1   when both bounds are given               │
//! │         = 1                   otherwise                                │
//! │  cost   = daily cost × days                                            │
//! │  net    = gross - cost                                                 │
//! │  margin = net / gross × 100   (0 when gross is 0)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bounds are calendar dates; strings with a time of day are normalized by
//! [`crate::dates::parse_optional_date`] before they reach this module.

use chrono::NaiveDate;
use serde::Serialize;
use ts_rs::TS;

use crate::dates::days_between;
use crate::error::{CoreError, CoreResult};
use crate::ledger::Ledger;
use crate::money::Money;
use crate::pricing::price;
use crate::types::Stay;
use crate::validation::validate_price_cents;

/// Net revenue figures for a window.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RevenueSummary {
    pub gross: Money,
    pub cost: Money,
    pub net: Money,
    pub days: i64,
    pub margin_percent: f64,
}

/// Checks whether a stay lies inside the optional bounds.
fn within(stay: &Stay, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    start.map_or(true, |s| stay.check_in() >= s) && end.map_or(true, |e| stay.check_out() <= e)
}

/// Stays that lie entirely inside the optional bounds.
pub fn stays_within<'a>(
    ledger: &'a Ledger,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> impl Iterator<Item = &'a Stay> + 'a {
    ledger.iter().filter(move |s| within(s, start, end))
}

/// Sum of what every stay inside the window is charged, discounts included.
pub fn gross_income(ledger: &Ledger, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Money {
    stays_within(ledger, start, end).map(price).sum()
}

/// Gross income minus operating cost for the window.
///
/// ## Errors
/// - `InvalidDateRange` when `end` precedes `start`
/// - `Validation` when `daily_cost` is negative
///
/// ```rust
/// use albergo_core::ledger::Ledger;
/// use albergo_core::money::Money;
/// use albergo_core::revenue::net_revenue;
///
/// let summary = net_revenue(&Ledger::new(), None, None, Money::from_euros(50)).unwrap();
/// assert_eq!(summary.days, 1);
/// assert_eq!(summary.net, Money::from_euros(-50));
/// assert_eq!(summary.margin_percent, 0.0);
/// ```
pub fn net_revenue(
    ledger: &Ledger,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    daily_cost: Money,
) -> CoreResult<RevenueSummary> {
    validate_price_cents("daily cost", daily_cost.cents())?;

    let days = match (start, end) {
        (Some(s), Some(e)) if e < s => {
            return Err(CoreError::invalid_dates("revenue window ends before it starts"));
        }
        (Some(s), Some(e)) => days_between(s, e) + 1,
        _ => 1,
    };

    let gross = gross_income(ledger, start, end);
    let cost = daily_cost.times(days);
    let net = gross - cost;

    Ok(RevenueSummary {
        gross,
        cost,
        net,
        days,
        margin_percent: net.percent_of(gross),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::DiscountTable;
    use crate::inventory::Inventory;
    use crate::types::StayParts;
    use std::sync::Arc;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn ledger() -> Ledger {
        let inventory = Inventory::standard();
        let make = |id: &str, room: &str, from: &str, to: &str, code: &str| {
            Stay::from_parts(StayParts {
                id: id.to_string(),
                first_name: "Guest".to_string(),
                last_name: id.to_string(),
                check_in: d(from),
                check_out: d(to),
                room: Arc::clone(inventory.require(room).unwrap()),
                services: Vec::new(),
                guests: 1,
                discount: DiscountTable::standard().resolve(code),
            })
        };

        Ledger::from_stays(vec![
            // €160
            make("a", "101", "2025-08-01", "2025-08-03", ""),
            // €240 × 0.8 = €192
            make("b", "201", "2025-08-05", "2025-08-07", "VIP2025"),
            // €400, ends outside August
            make("c", "301", "2025-08-30", "2025-09-01", ""),
        ])
    }

    #[test]
    fn test_gross_income_unbounded() {
        assert_eq!(gross_income(&ledger(), None, None), Money::from_euros(752));
    }

    #[test]
    fn test_gross_income_bounds_are_inclusive_of_whole_stays() {
        let ledger = ledger();
        let aug = gross_income(&ledger, Some(d("2025-08-01")), Some(d("2025-08-31")));
        assert_eq!(aug, Money::from_euros(352));

        let from_fifth = gross_income(&ledger, Some(d("2025-08-05")), None);
        assert_eq!(from_fifth, Money::from_euros(592));

        let until_third = gross_income(&ledger, None, Some(d("2025-08-03")));
        assert_eq!(until_third, Money::from_euros(160));
    }

    #[test]
    fn test_net_revenue_with_both_bounds() {
        let summary = net_revenue(
            &ledger(),
            Some(d("2025-08-01")),
            Some(d("2025-08-10")),
            Money::from_euros(20),
        )
        .unwrap();

        assert_eq!(summary.gross, Money::from_euros(352));
        assert_eq!(summary.days, 10);
        assert_eq!(summary.cost, Money::from_euros(200));
        assert_eq!(summary.net, Money::from_euros(152));
        assert!((summary.margin_percent - 152.0 / 352.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_net_revenue_single_bound_counts_one_day() {
        let summary = net_revenue(&ledger(), Some(d("2025-08-05")), None, Money::from_euros(100)).unwrap();
        assert_eq!(summary.days, 1);
        assert_eq!(summary.cost, Money::from_euros(100));
    }

    #[test]
    fn test_zero_gross_yields_zero_margin() {
        let summary = net_revenue(
            &ledger(),
            Some(d("2026-01-01")),
            Some(d("2026-01-31")),
            Money::from_euros(10),
        )
        .unwrap();
        assert_eq!(summary.gross, Money::zero());
        assert_eq!(summary.margin_percent, 0.0);
        assert_eq!(summary.net, Money::from_euros(-310));
    }

    #[test]
    fn test_same_day_window_is_one_day() {
        let summary = net_revenue(
            &Ledger::new(),
            Some(d("2025-08-01")),
            Some(d("2025-08-01")),
            Money::from_euros(10),
        )
        .unwrap();
        assert_eq!(summary.days, 1);
    }

    #[test]
    fn test_inverted_window_and_negative_cost_rejected() {
        assert!(matches!(
            net_revenue(&ledger(), Some(d("2025-08-10")), Some(d("2025-08-01")), Money::zero()),
            Err(CoreError::InvalidDateRange { .. })
        ));
        assert!(matches!(
            net_revenue(&ledger(), None, None, Money::from_cents(-1)),
            Err(CoreError::Validation(_))
        ));
    }
}
