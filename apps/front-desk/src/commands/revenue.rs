//! # Revenue Commands
//!
//! Income reports over an optional date window.
//!
//! Bounds accept `YYYY-MM-DD` or a date-time (the time is ignored); an empty
//! bound means "open on that side".

use albergo_core::dates::parse_optional_date;
use albergo_core::{Money, RevenueSummary};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiResult;
use crate::state::{ConfigState, HotelState};

/// Net revenue with display strings in the configured currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReport {
    #[serde(flatten)]
    pub summary: RevenueSummary,
    pub gross_display: String,
    pub cost_display: String,
    pub net_display: String,
}

impl RevenueReport {
    fn new(summary: RevenueSummary, config: &ConfigState) -> Self {
        RevenueReport {
            gross_display: config.format_currency(summary.gross.cents()),
            cost_display: config.format_currency(summary.cost.cents()),
            net_display: config.format_currency(summary.net.cents()),
            summary,
        }
    }
}

/// Net revenue for the window.
///
/// `daily_cost_cents` overrides the configured daily operating cost.
///
/// ## Errors
/// - `INVALID_DATES`: unparseable bound, or end before start
/// - `VALIDATION_ERROR`: negative daily cost
pub fn net_revenue(
    hotel: &HotelState,
    config: &ConfigState,
    start: Option<&str>,
    end: Option<&str>,
    daily_cost_cents: Option<i64>,
) -> ApiResult<RevenueReport> {
    debug!(?start, ?end, ?daily_cost_cents, "net_revenue command");

    let start = parse_optional_date(start)?;
    let end = parse_optional_date(end)?;
    let daily_cost = daily_cost_cents.map(Money::from_cents).unwrap_or_else(|| config.daily_cost());

    let summary = hotel.with_hotel(|h| h.net_revenue(start, end, daily_cost))?;
    Ok(RevenueReport::new(summary, config))
}

/// Sum of the prices of stays inside the window.
pub fn gross_income(hotel: &HotelState, start: Option<&str>, end: Option<&str>) -> ApiResult<Money> {
    debug!(?start, ?end, "gross_income command");

    let start = parse_optional_date(start)?;
    let end = parse_optional_date(end)?;
    Ok(hotel.with_hotel(|h| h.gross_income(start, end)))
}
