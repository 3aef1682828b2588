//! # Calendar Dates
//!
//! The one internal date representation: [`chrono::NaiveDate`], a calendar
//! day with no time of day and no timezone.
//!
//! ## Normalization
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Boundary input                     Internal value                      │
//! │  ─────────────────────────────      ──────────────                      │
//! │  "2025-08-21"                 ──►   2025-08-21                          │
//! │  "2025-08-21T15:30:00"        ──►   2025-08-21   (time discarded)       │
//! │  "2025-08-21 15:30:00"        ──►   2025-08-21   (time discarded)       │
//! │  NaiveDateTime 2025-08-21 09:00 ─►  2025-08-21   (via .date())          │
//! │  "21/08/2025", ""             ──►   InvalidDateRange                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing past this module ever compares a time of day, so a stay that
//! checks out on the 3rd and one that checks in on the 3rd never collide.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

/// Wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a boundary date string, discarding any time-of-day suffix.
///
/// ```rust
/// use albergo_core::dates::parse_calendar_date;
///
/// let date = parse_calendar_date("2025-08-21T15:30:00").unwrap();
/// assert_eq!(date.to_string(), "2025-08-21");
/// assert!(parse_calendar_date("not a date").is_err());
/// ```
pub fn parse_calendar_date(input: &str) -> CoreResult<NaiveDate> {
    let trimmed = input.trim();
    let date_part = trimmed
        .split(|c: char| c == 'T' || c.is_whitespace())
        .next()
        .unwrap_or_default();

    NaiveDate::parse_from_str(date_part, DATE_FORMAT)
        .map_err(|_| CoreError::invalid_dates(format!("'{}' is not a YYYY-MM-DD date", trimmed)))
}

/// Parses an optional bound. Empty or whitespace-only input means "no bound".
pub fn parse_optional_date(input: Option<&str>) -> CoreResult<Option<NaiveDate>> {
    match input.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_calendar_date(value).map(Some),
    }
}

/// Whole days from `start` to `end` (negative when `end` precedes `start`).
#[inline]
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

// =============================================================================
// Stay Window
// =============================================================================

/// A validated half-open interval `[check_in, check_out)` of nights.
///
/// Construction guarantees `check_out > check_in`, so a window always has at
/// least one night. Deserialization goes through [`StayWindow::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", try_from = "RawWindow")]
#[ts(export)]
pub struct StayWindow {
    #[ts(as = "String")]
    check_in: NaiveDate,
    #[ts(as = "String")]
    check_out: NaiveDate,
}

impl StayWindow {
    /// Builds a window from two calendar dates.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> CoreResult<Self> {
        if check_out <= check_in {
            return Err(CoreError::invalid_dates("check-out must be after check-in"));
        }
        Ok(StayWindow {
            check_in,
            check_out,
        })
    }

    /// Parses and validates a window from raw boundary strings.
    ///
    /// ```rust
    /// use albergo_core::dates::StayWindow;
    ///
    /// let window = StayWindow::parse("2025-08-01", "2025-08-03").unwrap();
    /// assert_eq!(window.nights(), 2);
    ///
    /// assert!(StayWindow::parse("2025-08-03", "2025-08-03").is_err());
    /// assert!(StayWindow::parse("2025-08-01", "soon").is_err());
    /// ```
    pub fn parse(check_in: &str, check_out: &str) -> CoreResult<Self> {
        let check_in = parse_calendar_date(check_in)?;
        let check_out = parse_calendar_date(check_out)?;
        StayWindow::new(check_in, check_out)
    }

    #[inline]
    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    #[inline]
    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights (always >= 1).
    #[inline]
    pub fn nights(&self) -> i64 {
        days_between(self.check_in, self.check_out)
    }

    /// Half-open overlap against a raw pair of dates: `a < d && c < b`.
    #[inline]
    pub fn overlaps(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        self.check_in < check_out && check_in < self.check_out
    }
}

/// Unchecked wire form of a [`StayWindow`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWindow {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl TryFrom<RawWindow> for StayWindow {
    type Error = CoreError;

    fn try_from(raw: RawWindow) -> CoreResult<Self> {
        StayWindow::new(raw.check_in, raw.check_out)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
