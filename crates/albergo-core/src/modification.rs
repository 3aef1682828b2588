//! # Modification Guard
//!
//! Decides whether an existing stay may move to new dates, and applies
//! accepted edits.
//!
//! ## Edit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  apply_edit(ledger, catalog, id, edit)                                  │
//! │                                                                         │
//! │   1. find stay                      → StayNotFound                      │
//! │   2. names non-empty                → Validation                        │
//! │   3. dates (when changed)           → can_apply_edit                    │
//! │        parse                        → InvalidDateRange("invalid dates") │
//! │        check_out > check_in         → InvalidDateRange(...)             │
//! │        no other stay on the room    → RoomConflict { guest, dates }     │
//! │   4. 1 <= guests <= capacity        → Validation / CapacityExceeded     │
//! │   5. services exist                 → ServiceNotFound                   │
//! │   ─────────────────────────────────────────────────────────────────     │
//! │   6. write every field at once      (nothing written on any error)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The stay keeps its room and its discount variant; neither is editable.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::dates::{parse_calendar_date, StayWindow, DATE_FORMAT};
use crate::error::{CoreError, CoreResult};
use crate::ledger::Ledger;
use crate::types::{Service, Stay};
use crate::validation::{validate_guest_count, validate_person_name};

/// Field changes for an existing stay. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StayEdit {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// New check-in as typed (`YYYY-MM-DD`, time of day ignored).
    pub check_in: Option<String>,
    /// New check-out as typed.
    pub check_out: Option<String>,
    pub guests: Option<u32>,
    /// Replaces the whole service list when present.
    pub services: Option<Vec<String>>,
}

impl StayEdit {
    /// An edit that only moves the stay to new dates.
    pub fn dates(check_in: impl Into<String>, check_out: impl Into<String>) -> Self {
        StayEdit {
            check_in: Some(check_in.into()),
            check_out: Some(check_out.into()),
            ..Default::default()
        }
    }

    /// Checks whether the edit touches the stay's dates.
    pub fn changes_dates(&self) -> bool {
        self.check_in.is_some() || self.check_out.is_some()
    }
}

/// Checks whether `stay` may move to the given dates in its current room.
///
/// The stay itself is ignored when looking for conflicts, so shortening or
/// shifting a stay within its own nights is always allowed.
///
/// ## Errors
/// - `InvalidDateRange("invalid dates")` when either date does not parse
/// - `InvalidDateRange("check-out must be after check-in")`
/// - `RoomConflict` naming the first blocking stay
///
/// ```rust
/// use albergo_core::booking::BookingRequest;
/// use albergo_core::hotel::Hotel;
/// use albergo_core::modification::can_apply_edit;
///
/// let mut hotel = Hotel::standard();
/// let first = hotel.book(BookingRequest::new("Mario", "Rossi", "101", "2025-08-01", "2025-08-03")).unwrap();
/// let second = hotel.book(BookingRequest::new("Anna", "Bianchi", "101", "2025-08-05", "2025-08-07")).unwrap();
///
/// let err = can_apply_edit(hotel.ledger(), &second, "2025-08-02", "2025-08-06").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Room 101 is occupied by Mario Rossi from 2025-08-01 to 2025-08-03"
/// );
/// assert!(can_apply_edit(hotel.ledger(), &first, "2025-08-02", "2025-08-04").is_ok());
/// ```
pub fn can_apply_edit(
    ledger: &Ledger,
    stay: &Stay,
    new_check_in: &str,
    new_check_out: &str,
) -> CoreResult<StayWindow> {
    let (check_in, check_out) = match (
        parse_calendar_date(new_check_in),
        parse_calendar_date(new_check_out),
    ) {
        (Ok(check_in), Ok(check_out)) => (check_in, check_out),
        _ => return Err(CoreError::invalid_dates("invalid dates")),
    };

    let window = StayWindow::new(check_in, check_out)?;

    let conflicts = ledger.conflicts_for(stay.room(), &window, Some(stay.id()));
    if let Some(blocking) = conflicts.first() {
        return Err(CoreError::RoomConflict {
            room: stay.room().number.clone(),
            guest: blocking.guest_name(),
            check_in: blocking.check_in(),
            check_out: blocking.check_out(),
        });
    }

    Ok(window)
}

/// Fully validated field values, ready to be written.
struct AcceptedEdit {
    names: Option<(String, String)>,
    window: Option<StayWindow>,
    guests: Option<u32>,
    services: Option<Vec<Arc<Service>>>,
}

fn validate_edit(ledger: &Ledger, catalog: &Catalog, stay: &Stay, edit: &StayEdit) -> CoreResult<AcceptedEdit> {
    let names = if edit.first_name.is_some() || edit.last_name.is_some() {
        let first = validate_person_name(
            "first name",
            edit.first_name.as_deref().unwrap_or(stay.first_name()),
        )?;
        let last = validate_person_name(
            "last name",
            edit.last_name.as_deref().unwrap_or(stay.last_name()),
        )?;
        Some((first, last))
    } else {
        None
    };

    let window = if edit.changes_dates() {
        let current_in = stay.check_in().format(DATE_FORMAT).to_string();
        let current_out = stay.check_out().format(DATE_FORMAT).to_string();
        Some(can_apply_edit(
            ledger,
            stay,
            edit.check_in.as_deref().unwrap_or(&current_in),
            edit.check_out.as_deref().unwrap_or(&current_out),
        )?)
    } else {
        None
    };

    if let Some(guests) = edit.guests {
        validate_guest_count(guests)?;
        let room = stay.room();
        if !room.fits(guests) {
            return Err(CoreError::CapacityExceeded {
                room: room.number.clone(),
                capacity: room.capacity,
                requested: guests,
            });
        }
    }

    let services = match &edit.services {
        Some(names) => Some(catalog.resolve(names.as_slice())?),
        None => None,
    };

    Ok(AcceptedEdit {
        names,
        window,
        guests: edit.guests,
        services,
    })
}

/// Validates an edit against the ledger and, if every check passes, applies
/// it to the stored stay.
///
/// On any error the stay is left exactly as it was.
pub fn apply_edit<'a>(
    ledger: &'a mut Ledger,
    catalog: &Catalog,
    id: &str,
    edit: StayEdit,
) -> CoreResult<&'a Stay> {
    let stay = ledger
        .get(id)
        .ok_or_else(|| CoreError::StayNotFound(id.to_string()))?;
    let accepted = validate_edit(ledger, catalog, stay, &edit)?;

    let stay = ledger
        .get_mut(id)
        .ok_or_else(|| CoreError::StayNotFound(id.to_string()))?;

    if let Some((first, last)) = accepted.names {
        stay.set_names(first, last);
    }
    if let Some(window) = accepted.window {
        stay.set_window(window);
    }
    if let Some(guests) = accepted.guests {
        stay.set_guests(guests);
    }
    if let Some(services) = accepted.services {
        stay.set_services(services);
    }

    Ok(stay)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::DiscountVariant;
    use crate::inventory::Inventory;
    use crate::types::StayParts;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// Mario in 101 on Aug 1-3, Anna in 101 on Aug 5-7, Luca in 201 on Aug 1-4.
    fn setup() -> (Ledger, Catalog) {
        let inventory = Inventory::standard();
        let make = |id: &str, first: &str, last: &str, room: &str, from: &str, to: &str| {
            Stay::from_parts(StayParts {
                id: id.to_string(),
                first_name: first.to_string(),
                last_name: last.to_string(),
                check_in: d(from),
                check_out: d(to),
                room: Arc::clone(inventory.require(room).unwrap()),
                services: Vec::new(),
                guests: 1,
                discount: DiscountVariant::Standard,
            })
        };

        let ledger = Ledger::from_stays(vec![
            make("mario", "Mario", "Rossi", "101", "2025-08-01", "2025-08-03"),
            make("anna", "Anna", "Bianchi", "101", "2025-08-05", "2025-08-07"),
            make("luca", "Luca", "Verdi", "201", "2025-08-01", "2025-08-04"),
        ]);
        (ledger, Catalog::standard())
    }

    #[test]
    fn test_can_apply_edit_allows_shift_within_own_nights() {
        let (ledger, _) = setup();
        let mario = ledger.get("mario").unwrap();

        let window = can_apply_edit(&ledger, mario, "2025-08-02", "2025-08-05").unwrap();
        assert_eq!(window.nights(), 3);
    }

    #[test]
    fn test_can_apply_edit_names_blocking_guest() {
        let (ledger, _) = setup();
        let anna = ledger.get("anna").unwrap();

        let err = can_apply_edit(&ledger, anna, "2025-08-02", "2025-08-06").unwrap_err();
        assert_eq!(
            err,
            CoreError::RoomConflict {
                room: "101".to_string(),
                guest: "Mario Rossi".to_string(),
                check_in: d("2025-08-01"),
                check_out: d("2025-08-03"),
            }
        );
    }

    #[test]
    fn test_can_apply_edit_date_reasons() {
        let (ledger, _) = setup();
        let mario = ledger.get("mario").unwrap();

        assert_eq!(
            can_apply_edit(&ledger, mario, "2025-02-30", "2025-08-03").unwrap_err(),
            CoreError::invalid_dates("invalid dates")
        );
        assert_eq!(
            can_apply_edit(&ledger, mario, "2025-08-03", "2025-08-03").unwrap_err(),
            CoreError::invalid_dates("check-out must be after check-in")
        );
    }

    #[test]
    fn test_touching_intervals_are_not_conflicts() {
        let (ledger, _) = setup();
        let anna = ledger.get("anna").unwrap();
        assert!(can_apply_edit(&ledger, anna, "2025-08-03", "2025-08-05").is_ok());
    }

    #[test]
    fn test_apply_edit_writes_all_fields() {
        let (mut ledger, catalog) = setup();

        let edit = StayEdit {
            first_name: Some("  Marco ".to_string()),
            check_out: Some("2025-08-04".to_string()),
            guests: Some(1),
            services: Some(vec!["Breakfast".to_string()]),
            ..Default::default()
        };
        let stay = apply_edit(&mut ledger, &catalog, "mario", edit).unwrap();

        assert_eq!(stay.guest_name(), "Marco Rossi");
        assert_eq!(stay.check_in(), d("2025-08-01"));
        assert_eq!(stay.check_out(), d("2025-08-04"));
        assert_eq!(stay.services().len(), 1);
        assert!(stay.is_in_room("101"));
    }

    #[test]
    fn test_rejected_edit_leaves_stay_unchanged() {
        let (mut ledger, catalog) = setup();
        let before = ledger.get("anna").unwrap().clone();

        let edit = StayEdit {
            first_name: Some("Anita".to_string()),
            ..StayEdit::dates("2025-08-02", "2025-08-06")
        };
        assert!(matches!(
            apply_edit(&mut ledger, &catalog, "anna", edit),
            Err(CoreError::RoomConflict { .. })
        ));
        assert_eq!(ledger.get("anna").unwrap(), &before);

        let edit = StayEdit {
            services: Some(vec!["Sauna".to_string()]),
            ..StayEdit::dates("2025-08-08", "2025-08-09")
        };
        assert!(apply_edit(&mut ledger, &catalog, "anna", edit).is_err());
        assert_eq!(ledger.get("anna").unwrap(), &before);
    }

    #[test]
    fn test_apply_edit_checks_capacity_and_names() {
        let (mut ledger, catalog) = setup();

        let too_many = StayEdit {
            guests: Some(2),
            ..Default::default()
        };
        assert_eq!(
            apply_edit(&mut ledger, &catalog, "mario", too_many).unwrap_err(),
            CoreError::CapacityExceeded {
                room: "101".to_string(),
                capacity: 1,
                requested: 2,
            }
        );

        let none = StayEdit {
            guests: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            apply_edit(&mut ledger, &catalog, "mario", none),
            Err(CoreError::Validation(_))
        ));

        let blank = StayEdit {
            last_name: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            apply_edit(&mut ledger, &catalog, "mario", blank),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_apply_edit_unknown_stay() {
        let (mut ledger, catalog) = setup();
        assert_eq!(
            apply_edit(&mut ledger, &catalog, "ghost", StayEdit::default()).unwrap_err(),
            CoreError::StayNotFound("ghost".to_string())
        );
    }
}
