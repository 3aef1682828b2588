//! # Availability Commands
//!
//! Room search for a date window and party size.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Desk enters: 2025-08-02 → 2025-08-04, 2 guests                        │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  check_availability ─► bookable rooms + count per type                 │
//! │  room_status ────────► every room with the reason it is (not) bookable │
//! │                                                                         │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  101 Single  ✗ insufficient capacity (max 1 guests, 2 req.)   │    │
//! │  │  201 Double  ✗ occupied, free from 2025-08-05                 │    │
//! │  │  202 Double  ✓ available                      3 Double free   │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use albergo_core::validation::validate_guest_count;
use albergo_core::{AvailabilityReason, CoreError, Room, Service, StayWindow};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiResult;
use crate::state::HotelState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub number: String,
    pub room_type: String,
    pub capacity: u32,
    pub nightly_price_cents: i64,
}

impl From<&Room> for RoomDto {
    fn from(room: &Room) -> Self {
        RoomDto {
            number: room.number.clone(),
            room_type: room.room_type.clone(),
            capacity: room.capacity,
            nightly_price_cents: room.nightly_price_cents,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDto {
    pub name: String,
    pub price_per_day_cents: i64,
}

impl From<&Service> for ServiceDto {
    fn from(service: &Service) -> Self {
        ServiceDto {
            name: service.name.clone(),
            price_per_day_cents: service.price_per_day_cents,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub check_in: String,
    pub check_out: String,
    pub nights: i64,
    pub guests: u32,
    pub rooms: Vec<RoomDto>,
    pub counts_by_type: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStatusDto {
    pub room: RoomDto,
    pub available: bool,
    pub reason: AvailabilityReason,
    /// `reason` as a sentence for the desk
    pub reason_text: String,
    pub same_type_available: usize,
}

/// Parses the window and party size shared by both searches.
fn search_params(check_in: &str, check_out: &str, guests: Option<u32>) -> ApiResult<(StayWindow, u32)> {
    let window = StayWindow::parse(check_in, check_out)?;
    let guests = guests.unwrap_or(1);
    validate_guest_count(guests).map_err(CoreError::from)?;
    Ok((window, guests))
}

/// Lists every room in the inventory.
pub fn list_rooms(hotel: &HotelState) -> Vec<RoomDto> {
    debug!("list_rooms command");
    hotel.with_hotel(|h| h.inventory().rooms().iter().map(|r| RoomDto::from(r.as_ref())).collect())
}

/// Lists the add-on services and their daily prices.
pub fn list_services(hotel: &HotelState) -> Vec<ServiceDto> {
    debug!("list_services command");
    hotel.with_hotel(|h| h.catalog().services().iter().map(|s| ServiceDto::from(s.as_ref())).collect())
}

/// Finds rooms that can take `guests` people (default 1) for the whole window.
///
/// ## Errors
/// - `INVALID_DATES` for unparseable dates or check-out not after check-in
/// - `VALIDATION_ERROR` for zero guests
pub fn check_availability(
    hotel: &HotelState,
    check_in: &str,
    check_out: &str,
    guests: Option<u32>,
) -> ApiResult<AvailabilityResponse> {
    debug!(check_in, check_out, ?guests, "check_availability command");
    let (window, guests) = search_params(check_in, check_out, guests)?;

    Ok(hotel.with_hotel(|h| AvailabilityResponse {
        check_in: window.check_in().to_string(),
        check_out: window.check_out().to_string(),
        nights: window.nights(),
        guests,
        rooms: h
            .find_available_rooms(&window, guests)
            .iter()
            .map(|r| RoomDto::from(r.as_ref()))
            .collect(),
        counts_by_type: h.ledger().available_counts_by_type(h.inventory(), &window, guests),
    }))
}

/// Status of every room for the window, with the reason each one is or is
/// not bookable.
pub fn room_status(
    hotel: &HotelState,
    check_in: &str,
    check_out: &str,
    guests: Option<u32>,
) -> ApiResult<Vec<RoomStatusDto>> {
    debug!(check_in, check_out, ?guests, "room_status command");
    let (window, guests) = search_params(check_in, check_out, guests)?;

    Ok(hotel.with_hotel(|h| {
        h.describe_availability(&window, guests)
            .into_iter()
            .map(|status| RoomStatusDto {
                room: RoomDto::from(status.room.as_ref()),
                available: status.available,
                reason_text: status.reason.to_string(),
                reason: status.reason,
                same_type_available: status.same_type_available,
            })
            .collect()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use albergo_core::{BookingRequest, Hotel};

    fn state_with_double_booked() -> HotelState {
        let state = HotelState::in_memory(Hotel::standard());
        state
            .with_hotel_mut(|h| {
                h.book(BookingRequest::new("Luca", "Verdi", "201", "2025-08-01", "2025-08-05").with_guests(2))
            })
            .unwrap();
        state
    }

    #[test]
    fn test_check_availability_for_couple() {
        let state = state_with_double_booked();
        let response = check_availability(&state, "2025-08-02", "2025-08-04", Some(2)).unwrap();

        assert_eq!(response.nights, 2);
        let numbers: Vec<&str> = response.rooms.iter().map(|r| r.number.as_str()).collect();
        assert_eq!(numbers, vec!["202", "203", "204", "301", "302"]);
        assert_eq!(response.counts_by_type.get("Double"), Some(&3));
        assert_eq!(response.counts_by_type.get("Single"), None);
    }

    #[test]
    fn test_room_status_reasons() {
        let state = state_with_double_booked();
        let rows = room_status(&state, "2025-08-02", "2025-08-04", Some(2)).unwrap();

        assert_eq!(rows.len(), 10);
        let single = rows.iter().find(|r| r.room.number == "101").unwrap();
        assert_eq!(single.reason_text, "insufficient capacity (max 1 guests, 2 requested)");
        let occupied = rows.iter().find(|r| r.room.number == "201").unwrap();
        assert_eq!(occupied.reason_text, "occupied, free from 2025-08-05");
    }

    #[test]
    fn test_bad_search_params() {
        let state = HotelState::in_memory(Hotel::standard());

        let err = check_availability(&state, "2025-08-04", "2025-08-02", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDates);

        let err = check_availability(&state, "2025-08-02", "2025-08-04", Some(0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_listings() {
        let state = HotelState::in_memory(Hotel::standard());
        assert_eq!(list_rooms(&state).len(), 10);
        let services = list_services(&state);
        assert_eq!(services.len(), 5);
        assert_eq!(services[0].name, "Breakfast");
    }
}
