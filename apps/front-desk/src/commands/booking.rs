//! # Booking Commands
//!
//! Create, inspect, edit and cancel stays.
//!
//! ## Stay Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  quote_stay ──► (price preview, nothing stored)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  book_stay ───► ┌──────────┐ ──► check_edit / edit_stay ──┐             │
//! │                 │  Booked  │ ◄────────────────────────────┘             │
//! │                 └────┬─────┘                                            │
//! │                      │ delete_stay                                      │
//! │                      ▼                                                  │
//! │                   (gone)                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every write runs under the hotel lock and is persisted before the lock is
//! released.

use albergo_core::pricing::{price, price_standard, quote_stay as quote_booked};
use albergo_core::{BookingRequest, CoreError, DiscountVariant, PriceQuote, Stay, StayEdit};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiResult;
use crate::state::HotelState;

// =============================================================================
// Inputs
// =============================================================================

/// A booking as typed at the desk.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInput {
    pub first_name: String,
    pub last_name: String,
    pub room_number: String,
    pub check_in: String,
    pub check_out: String,
    #[serde(default)]
    pub guests: Option<u32>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub discount_code: Option<String>,
}

impl From<BookingInput> for BookingRequest {
    /// Surrounding spaces in the discount code field are dropped; matching
    /// itself stays exact.
    fn from(input: BookingInput) -> Self {
        BookingRequest::new(
            input.first_name,
            input.last_name,
            input.room_number,
            input.check_in,
            input.check_out,
        )
        .with_guests(input.guests.unwrap_or(1))
        .with_services(input.services)
        .with_discount_code(input.discount_code.as_deref().map(str::trim).unwrap_or_default())
    }
}

/// Changes to an existing stay. Omitted fields are left as they are.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<u32>,
    pub services: Option<Vec<String>>,
}

impl From<EditInput> for StayEdit {
    fn from(input: EditInput) -> Self {
        StayEdit {
            first_name: input.first_name,
            last_name: input.last_name,
            check_in: input.check_in,
            check_out: input.check_out,
            guests: input.guests,
            services: input.services,
        }
    }
}

// =============================================================================
// Responses
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StayDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub room_number: String,
    pub room_type: String,
    pub check_in: String,
    pub check_out: String,
    pub nights: i64,
    pub guests: u32,
    pub services: Vec<String>,
    pub discount: DiscountVariant,
    /// Price before any discount
    pub original_cents: i64,
    /// Amount charged
    pub total_cents: i64,
    pub description: String,
}

impl From<&Stay> for StayDto {
    fn from(stay: &Stay) -> Self {
        StayDto {
            id: stay.id().to_string(),
            first_name: stay.first_name().to_string(),
            last_name: stay.last_name().to_string(),
            room_number: stay.room().number.clone(),
            room_type: stay.room().room_type.clone(),
            check_in: stay.check_in().to_string(),
            check_out: stay.check_out().to_string(),
            nights: stay.nights(),
            guests: stay.guests(),
            services: stay.services().iter().map(|s| s.name.clone()).collect(),
            discount: stay.discount().clone(),
            original_cents: price_standard(stay).cents(),
            total_cents: price(stay).cents(),
            description: stay.describe(),
        }
    }
}

/// Outcome of a date-change check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditCheckResponse {
    pub allowed: bool,
    /// Why the change is refused
    pub reason: Option<String>,
}

// =============================================================================
// Commands
// =============================================================================

/// Prices a booking without storing it.
pub fn quote_stay(hotel: &HotelState, input: BookingInput) -> ApiResult<PriceQuote> {
    debug!(room = %input.room_number, "quote_stay command");
    let request = BookingRequest::from(input);
    Ok(hotel.with_hotel(|h| h.quote_booking(&request))?)
}

/// Books a stay.
///
/// ## Errors
/// - `VALIDATION_ERROR`: empty name, zero guests
/// - `INVALID_DATES`: bad dates or check-out not after check-in
/// - `NOT_FOUND`: unknown room or service
/// - `CAPACITY_EXCEEDED`, `ROOM_CONFLICT`
/// - `STORAGE_ERROR`: the booking could not be saved (and was not kept)
pub fn book_stay(hotel: &HotelState, input: BookingInput) -> ApiResult<StayDto> {
    debug!(room = %input.room_number, check_in = %input.check_in, check_out = %input.check_out, "book_stay command");
    let request = BookingRequest::from(input);
    let stay = hotel.with_hotel_mut(|h| h.book(request))?;

    info!(stay_id = %stay.id(), room = %stay.room().number, "Stay booked");
    Ok(StayDto::from(&stay))
}

/// Every stay, in booking order.
pub fn list_stays(hotel: &HotelState) -> Vec<StayDto> {
    debug!("list_stays command");
    hotel.with_hotel(|h| h.ledger().iter().map(StayDto::from).collect())
}

pub fn get_stay(hotel: &HotelState, id: &str) -> ApiResult<StayDto> {
    debug!(id, "get_stay command");
    Ok(hotel.with_hotel(|h| h.stay(id).map(StayDto::from))?)
}

/// Full price breakdown of a booked stay, including the discount figures
/// for a tiered stay.
pub fn stay_price(hotel: &HotelState, id: &str) -> ApiResult<PriceQuote> {
    debug!(id, "stay_price command");
    Ok(hotel.with_hotel(|h| h.stay(id).map(quote_booked))?)
}

/// Checks whether a stay may move to new dates, without changing it.
///
/// A refusal is a normal answer (`allowed: false` with the reason); only an
/// unknown stay is an error.
pub fn check_edit(
    hotel: &HotelState,
    id: &str,
    check_in: &str,
    check_out: &str,
) -> ApiResult<EditCheckResponse> {
    debug!(id, check_in, check_out, "check_edit command");

    hotel.with_hotel(|h| match h.can_apply_edit(id, check_in, check_out) {
        Ok(_) => Ok(EditCheckResponse {
            allowed: true,
            reason: None,
        }),
        Err(CoreError::StayNotFound(id)) => Err(CoreError::StayNotFound(id).into()),
        Err(e) => Ok(EditCheckResponse {
            allowed: false,
            reason: Some(e.to_string()),
        }),
    })
}

/// Applies an edit to a stay. The room and discount never change.
pub fn edit_stay(hotel: &HotelState, id: &str, input: EditInput) -> ApiResult<StayDto> {
    debug!(id, "edit_stay command");
    let edit = StayEdit::from(input);
    let dto = hotel.with_hotel_mut(|h| h.edit_stay(id, edit).map(StayDto::from))?;

    info!(stay_id = %id, "Stay edited");
    Ok(dto)
}

/// Cancels a stay. Returns `false` when there was nothing to cancel.
pub fn delete_stay(hotel: &HotelState, id: &str) -> ApiResult<bool> {
    debug!(id, "delete_stay command");
    let removed = hotel.with_hotel_mut(|h| Ok(h.remove_stay(id)))?;

    if removed {
        info!(stay_id = %id, "Stay cancelled");
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use albergo_core::Hotel;

    fn input(room: &str, check_in: &str, check_out: &str) -> BookingInput {
        BookingInput {
            first_name: "Mario".to_string(),
            last_name: "Rossi".to_string(),
            room_number: room.to_string(),
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            guests: None,
            services: Vec::new(),
            discount_code: None,
        }
    }

    #[test]
    fn test_book_stay_with_padded_code() {
        let state = HotelState::in_memory(Hotel::standard());
        let mut request = input("101", "2025-08-01", "2025-08-03");
        request.discount_code = Some("  VIP2025 ".to_string());

        let stay = book_stay(&state, request).unwrap();
        assert_eq!(stay.original_cents, 16000);
        assert_eq!(stay.total_cents, 12800);
        assert!(stay.discount.is_tiered());
        assert_eq!(list_stays(&state).len(), 1);
    }

    #[test]
    fn test_booking_input_from_json() {
        let json = r#"{
            "firstName": "Anna", "lastName": "Bianchi",
            "roomNumber": "201", "checkIn": "2025-08-01T14:00:00", "checkOut": "2025-08-04",
            "guests": 2, "services": ["Breakfast", "Parking"]
        }"#;
        let parsed: BookingInput = serde_json::from_str(json).unwrap();

        let state = HotelState::in_memory(Hotel::standard());
        let quote = quote_stay(&state, parsed).unwrap();
        assert_eq!(quote.nights, 3);
        assert_eq!(quote.total.cents(), 42900);
        assert!(list_stays(&state).is_empty());
    }

    #[test]
    fn test_conflicting_booking_is_reported() {
        let state = HotelState::in_memory(Hotel::standard());
        book_stay(&state, input("101", "2025-08-01", "2025-08-03")).unwrap();

        let err = book_stay(&state, input("101", "2025-08-02", "2025-08-04")).unwrap_err();
        assert_eq!(err.code, ErrorCode::RoomConflict);
        assert!(err.message.contains("Mario Rossi"));
    }

    #[test]
    fn test_check_edit_answers_without_changing() {
        let state = HotelState::in_memory(Hotel::standard());
        book_stay(&state, input("101", "2025-08-01", "2025-08-03")).unwrap();
        let anna = book_stay(&state, input("101", "2025-08-05", "2025-08-07")).unwrap();

        let refused = check_edit(&state, &anna.id, "2025-08-02", "2025-08-06").unwrap();
        assert!(!refused.allowed);
        assert_eq!(
            refused.reason.as_deref(),
            Some("Room 101 is occupied by Mario Rossi from 2025-08-01 to 2025-08-03")
        );

        let bad = check_edit(&state, &anna.id, "someday", "2025-08-06").unwrap();
        assert_eq!(bad.reason.as_deref(), Some("Invalid date range: invalid dates"));

        assert!(check_edit(&state, &anna.id, "2025-08-04", "2025-08-08").unwrap().allowed);
        assert_eq!(get_stay(&state, &anna.id).unwrap(), anna);

        let err = check_edit(&state, "missing", "2025-08-04", "2025-08-08").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_edit_and_delete() {
        let state = HotelState::in_memory(Hotel::standard());
        let stay = book_stay(&state, input("201", "2025-08-01", "2025-08-03")).unwrap();

        let edited = edit_stay(
            &state,
            &stay.id,
            EditInput {
                guests: Some(2),
                services: Some(vec!["Spa".to_string()]),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(edited.guests, 2);
        assert_eq!(edited.total_cents, (12000 + 3500) * 2);

        let price = stay_price(&state, &stay.id).unwrap();
        assert!(price.discount.is_none());
        assert_eq!(price.total.cents(), edited.total_cents);

        assert!(delete_stay(&state, &stay.id).unwrap());
        assert!(!delete_stay(&state, &stay.id).unwrap());
        assert_eq!(get_stay(&state, &stay.id).unwrap_err().code, ErrorCode::NotFound);
    }
}
