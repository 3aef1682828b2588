//! # Booking
//!
//! Turns a front-desk request into a stored stay.
//!
//! ## Booking Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BookingRequest (raw strings from the desk)                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  prepare ──────────────────────────────────────────────┐                │
//! │   • first/last name non-empty      → Validation        │                │
//! │   • StayWindow::parse              → InvalidDateRange  │  quote_booking │
//! │   • room in inventory              → RoomNotFound      │  stops here    │
//! │   • services in catalog            → ServiceNotFound   │  and prices    │
//! │   • 1 <= guests <= capacity        → CapacityExceeded  │  the result    │
//! │   • no overlapping stay            → RoomConflict      │                │
//! │   • discount code resolved once    (never fails)       │                │
//! │       │ ◄───────────────────────────────────────────────┘                │
//! │       ▼                                                                 │
//! │  book: assign UUID, insert into ledger, return the stay                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use uuid::Uuid;

use crate::dates::StayWindow;
use crate::discount::DiscountVariant;
use crate::error::{CoreError, CoreResult};
use crate::hotel::Hotel;
use crate::pricing::{quote, PriceQuote};
use crate::types::{Room, Service, Stay, StayParts};
use crate::validation::{validate_guest_count, validate_person_name};

/// A booking as entered at the front desk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub first_name: String,
    pub last_name: String,
    pub room_number: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
    pub services: Vec<String>,
    /// Matched exactly against the discount table. Empty means none.
    pub discount_code: String,
}

impl BookingRequest {
    /// A one-guest request with no services and no discount code.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        room_number: impl Into<String>,
        check_in: impl Into<String>,
        check_out: impl Into<String>,
    ) -> Self {
        BookingRequest {
            first_name: first_name.into(),
            last_name: last_name.into(),
            room_number: room_number.into(),
            check_in: check_in.into(),
            check_out: check_out.into(),
            guests: 1,
            services: Vec::new(),
            discount_code: String::new(),
        }
    }

    pub fn with_guests(mut self, guests: u32) -> Self {
        self.guests = guests;
        self
    }

    pub fn with_services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.services = services.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_discount_code(mut self, code: impl Into<String>) -> Self {
        self.discount_code = code.into();
        self
    }
}

/// A request that passed every check, not yet in the ledger.
struct PreparedBooking {
    first_name: String,
    last_name: String,
    window: StayWindow,
    room: Arc<Room>,
    services: Vec<Arc<Service>>,
    guests: u32,
    discount: DiscountVariant,
}

fn prepare(hotel: &Hotel, request: &BookingRequest) -> CoreResult<PreparedBooking> {
    let first_name = validate_person_name("first name", &request.first_name)?;
    let last_name = validate_person_name("last name", &request.last_name)?;
    let window = StayWindow::parse(&request.check_in, &request.check_out)?;
    let room = Arc::clone(hotel.inventory().require(&request.room_number)?);
    let services = hotel.catalog().resolve(request.services.as_slice())?;

    validate_guest_count(request.guests)?;
    if !room.fits(request.guests) {
        return Err(CoreError::CapacityExceeded {
            room: room.number.clone(),
            capacity: room.capacity,
            requested: request.guests,
        });
    }

    if let Some(blocking) = hotel.ledger().conflicts_for(&room, &window, None).first() {
        return Err(CoreError::RoomConflict {
            room: room.number.clone(),
            guest: blocking.guest_name(),
            check_in: blocking.check_in(),
            check_out: blocking.check_out(),
        });
    }

    let discount = hotel.resolve_discount(&request.discount_code);

    Ok(PreparedBooking {
        first_name,
        last_name,
        window,
        room,
        services,
        guests: request.guests,
        discount,
    })
}

/// Prices a request without booking it. Fails exactly when [`book`] would.
pub fn quote_booking(hotel: &Hotel, request: &BookingRequest) -> CoreResult<PriceQuote> {
    let prepared = prepare(hotel, request)?;
    Ok(quote(
        &prepared.room,
        &prepared.services,
        &prepared.window,
        &prepared.discount,
    ))
}

/// Validates a request and stores the resulting stay.
///
/// Nothing is inserted unless every check passes.
pub fn book(hotel: &mut Hotel, request: BookingRequest) -> CoreResult<Stay> {
    let prepared = prepare(hotel, &request)?;

    let stay = Stay::from_parts(StayParts {
        id: Uuid::new_v4().to_string(),
        first_name: prepared.first_name,
        last_name: prepared.last_name,
        check_in: prepared.window.check_in(),
        check_out: prepared.window.check_out(),
        room: prepared.room,
        services: prepared.services,
        guests: prepared.guests,
        discount: prepared.discount,
    });

    hotel.ledger_mut().insert(stay.clone());
    Ok(stay)
}

// =============================================================================
// Unit Tests
// =============================================================================
