//! Properties that must hold after any sequence of accepted operations.

use albergo_core::pricing::{price, price_standard};
use albergo_core::{BookingRequest, Hotel, Money, StayEdit, StayWindow};
use chrono::{Duration, NaiveDate};

/// Small deterministic generator so failures reproduce.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

fn day(offset: u64) -> String {
    let base = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
    (base + Duration::days(offset as i64)).format("%Y-%m-%d").to_string()
}

#[test]
fn test_no_overlaps_after_random_bookings_and_edits() {
    let mut hotel = Hotel::standard();
    let numbers: Vec<String> = hotel
        .inventory()
        .rooms()
        .iter()
        .map(|r| r.number.clone())
        .collect();
    let mut rng = Lcg(42);

    for i in 0..400 {
        let start = rng.next(40);
        let length = 1 + rng.next(6);

        if i % 3 == 0 && !hotel.ledger().is_empty() {
            let index = rng.next(hotel.ledger().len() as u64) as usize;
            let id = hotel.ledger().stays()[index].id().to_string();
            let _ = hotel.edit_stay(&id, StayEdit::dates(day(start), day(start + length)));
        } else {
            let room = &numbers[rng.next(numbers.len() as u64) as usize];
            let request = BookingRequest::new("Guest", format!("N{}", i), room.as_str(), day(start), day(start + length))
                .with_guests(1 + rng.next(4) as u32);
            let _ = hotel.book(request);
        }

        assert!(hotel.ledger().overlapping_pairs().is_empty());
    }

    assert!(!hotel.ledger().is_empty());
}

#[test]
fn test_available_rooms_always_fit_party() {
    let mut hotel = Hotel::standard();
    hotel
        .book(BookingRequest::new("Luca", "Verdi", "301", "2025-08-01", "2025-08-05").with_guests(4))
        .unwrap();

    let window = StayWindow::parse("2025-08-02", "2025-08-03").unwrap();
    for guests in 1..=5 {
        for room in hotel.find_available_rooms(&window, guests) {
            assert!(room.capacity >= guests);
            assert_ne!(room.number, "301");
        }
    }
    assert!(hotel.find_available_rooms(&window, 5).is_empty());
}

#[test]
fn test_standard_price_is_linear_in_nights() {
    let mut hotel = Hotel::standard();
    let mut previous: Option<Money> = None;

    for nights in 1..=7u64 {
        let room = format!("20{}", 1 + (nights % 4));
        let check_in = 10 * nights;
        let stay = hotel
            .book(
                BookingRequest::new("Anna", "Bianchi", room.as_str(), day(check_in), day(check_in + nights))
                    .with_services(["WiFi", "Parking"]),
            )
            .unwrap();

        let per_night = Money::from_euros(120 + 5 + 8);
        assert_eq!(price_standard(&stay), per_night * nights as i64);
        assert_eq!(price(&stay), price_standard(&stay));

        if let Some(prev) = previous {
            assert_eq!(price_standard(&stay) - prev, per_night);
        }
        previous = Some(price_standard(&stay));
    }
}
