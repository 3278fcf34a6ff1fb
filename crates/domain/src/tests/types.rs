// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Booking, BookingLine, Deal, Event, OrderQuote, OrderQuoteLine, SeatLabel, SeatSelection,
    TicketCategory, TicketProduct, Venue, VenueClass,
};
use rust_decimal::Decimal;
use time::{Duration, OffsetDateTime, macros::datetime};

fn create_test_booking(email: &str) -> Booking {
    Booking {
        id: String::from("b-1"),
        event_id: String::from("evt-1"),
        reference_code: String::from("BK123456"),
        customer_name: String::from("Jane Citizen"),
        customer_email: email.to_string(),
        customer_phone: String::new(),
        created_at: datetime!(2026-03-01 10:00 UTC),
        subtotal: Decimal::new(4000, 2),
        discount: Decimal::ZERO,
        total: Decimal::new(4000, 2),
        lines: vec![
            BookingLine {
                seat_label: SeatLabel::new("C3"),
                ticket_type_id: String::from("t_adult"),
                unit_price: Decimal::new(2000, 2),
            },
            BookingLine {
                seat_label: SeatLabel::new("C4"),
                ticket_type_id: String::from("t_adult"),
                unit_price: Decimal::new(2000, 2),
            },
        ],
    }
}

#[test]
fn test_only_vmax_is_premium_large_format() {
    assert!(VenueClass::VMax.is_premium_large_format());
    assert!(!VenueClass::Standard.is_premium_large_format());
    assert!(!VenueClass::Deluxe.is_premium_large_format());
    assert!(!VenueClass::GoldClass.is_premium_large_format());
}

#[test]
fn test_ticket_price_zero_defers_to_base_price() {
    let mut product: TicketProduct = TicketProduct {
        id: String::from("t_adult"),
        category: TicketCategory::Adult,
        name: String::from("Adult"),
        price: Decimal::ZERO,
        requires_membership: false,
    };
    let base: Decimal = Decimal::new(1800, 2);
    assert_eq!(product.effective_price(base), base);

    product.price = Decimal::new(1450, 2);
    assert_eq!(product.effective_price(base), Decimal::new(1450, 2));
}

#[test]
fn test_deal_expiry_is_exclusive() {
    let now: OffsetDateTime = datetime!(2026-03-01 12:00 UTC);
    let deal: Deal = Deal::new("movie-1", 20, now);
    assert!(!deal.is_active_at(now));
    assert!(deal.is_active_at(now - Duration::seconds(1)));
    assert!(!deal.is_active_at(now + Duration::seconds(1)));
}

#[test]
fn test_booking_belongs_to_matches_email_case_insensitively() {
    let booking: Booking = create_test_booking("Jane@Example.com");
    assert!(booking.belongs_to("jane@example.com"));
    assert!(booking.belongs_to(" JANE@EXAMPLE.COM "));
    assert!(!booking.belongs_to("john@example.com"));
}

#[test]
fn test_booking_without_email_belongs_to_nobody() {
    let booking: Booking = create_test_booking("");
    assert!(!booking.belongs_to(""));
    assert!(!booking.belongs_to("   "));
}

#[test]
fn test_booking_seat_labels() {
    let booking: Booking = create_test_booking("jane@example.com");
    let labels: Vec<&str> = booking.seat_labels().map(SeatLabel::value).collect();
    assert_eq!(labels, vec!["C3", "C4"]);
}

#[test]
fn test_quote_totals_are_summed_from_lines() {
    let lines: Vec<OrderQuoteLine> = vec![
        OrderQuoteLine {
            description: String::from("Adult - Seat A1"),
            seat_label: SeatLabel::new("A1"),
            ticket_type_id: String::from("t_adult"),
            quantity: 1,
            unit_price: Decimal::new(2350, 2),
            discount: Decimal::new(470, 2),
        },
        OrderQuoteLine {
            description: String::from("Child - Seat A2"),
            seat_label: SeatLabel::new("A2"),
            ticket_type_id: String::from("t_child"),
            quantity: 1,
            unit_price: Decimal::new(1600, 2),
            discount: Decimal::new(320, 2),
        },
    ];
    let quote: OrderQuote = OrderQuote::from_lines("evt-1", lines);

    assert_eq!(quote.subtotal, Decimal::new(3950, 2));
    assert_eq!(quote.discount, Decimal::new(790, 2));
    assert_eq!(quote.total, Decimal::new(3160, 2));
    assert!(quote.line_for(&SeatLabel::new("a2")).is_some());
    assert!(quote.line_for(&SeatLabel::new("A3")).is_none());
}

#[test]
fn test_empty_quote_has_zero_totals() {
    let quote: OrderQuote = OrderQuote::empty("evt-9");
    assert_eq!(quote.event_id, "evt-9");
    assert!(quote.lines.is_empty());
    assert_eq!(quote.subtotal, Decimal::ZERO);
    assert_eq!(quote.discount, Decimal::ZERO);
    assert_eq!(quote.total, Decimal::ZERO);
}

#[test]
fn test_venue_defaults_premium_cutoff_when_absent() {
    let json: &str = r#"{"id":"aud-1","cinema_id":"c-1","row_count":8,"column_count":12}"#;
    let venue: Venue = serde_json::from_str(json).unwrap();
    assert_eq!(venue.premium_row_cutoff, 2);
    assert_eq!(venue.name, "");
}

#[test]
fn test_event_round_trips_through_json() {
    let event: Event = Event {
        id: String::from("evt-1"),
        movie_id: String::from("movie-1"),
        venue_id: String::from("aud-1"),
        start_utc: datetime!(2026-03-01 19:30 UTC),
        base_price: Decimal::new(1950, 2),
        class: VenueClass::VMax,
    };
    let json: String = serde_json::to_string(&event).unwrap();
    assert!(json.contains("2026-03-01T19:30:00Z"));
    let parsed: Event = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, event);
}

#[test]
fn test_selection_ticket_type_is_trimmed() {
    let selection: SeatSelection = SeatSelection::new("c4", " adult\t");
    assert_eq!(selection.ticket_type(), "adult");
    assert_eq!(selection.ticket_type_id, " adult\t");
}
