// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingContext, BookingRequest};
use cinebook_domain::{
    CustomerInfo, Deal, Event, SeatLabel, SeatSelection, TicketCategory, TicketProduct, Venue,
    VenueClass,
};
use rust_decimal::Decimal;
use std::collections::HashSet;
use time::OffsetDateTime;
use time::macros::datetime;

pub const NOW: OffsetDateTime = datetime!(2026-03-01 12:00 UTC);

pub fn create_test_venue(row_count: u8, column_count: u16, premium_row_cutoff: u8) -> Venue {
    Venue {
        id: String::from("aud-1"),
        cinema_id: String::from("cinema-1"),
        name: String::from("Auditorium 1"),
        row_count,
        column_count,
        premium_row_cutoff,
    }
}

pub fn create_test_event(base_price: Decimal, class: VenueClass) -> Event {
    Event {
        id: String::from("evt-1"),
        movie_id: String::from("movie-1"),
        venue_id: String::from("aud-1"),
        start_utc: datetime!(2026-03-02 19:30 UTC),
        base_price,
        class,
    }
}

pub fn create_test_products() -> Vec<TicketProduct> {
    vec![
        TicketProduct {
            id: String::from("adult"),
            category: TicketCategory::Adult,
            name: String::from("Adult"),
            price: Decimal::new(1950, 2),
            requires_membership: false,
        },
        TicketProduct {
            id: String::from("child"),
            category: TicketCategory::Child,
            name: String::from("Child"),
            price: Decimal::new(1250, 2),
            requires_membership: false,
        },
        TicketProduct {
            id: String::from("standard"),
            category: TicketCategory::Adult,
            name: String::from("Standard"),
            price: Decimal::ZERO,
            requires_membership: false,
        },
    ]
}

pub fn create_test_deal(discount: u8, expiry_date: OffsetDateTime) -> Deal {
    Deal {
        id: String::from("deal-1"),
        movie_id: String::from("movie-1"),
        discount,
        expiry_date,
    }
}

pub fn create_test_request(seats: &[(&str, &str)]) -> BookingRequest {
    BookingRequest {
        event_id: String::from("evt-1"),
        customer: CustomerInfo {
            name: String::from("Jo Citizen"),
            email: String::from("jo@example.com"),
            phone: String::from("0400 000 000"),
        },
        seats: selections(seats),
        promo_code: None,
    }
}

pub fn selections(seats: &[(&str, &str)]) -> Vec<SeatSelection> {
    seats
        .iter()
        .map(|(seat, ticket)| SeatSelection::new(seat, ticket))
        .collect()
}

pub fn booked(labels: &[&str]) -> HashSet<SeatLabel> {
    labels.iter().map(|label| SeatLabel::new(label)).collect()
}

/// Owns everything a `BookingContext` borrows.
pub struct Fixture {
    pub event: Event,
    pub venue: Venue,
    pub booked_seats: HashSet<SeatLabel>,
    pub ticket_products: Vec<TicketProduct>,
    pub deals: Vec<Deal>,
}

impl Fixture {
    pub fn new(venue: Venue, event: Event) -> Self {
        Self {
            event,
            venue,
            booked_seats: HashSet::new(),
            ticket_products: create_test_products(),
            deals: Vec::new(),
        }
    }

    /// A 5x8 standard auditorium with a $15.00 base price.
    pub fn standard() -> Self {
        Self::new(
            create_test_venue(5, 8, 2),
            create_test_event(Decimal::new(1500, 2), VenueClass::Standard),
        )
    }

    pub fn context(&self) -> BookingContext<'_> {
        BookingContext {
            event: &self.event,
            venue: &self.venue,
            booked_seats: &self.booked_seats,
            ticket_products: &self.ticket_products,
            deals: &self.deals,
        }
    }
}
