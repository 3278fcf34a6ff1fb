// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::{CatalogStore, EntityKind, InMemoryBackend};
use cinebook_domain::{
    Booking, BookingLine, Cinema, Customer, Event, Movie, SeatLabel, TicketCategory,
    TicketProduct, Venue, VenueClass,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use time::OffsetDateTime;
use time::macros::datetime;

pub const NOW: OffsetDateTime = datetime!(2026-03-01 12:00 UTC);

pub fn create_test_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: String::from("movie-1"),
            title: String::from("The Long Night"),
            synopsis: String::new(),
            runtime_minutes: 118,
            rating: String::from("M"),
            poster_url: String::new(),
            genres: vec![String::from("Drama")],
        },
        Movie {
            id: String::from("movie-2"),
            title: String::from("Paper Boats"),
            synopsis: String::new(),
            runtime_minutes: 95,
            rating: String::from("PG"),
            poster_url: String::new(),
            genres: Vec::new(),
        },
    ]
}

pub fn create_test_cinemas() -> Vec<Cinema> {
    vec![Cinema {
        id: String::from("cinema-1"),
        name: String::from("Harbourside"),
        suburb: String::from("Docklands"),
        state: String::from("VIC"),
    }]
}

pub fn create_test_venue(id: &str, row_count: u8, column_count: u16) -> Venue {
    Venue {
        id: id.to_string(),
        cinema_id: String::from("cinema-1"),
        name: format!("Auditorium {id}"),
        row_count,
        column_count,
        premium_row_cutoff: 2,
    }
}

pub fn create_test_event(id: &str, movie_id: &str, start_utc: OffsetDateTime) -> Event {
    Event {
        id: id.to_string(),
        movie_id: movie_id.to_string(),
        venue_id: String::from("aud-1"),
        start_utc,
        base_price: Decimal::new(1500, 2),
        class: VenueClass::Standard,
    }
}

pub fn create_test_ticket_types() -> Vec<TicketProduct> {
    vec![TicketProduct {
        id: String::from("adult"),
        category: TicketCategory::Adult,
        name: String::from("Adult"),
        price: Decimal::new(1950, 2),
        requires_membership: false,
    }]
}

pub fn create_test_customer() -> Customer {
    Customer {
        id: String::from("user-1"),
        email: String::from("jo@example.com"),
        display_name: String::from("Jo"),
        role: String::from("customer"),
        created_utc: NOW,
    }
}

pub fn create_test_booking(event_id: &str, email: &str, seats: &[&str]) -> Booking {
    let unit_price: Decimal = Decimal::new(1950, 2);
    let lines: Vec<BookingLine> = seats
        .iter()
        .map(|seat| BookingLine {
            seat_label: SeatLabel::new(seat),
            ticket_type_id: String::from("adult"),
            unit_price,
        })
        .collect();
    let subtotal: Decimal = unit_price * Decimal::from(lines.len());
    Booking {
        id: cinebook_domain::new_entity_id(),
        event_id: event_id.to_string(),
        reference_code: cinebook_domain::generate_reference_code(),
        customer_name: String::from("Jo Citizen"),
        customer_email: email.to_string(),
        customer_phone: String::new(),
        created_at: NOW,
        subtotal,
        discount: Decimal::ZERO,
        total: subtotal,
        lines,
    }
}

/// A backend seeded with a small catalog: two movies, one cinema, one
/// 5x8 auditorium and three screenings.
pub fn create_seeded_backend() -> InMemoryBackend {
    InMemoryBackend::new()
        .with_records(EntityKind::Movies, &create_test_movies())
        .unwrap()
        .with_records(EntityKind::Cinemas, &create_test_cinemas())
        .unwrap()
        .with_records(EntityKind::Auditoriums, &[create_test_venue("aud-1", 5, 8)])
        .unwrap()
        .with_records(
            EntityKind::Screenings,
            &[
                create_test_event("evt-2", "movie-1", datetime!(2026-03-02 21:00 UTC)),
                create_test_event("evt-1", "movie-1", datetime!(2026-03-02 18:00 UTC)),
                create_test_event("evt-3", "movie-2", datetime!(2026-03-03 18:00 UTC)),
            ],
        )
        .unwrap()
        .with_records(EntityKind::TicketTypes, &create_test_ticket_types())
        .unwrap()
        .with_records(EntityKind::Users, &[create_test_customer()])
        .unwrap()
}

pub fn create_test_store() -> (CatalogStore, Arc<InMemoryBackend>) {
    let backend: Arc<InMemoryBackend> = Arc::new(create_seeded_backend());
    let store: CatalogStore = CatalogStore::open(backend.clone()).unwrap();
    (store, backend)
}
