// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{ConfirmRequest, NotificationError, Notifier, QuoteRequest, Services};
use cinebook_domain::{
    Cinema, Customer, CustomerInfo, Event, Movie, SeatSelection, TicketCategory, TicketProduct,
    Venue, VenueClass,
};
use cinebook_persistence::{CatalogStore, EntityKind, InMemoryBackend};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};
use time::macros::datetime;

pub fn create_test_movie(id: &str, title: &str) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        synopsis: String::new(),
        runtime_minutes: 110,
        rating: String::from("M"),
        poster_url: String::new(),
        genres: Vec::new(),
    }
}

pub fn create_test_event(id: &str, movie_id: &str, venue_id: &str) -> Event {
    Event {
        id: id.to_string(),
        movie_id: movie_id.to_string(),
        venue_id: venue_id.to_string(),
        start_utc: datetime!(2026-03-02 19:30 UTC),
        base_price: Decimal::new(1500, 2),
        class: VenueClass::Standard,
    }
}

pub fn create_test_customer(id: &str, email: &str, display_name: &str) -> Customer {
    Customer {
        id: id.to_string(),
        email: email.to_string(),
        display_name: display_name.to_string(),
        role: String::from("customer"),
        created_utc: datetime!(2026-01-01 00:00 UTC),
    }
}

/// Two cinemas, a 5x8 auditorium (`aud-1`) and a 2x2 one (`aud-2`), and
/// screenings:
///
/// - `evt-1`: movie-1 in aud-1, 19:30 on 2 March
/// - `evt-2`: movie-1 in aud-2, 21:00 on 2 March
/// - `evt-3`: movie-2 in aud-3 at cinema-2, 18:00 on 3 March
/// - `evt-orphan`: references a venue that does not exist
pub fn create_seeded_store() -> Arc<CatalogStore> {
    create_seeded_store_with(&[])
}

/// The seeded store with `extra` screenings appended.
pub fn create_seeded_store_with(extra: &[Event]) -> Arc<CatalogStore> {
    let mut late: Event = create_test_event("evt-2", "movie-1", "aud-2");
    late.start_utc = datetime!(2026-03-02 21:00 UTC);
    let mut other: Event = create_test_event("evt-3", "movie-2", "aud-3");
    other.start_utc = datetime!(2026-03-03 18:00 UTC);

    let backend: InMemoryBackend = InMemoryBackend::new()
        .with_records(
            EntityKind::Movies,
            &[
                create_test_movie("movie-1", "The Long Night"),
                create_test_movie("movie-2", "Paper Boats"),
            ],
        )
        .unwrap()
        .with_records(
            EntityKind::Cinemas,
            &[
                Cinema {
                    id: String::from("cinema-1"),
                    name: String::from("Harbourside"),
                    suburb: String::from("Docklands"),
                    state: String::from("VIC"),
                },
                Cinema {
                    id: String::from("cinema-2"),
                    name: String::from("Riverbank"),
                    suburb: String::from("Southbank"),
                    state: String::from("QLD"),
                },
            ],
        )
        .unwrap()
        .with_records(
            EntityKind::Auditoriums,
            &[
                Venue {
                    id: String::from("aud-1"),
                    cinema_id: String::from("cinema-1"),
                    name: String::from("Cinema 1"),
                    row_count: 5,
                    column_count: 8,
                    premium_row_cutoff: 2,
                },
                Venue {
                    id: String::from("aud-2"),
                    cinema_id: String::from("cinema-1"),
                    name: String::from("Cinema 2"),
                    row_count: 2,
                    column_count: 2,
                    premium_row_cutoff: 1,
                },
                Venue {
                    id: String::from("aud-3"),
                    cinema_id: String::from("cinema-2"),
                    name: String::from("Gold Lounge"),
                    row_count: 3,
                    column_count: 4,
                    premium_row_cutoff: 0,
                },
            ],
        )
        .unwrap()
        .with_records(
            EntityKind::Screenings,
            &[
                create_test_event("evt-1", "movie-1", "aud-1"),
                late,
                other,
                create_test_event("evt-orphan", "movie-2", "aud-9"),
            ]
            .into_iter()
            .chain(extra.iter().cloned())
            .collect::<Vec<Event>>(),
        )
        .unwrap()
        .with_records(
            EntityKind::TicketTypes,
            &[
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
            ],
        )
        .unwrap()
        .with_records(
            EntityKind::Users,
            &[create_test_customer("user-1", "jo@example.com", "Jo")],
        )
        .unwrap();

    Arc::new(CatalogStore::open(Arc::new(backend)).unwrap())
}

pub fn create_test_services() -> Services {
    Services::from_store(create_seeded_store())
}

pub fn selections(seats: &[(&str, &str)]) -> Vec<SeatSelection> {
    seats
        .iter()
        .map(|(seat, ticket)| SeatSelection::new(seat, ticket))
        .collect()
}

pub fn create_quote_request(event_id: &str, seats: &[(&str, &str)]) -> QuoteRequest {
    QuoteRequest {
        event_id: event_id.to_string(),
        seats: selections(seats),
        promo_code: None,
    }
}

pub fn create_confirm_request(event_id: &str, email: &str, seats: &[(&str, &str)]) -> ConfirmRequest {
    ConfirmRequest {
        event_id: event_id.to_string(),
        customer: CustomerInfo {
            name: String::from("Jo Citizen"),
            email: email.to_string(),
            phone: String::new(),
        },
        seats: selections(seats),
        promo_code: None,
    }
}

/// Records every message instead of delivering it.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn send_to_customer(&self, email: &str, text: &str) -> Result<(), NotificationError> {
        self.sent
            .lock()
            .unwrap()
            .push((email.to_string(), text.to_string()));
        Ok(())
    }
}

/// Fails every delivery.
#[derive(Debug, Default)]
pub struct FailingNotifier;

impl Notifier for FailingNotifier {
    fn send_to_customer(&self, _email: &str, _text: &str) -> Result<(), NotificationError> {
        Err(NotificationError::Delivery(String::from("mail server unavailable")))
    }
}
