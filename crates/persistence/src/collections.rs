// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory collections owned by the `CatalogStore`.

use cinebook_domain::{Booking, Cinema, Event, Movie, SeatLabel, TicketProduct, Venue};
use std::collections::{HashMap, HashSet};

/// Reference data. Only the movie list is ever replaced at runtime.
#[derive(Debug, Default)]
pub struct Catalog {
    pub movies: Vec<Movie>,
    pub cinemas: Vec<Cinema>,
    pub venues: Vec<Venue>,
    pub events: Vec<Event>,
    pub ticket_types: Vec<TicketProduct>,
}

impl Catalog {
    pub fn event(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == event_id)
    }

    pub fn venue(&self, venue_id: &str) -> Option<&Venue> {
        self.venues.iter().find(|venue| venue.id == venue_id)
    }

    pub fn cinema(&self, cinema_id: &str) -> Option<&Cinema> {
        self.cinemas.iter().find(|cinema| cinema.id == cinema_id)
    }

    pub fn movie(&self, movie_id: &str) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == movie_id)
    }
}

/// The append-only booking ledger plus its booked-seat index.
#[derive(Debug, Default)]
pub struct Ledger {
    pub bookings: Vec<Booking>,
    booked_seats: HashMap<String, HashSet<SeatLabel>>,
}

impl Ledger {
    /// Builds a ledger and its index from stored bookings.
    pub fn from_bookings(bookings: Vec<Booking>) -> Self {
        let mut ledger: Self = Self::default();
        for booking in bookings {
            ledger.record(booking);
        }
        ledger
    }

    /// Adds a booking and indexes its seats.
    pub fn record(&mut self, booking: Booking) {
        let seats: &mut HashSet<SeatLabel> =
            self.booked_seats.entry(booking.event_id.clone()).or_default();
        seats.extend(booking.seat_labels().cloned());
        self.bookings.push(booking);
    }

    /// Returns the first seat of `booking` that is already sold.
    pub fn first_conflict<'a>(&self, booking: &'a Booking) -> Option<&'a SeatLabel> {
        let taken: &HashSet<SeatLabel> = self.booked_seats.get(&booking.event_id)?;
        booking.seat_labels().find(|label| taken.contains(*label))
    }

    pub fn booked_seats(&self, event_id: &str) -> HashSet<SeatLabel> {
        self.booked_seats.get(event_id).cloned().unwrap_or_default()
    }

    pub fn customer_booking_count(&self, email: &str) -> usize {
        self.bookings
            .iter()
            .filter(|booking| booking.belongs_to(email))
            .count()
    }
}

/// Reward codes are stored uppercase.
pub fn normalize_reward_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
