// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinebook_domain::{Cinema, Deal, Event, Movie, SeatLabel, TicketProduct, Venue};
use std::collections::HashSet;

/// Everything needed to validate and price a booking for one event, read
/// under a single consistent view of the store.
#[derive(Debug, Clone)]
pub struct EventSnapshot {
    pub event: Event,
    /// `None` when the event references a venue that does not exist.
    pub venue: Option<Venue>,
    pub booked_seats: HashSet<SeatLabel>,
    pub ticket_products: Vec<TicketProduct>,
    pub deals: Vec<Deal>,
}

/// A screening joined with the places it happens and the movie it shows.
#[derive(Debug, Clone)]
pub struct ScreeningRecord {
    pub event: Event,
    pub venue: Option<Venue>,
    pub cinema: Option<Cinema>,
    pub movie: Option<Movie>,
}
