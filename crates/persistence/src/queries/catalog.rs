// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::data_models::{EventSnapshot, ScreeningRecord};
use crate::{CatalogStore, PersistenceError};
use cinebook_domain::{Cinema, Event, Movie, TicketProduct, Venue};

impl CatalogStore {
    /// Lists all movies in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog lock is poisoned.
    pub fn list_movies(&self) -> Result<Vec<Movie>, PersistenceError> {
        Ok(self.read_catalog()?.movies.clone())
    }

    /// Finds a movie by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog lock is poisoned.
    pub fn find_movie(&self, movie_id: &str) -> Result<Option<Movie>, PersistenceError> {
        Ok(self.read_catalog()?.movie(movie_id).cloned())
    }

    /// Lists all cinemas in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog lock is poisoned.
    pub fn list_cinemas(&self) -> Result<Vec<Cinema>, PersistenceError> {
        Ok(self.read_catalog()?.cinemas.clone())
    }

    /// Finds a cinema by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog lock is poisoned.
    pub fn find_cinema(&self, cinema_id: &str) -> Result<Option<Cinema>, PersistenceError> {
        Ok(self.read_catalog()?.cinema(cinema_id).cloned())
    }

    /// Finds a venue by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog lock is poisoned.
    pub fn find_venue(&self, venue_id: &str) -> Result<Option<Venue>, PersistenceError> {
        Ok(self.read_catalog()?.venue(venue_id).cloned())
    }

    /// Finds an event by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog lock is poisoned.
    pub fn find_event(&self, event_id: &str) -> Result<Option<Event>, PersistenceError> {
        Ok(self.read_catalog()?.event(event_id).cloned())
    }

    /// Lists all events in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog lock is poisoned.
    pub fn list_events(&self) -> Result<Vec<Event>, PersistenceError> {
        Ok(self.read_catalog()?.events.clone())
    }

    /// Lists all ticket types in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog lock is poisoned.
    pub fn list_ticket_types(&self) -> Result<Vec<TicketProduct>, PersistenceError> {
        Ok(self.read_catalog()?.ticket_types.clone())
    }

    /// Reads everything a booking transition needs for one event.
    ///
    /// Catalog, ledger and deals are read under simultaneous read locks so
    /// the snapshot is consistent. Returns `None` if the event is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if a lock is poisoned.
    pub fn event_snapshot(&self, event_id: &str) -> Result<Option<EventSnapshot>, PersistenceError> {
        let catalog = self.read_catalog()?;
        let ledger = self.read_ledger()?;
        let deals = self.read_deals()?;

        let Some(event) = catalog.event(event_id) else {
            return Ok(None);
        };

        Ok(Some(EventSnapshot {
            event: event.clone(),
            venue: catalog.venue(&event.venue_id).cloned(),
            booked_seats: ledger.booked_seats(event_id),
            ticket_products: catalog.ticket_types.clone(),
            deals: deals.clone(),
        }))
    }

    /// Joins every event matching `filter` with its venue, cinema and movie.
    ///
    /// Results are ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog lock is poisoned.
    pub fn screening_records<F>(&self, filter: F) -> Result<Vec<ScreeningRecord>, PersistenceError>
    where
        F: Fn(&Event, Option<&Venue>) -> bool,
    {
        let catalog = self.read_catalog()?;

        let mut records: Vec<ScreeningRecord> = catalog
            .events
            .iter()
            .filter_map(|event| {
                let venue: Option<&Venue> = catalog.venue(&event.venue_id);
                if !filter(event, venue) {
                    return None;
                }
                Some(ScreeningRecord {
                    event: event.clone(),
                    venue: venue.cloned(),
                    cinema: venue.and_then(|venue| catalog.cinema(&venue.cinema_id).cloned()),
                    movie: catalog.movie(&event.movie_id).cloned(),
                })
            })
            .collect();

        records.sort_by_key(|record| record.event.start_utc);
        Ok(records)
    }
}
