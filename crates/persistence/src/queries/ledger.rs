// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CatalogStore, PersistenceError};
use cinebook_domain::{Booking, SeatLabel};
use std::collections::HashSet;

impl CatalogStore {
    /// Returns the seats sold so far for an event.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger lock is poisoned.
    pub fn booked_seats(&self, event_id: &str) -> Result<HashSet<SeatLabel>, PersistenceError> {
        Ok(self.read_ledger()?.booked_seats(event_id))
    }

    /// Lists every booking for an event in commit order.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger lock is poisoned.
    pub fn bookings_for_event(&self, event_id: &str) -> Result<Vec<Booking>, PersistenceError> {
        Ok(self
            .read_ledger()?
            .bookings
            .iter()
            .filter(|booking| booking.event_id == event_id)
            .cloned()
            .collect())
    }

    /// Finds a booking by reference code, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger lock is poisoned.
    pub fn find_booking_by_reference(
        &self,
        reference_code: &str,
    ) -> Result<Option<Booking>, PersistenceError> {
        let reference_code: &str = reference_code.trim();
        Ok(self
            .read_ledger()?
            .bookings
            .iter()
            .find(|booking| booking.reference_code.eq_ignore_ascii_case(reference_code))
            .cloned())
    }

    /// Lists a customer's bookings, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger lock is poisoned.
    pub fn bookings_for_customer(&self, email: &str) -> Result<Vec<Booking>, PersistenceError> {
        let mut bookings: Vec<Booking> = self
            .read_ledger()?
            .bookings
            .iter()
            .filter(|booking| booking.belongs_to(email))
            .cloned()
            .collect();
        // Ledger order is commit order; reverse before the stable sort so
        // equal timestamps also come out newest first.
        bookings.reverse();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings)
    }

    /// Counts the bookings made with an e-mail address.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger lock is poisoned.
    pub fn customer_booking_count(&self, email: &str) -> Result<usize, PersistenceError> {
        Ok(self.read_ledger()?.customer_booking_count(email))
    }

    /// Returns the total number of bookings in the ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger lock is poisoned.
    pub fn booking_count(&self) -> Result<usize, PersistenceError> {
        Ok(self.read_ledger()?.bookings.len())
    }
}
