// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::EntityKind;
use crate::{CatalogStore, PersistenceError};
use cinebook_domain::Booking;
use serde_json::Value;
use tracing::debug;

impl CatalogStore {
    /// Appends a booking to the ledger.
    ///
    /// This is the durability point of a sale. The booking is refused if any
    /// of its seats is already sold for the event, so the ledger never holds
    /// two bookings that share a seat.
    ///
    /// # Arguments
    ///
    /// * `booking` - The booking to append
    ///
    /// # Returns
    ///
    /// The number of bookings made with the booking's e-mail address,
    /// including this one. Zero when the e-mail is blank.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A seat is already booked for the event
    /// - The backend write fails
    pub fn append_booking(&self, booking: Booking) -> Result<usize, PersistenceError> {
        let mut ledger = self.write_ledger()?;

        if let Some(seat) = ledger.first_conflict(&booking) {
            return Err(PersistenceError::SeatAlreadyBooked {
                event_id: booking.event_id.clone(),
                seat: seat.value().to_string(),
            });
        }

        let record: Value = serde_json::to_value(&booking)?;
        self.backend.append_one(EntityKind::Bookings, record)?;

        debug!(
            booking_id = %booking.id,
            event_id = %booking.event_id,
            reference_code = %booking.reference_code,
            seats = booking.lines.len(),
            "Booking appended to ledger"
        );

        let email: String = booking.customer_email.clone();
        ledger.record(booking);
        Ok(ledger.customer_booking_count(&email))
    }
}
