// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The Quote/Booking Orchestrator.
//!
//! Turns customer requests into seat maps, quotes and committed bookings.
//! Confirmation is the only write path and runs under the event's lock:
//!
//! 1. snapshot the event, its venue, booked seats, ticket types and deals
//! 2. validate and re-price via [`cinebook::prepare_booking`]
//! 3. append the booking to the ledger
//!
//! Post-commit effects are planned after the lock is released and handed
//! back to the caller; see [`crate::EffectDispatcher`].

use crate::collaborators::CustomerDirectory;
use crate::error::{ApiError, BookingPhase, translate_core_error, translate_domain_error};
use crate::locks::EventLocks;
use crate::request_response::{ConfirmRequest, QuoteRequest};
use cinebook::{
    BookingContext, BookingRequest, BookingStage, Confirmation, PostCommitEffect,
    derive_seat_map, plan_post_commit_effects, prepare_booking, preview,
};
use cinebook_domain::{
    Booking, Customer, OrderQuote, SeatMap, Venue, generate_reference_code,
    validate_customer_name, validate_selection_count,
};
use cinebook_persistence::{CatalogStore, EventSnapshot};
use std::sync::{Arc, Mutex, MutexGuard};
use time::OffsetDateTime;
use tracing::{debug, info};

/// Validates, prices and commits bookings.
pub struct BookingOrchestrator {
    store: Arc<CatalogStore>,
    directory: Arc<dyn CustomerDirectory>,
    locks: EventLocks,
}

impl std::fmt::Debug for BookingOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingOrchestrator")
            .field("locks", &self.locks)
            .finish_non_exhaustive()
    }
}

impl BookingOrchestrator {
    /// Creates an orchestrator over a store.
    ///
    /// # Arguments
    ///
    /// * `store` - The catalog store bookings are read from and appended to
    /// * `directory` - Identity lookup used to decide which effects to plan
    #[must_use]
    pub fn new(store: Arc<CatalogStore>, directory: Arc<dyn CustomerDirectory>) -> Self {
        Self {
            store,
            directory,
            locks: EventLocks::new(),
        }
    }

    /// Returns the store this orchestrator books against.
    #[must_use]
    pub const fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    /// Returns the per-event lock table.
    #[must_use]
    pub const fn locks(&self) -> &EventLocks {
        &self.locks
    }

    /// Derives the seat map of an event.
    ///
    /// # Errors
    ///
    /// Returns an error if the event or its venue does not exist.
    pub fn get_seat_map(&self, event_id: &str) -> Result<SeatMap, ApiError> {
        let snapshot: EventSnapshot = self.snapshot(event_id)?;
        let venue: &Venue = snapshot_venue(&snapshot)?;
        derive_seat_map(&snapshot.event, venue, &snapshot.booked_seats)
            .map_err(|err| translate_core_error(err, BookingPhase::Preview))
    }

    /// Validates a selection and prices it. Nothing is written.
    ///
    /// An empty selection is priced as an empty quote without looking the
    /// event up.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The event, its venue or a ticket type does not exist
    /// - A seat is unknown, repeated, booked or blocked
    /// - A ticket type is missing
    pub fn preview(&self, request: &QuoteRequest) -> Result<OrderQuote, ApiError> {
        if request.seats.is_empty() {
            return Ok(OrderQuote::empty(&request.event_id));
        }
        if request.promo_code.as_deref().is_some_and(|code| !code.trim().is_empty()) {
            debug!(event_id = %request.event_id, "Promo code supplied with quote; it does not change the price");
        }

        let snapshot: EventSnapshot = self.snapshot(&request.event_id)?;
        let venue: &Venue = snapshot_venue(&snapshot)?;
        let context: BookingContext<'_> = context_for(&snapshot, venue);

        preview(&context, &request.seats, OffsetDateTime::now_utc())
            .map_err(|err| translate_core_error(err, BookingPhase::Preview))
    }

    /// Commits a booking.
    ///
    /// Availability is re-validated and the price recomputed under the
    /// event's lock. The returned effects have not been run.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The event, its venue or a ticket type does not exist
    /// - The customer name is blank, no seats are selected, or a seat or
    ///   ticket type is invalid
    /// - A seat was sold or is blocked (`Conflict`)
    /// - The ledger write fails
    pub fn confirm(&self, request: ConfirmRequest) -> Result<Confirmation, ApiError> {
        let request: BookingRequest = request.into();
        let event_id: String = request.event_id.clone();
        info!(event_id = %event_id, seats = request.seats.len(), "Booking requested");
        log_stage(&event_id, BookingStage::Requested, None);

        validate_customer_name(&request.customer.name)
            .and_then(|()| validate_selection_count(&request.seats))
            .map_err(|err| {
                log_stage(&event_id, BookingStage::Rejected, Some(BookingStage::Requested));
                translate_domain_error(err)
            })?;

        if self.store.find_event(&event_id)?.is_none() {
            log_stage(&event_id, BookingStage::Rejected, Some(BookingStage::Requested));
            return Err(ApiError::not_found("Event", &event_id));
        }

        let (booking, customer_booking_count) = {
            let lock: Arc<Mutex<()>> = self.locks.lock_for(&event_id);
            let _guard: MutexGuard<'_, ()> = EventLocks::acquire(&lock);

            let snapshot: EventSnapshot = self.snapshot(&event_id)?;
            let venue: &Venue = snapshot_venue(&snapshot)?;
            let context: BookingContext<'_> = context_for(&snapshot, venue);

            let booking: Booking = prepare_booking(
                &context,
                &request,
                &generate_reference_code(),
                OffsetDateTime::now_utc(),
            )
            .map_err(|err| {
                log_stage(&event_id, BookingStage::Rejected, Some(BookingStage::Requested));
                translate_core_error(err, BookingPhase::Confirm)
            })?;
            log_stage(&event_id, BookingStage::Validated, Some(BookingStage::Requested));
            log_stage(&event_id, BookingStage::Priced, Some(BookingStage::Validated));

            let count: usize = self.store.append_booking(booking.clone())?;
            log_stage(&event_id, BookingStage::Committed, Some(BookingStage::Priced));
            (booking, count)
        };

        info!(
            event_id = %booking.event_id,
            reference_code = %booking.reference_code,
            total = %booking.total,
            "Booking committed"
        );

        let customer: Option<Customer> = self
            .directory
            .find_customer_by_contact(&booking.customer_email);
        let effects: Vec<PostCommitEffect> = plan_post_commit_effects(
            &booking,
            customer.as_ref(),
            customer_booking_count,
            request.promo_code(),
        );

        Ok(Confirmation { booking, effects })
    }

    /// Finds a booking by reference code, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if no booking has that reference.
    pub fn booking_by_reference(&self, reference_code: &str) -> Result<Booking, ApiError> {
        self.store
            .find_booking_by_reference(reference_code)?
            .ok_or_else(|| ApiError::not_found("Booking", reference_code.trim()))
    }

    /// Lists a customer's bookings, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the e-mail is blank.
    pub fn bookings_for_customer(&self, email: &str) -> Result<Vec<Booking>, ApiError> {
        if email.trim().is_empty() {
            return Err(ApiError::InvalidInput {
                field: String::from("email"),
                message: String::from("E-mail is required"),
            });
        }
        Ok(self.store.bookings_for_customer(email)?)
    }

    fn snapshot(&self, event_id: &str) -> Result<EventSnapshot, ApiError> {
        self.store
            .event_snapshot(event_id)?
            .ok_or_else(|| ApiError::not_found("Event", event_id))
    }
}

fn snapshot_venue(snapshot: &EventSnapshot) -> Result<&Venue, ApiError> {
    snapshot
        .venue
        .as_ref()
        .ok_or_else(|| ApiError::not_found("Venue", &snapshot.event.venue_id))
}

fn context_for<'a>(snapshot: &'a EventSnapshot, venue: &'a Venue) -> BookingContext<'a> {
    BookingContext {
        event: &snapshot.event,
        venue,
        booked_seats: &snapshot.booked_seats,
        ticket_products: &snapshot.ticket_products,
        deals: &snapshot.deals,
    }
}

fn log_stage(event_id: &str, stage: BookingStage, from: Option<BookingStage>) {
    debug_assert!(from.is_none_or(|from| from.can_transition_to(stage)));
    debug!(event_id, stage = %stage, "Booking stage");
}
