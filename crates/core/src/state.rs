// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::effects::PostCommitEffect;
use cinebook_domain::{Booking, Deal, Event, SeatLabel, TicketProduct, Venue};
use std::collections::HashSet;

/// Stages a booking request moves through.
///
/// `Requested → Validated → Priced → Committed`, or `Rejected` when
/// validation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStage {
    Requested,
    Validated,
    Priced,
    Committed,
    Rejected,
}

impl BookingStage {
    /// Converts this stage to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Requested => "requested",
            Self::Validated => "validated",
            Self::Priced => "priced",
            Self::Committed => "committed",
            Self::Rejected => "rejected",
        }
    }

    /// Checks if a transition from this stage to another is valid.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Requested, Self::Validated | Self::Rejected)
                | (Self::Validated, Self::Priced)
                | (Self::Priced, Self::Committed)
        )
    }
}

impl std::fmt::Display for BookingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything a booking transition reads, scoped to a single event.
///
/// The context is a snapshot: callers that intend to commit must hold the
/// event's exclusive lock from the moment `booked_seats` is read until the
/// resulting booking has been appended.
#[derive(Debug, Clone, Copy)]
pub struct BookingContext<'a> {
    /// The event being booked.
    pub event: &'a Event,
    /// The event's venue.
    pub venue: &'a Venue,
    /// Seats already sold for the event.
    pub booked_seats: &'a HashSet<SeatLabel>,
    /// All known ticket types.
    pub ticket_products: &'a [TicketProduct],
    /// All deals, in store order.
    pub deals: &'a [Deal],
}

impl<'a> BookingContext<'a> {
    /// Looks up a ticket type by identifier.
    #[must_use]
    pub fn ticket_product(&self, id: &str) -> Option<&'a TicketProduct> {
        self.ticket_products.iter().find(|product| product.id == id)
    }
}

/// The result of a committed booking.
///
/// Effects are returned as data so that running them can never block or
/// undo the commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    /// The booking as appended to the ledger.
    pub booking: Booking,
    /// Side effects to run after the commit.
    pub effects: Vec<PostCommitEffect>,
}
