// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinebook_domain::{DomainError, SeatState};

/// Errors that can occur while deriving seat maps, pricing or booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A referenced event, venue or ticket type does not exist.
    NotFound {
        /// The kind of resource, e.g. `"Event"`.
        resource: &'static str,
        /// The identifier that was looked up.
        id: String,
    },
    /// The request is malformed or violates a domain rule.
    Validation(DomainError),
    /// A selected seat is not available for sale.
    SeatUnavailable {
        /// The seat label.
        seat: String,
        /// The state that made it unavailable.
        state: SeatState,
    },
    /// An internal invariant was broken.
    Internal(String),
}

impl CoreError {
    /// Shorthand for a missing event.
    #[must_use]
    pub fn event_not_found(id: &str) -> Self {
        Self::NotFound {
            resource: "Event",
            id: id.to_string(),
        }
    }

    /// Shorthand for a missing venue.
    #[must_use]
    pub fn venue_not_found(id: &str) -> Self {
        Self::NotFound {
            resource: "Venue",
            id: id.to_string(),
        }
    }

    /// Shorthand for a missing ticket type.
    #[must_use]
    pub fn ticket_type_not_found(id: &str) -> Self {
        Self::NotFound {
            resource: "Ticket type",
            id: id.to_string(),
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { resource, id } => write!(f, "{resource} '{id}' not found"),
            Self::Validation(err) => write!(f, "Validation failed: {err}"),
            Self::SeatUnavailable { seat, state } => {
                write!(f, "Seat {seat} is {state}")
            }
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err)
    }
}
