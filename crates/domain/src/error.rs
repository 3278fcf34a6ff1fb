// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The seat label does not exist in the venue grid.
    UnknownSeat {
        /// The requested seat label.
        seat: String,
    },
    /// The same seat was selected more than once in one request.
    DuplicateSeat {
        /// The repeated seat label.
        seat: String,
    },
    /// A seat selection did not name a ticket type.
    MissingTicketType {
        /// The seat the selection refers to.
        seat: String,
    },
    /// A seat selection named a ticket type that does not exist.
    UnknownTicketType {
        /// The seat the selection refers to.
        seat: String,
        /// The unrecognised ticket type identifier.
        ticket_type_id: String,
    },
    /// A checkout request contained no seats.
    EmptySelection,
    /// Customer name is empty or invalid.
    InvalidCustomerName(String),
    /// A deal discount is outside the 0-100 percent range.
    InvalidDiscount {
        /// The rejected discount percentage.
        discount: u8,
    },
    /// Venue geometry cannot produce a seat grid.
    InvalidVenueGeometry {
        /// The venue identifier.
        venue_id: String,
        /// Why the geometry was rejected.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSeat { seat } => write!(f, "Seat {seat} does not exist"),
            Self::DuplicateSeat { seat } => {
                write!(f, "Seat {seat} was selected more than once")
            }
            Self::MissingTicketType { seat } => {
                write!(f, "Seat {seat} requires a ticket type")
            }
            Self::UnknownTicketType {
                seat,
                ticket_type_id,
            } => {
                write!(
                    f,
                    "Ticket type '{ticket_type_id}' for seat {seat} not recognised"
                )
            }
            Self::EmptySelection => write!(f, "At least one seat must be selected"),
            Self::InvalidCustomerName(msg) => write!(f, "Invalid customer name: {msg}"),
            Self::InvalidDiscount { discount } => {
                write!(
                    f,
                    "Invalid discount: {discount}. Must be between 0 and 100 percent"
                )
            }
            Self::InvalidVenueGeometry { venue_id, reason } => {
                write!(f, "Venue '{venue_id}' has invalid geometry: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
