// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use cinebook::CoreError;
use cinebook_domain::{DomainError, SeatState};
use cinebook_persistence::PersistenceError;
use tracing::error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// None of them is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A seat was sold to someone else before the booking could commit.
    ///
    /// The caller should quote again and retry.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Shorthand for a missing resource.
    #[must_use]
    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::ResourceNotFound {
            resource_type: resource_type.to_string(),
            message: format!("{resource_type} '{id}' does not exist"),
        }
    }
}

/// Which orchestrator operation an error came from.
///
/// A seat that is no longer available is a validation failure while
/// previewing, but a conflict once the customer tries to commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingPhase {
    Preview,
    Confirm,
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::UnknownSeat { .. } | DomainError::DuplicateSeat { .. } => {
            ApiError::InvalidInput {
                field: String::from("seat_label"),
                message: err.to_string(),
            }
        }
        DomainError::MissingTicketType { .. } | DomainError::UnknownTicketType { .. } => {
            ApiError::InvalidInput {
                field: String::from("ticket_type_id"),
                message: err.to_string(),
            }
        }
        DomainError::EmptySelection => ApiError::InvalidInput {
            field: String::from("seats"),
            message: err.to_string(),
        },
        DomainError::InvalidCustomerName(msg) => ApiError::InvalidInput {
            field: String::from("customer.name"),
            message: msg,
        },
        DomainError::InvalidDiscount { .. } => ApiError::InvalidInput {
            field: String::from("discount"),
            message: err.to_string(),
        },
        DomainError::InvalidVenueGeometry { .. } => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError, phase: BookingPhase) -> ApiError {
    match err {
        CoreError::NotFound { resource, id } => ApiError::not_found(resource, &id),
        CoreError::Validation(domain_err) => translate_domain_error(domain_err),
        CoreError::SeatUnavailable { seat, state } => match phase {
            BookingPhase::Preview => ApiError::InvalidInput {
                field: String::from("seat_label"),
                message: unavailable_message(&seat, state),
            },
            BookingPhase::Confirm => ApiError::Conflict {
                message: unavailable_message(&seat, state),
            },
        },
        CoreError::Internal(msg) => {
            error!(error = %msg, "Booking invariant violated");
            ApiError::Internal {
                message: format!("Internal error: {msg}"),
            }
        }
    }
}

/// Translates a persistence error into an API error.
///
/// A seat clash caught by the ledger is a conflict. Everything else is an
/// internal failure and is logged.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::SeatAlreadyBooked { seat, .. } => ApiError::Conflict {
            message: unavailable_message(&seat, SeatState::Booked),
        },
        other => {
            error!(error = %other, "Persistence failure");
            ApiError::Internal {
                message: other.to_string(),
            }
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        translate_persistence_error(err)
    }
}

fn unavailable_message(seat: &str, state: SeatState) -> String {
    format!("Seat {seat} is no longer available ({state})")
}
