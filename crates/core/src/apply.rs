// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::BookingRequest;
use crate::error::CoreError;
use crate::pricing::price_selections;
use crate::seat_map::derive_seat_map;
use crate::state::BookingContext;
use cinebook_domain::{
    Booking, BookingLine, DomainError, OrderQuote, OrderQuoteLine, SeatLabel, SeatMap, SeatSelection,
    SeatState, new_entity_id, validate_customer_name, validate_selection_count,
    validate_unique_seats,
};
use time::OffsetDateTime;

/// Validates seat selections against the event's current availability.
///
/// Each selection is checked in order: the seat must exist in the venue
/// grid, must be neither booked nor blocked, and must carry a known ticket
/// type. The first failure is returned and nothing else is inspected.
///
/// # Errors
///
/// Returns an error if:
/// - A seat is selected more than once
/// - A seat is not in the venue grid
/// - A seat is already booked or permanently blocked
/// - A ticket type is blank or unknown
pub fn validate_selections(
    context: &BookingContext<'_>,
    selections: &[SeatSelection],
) -> Result<(), CoreError> {
    validate_unique_seats(selections)?;

    let seat_map: SeatMap = derive_seat_map(context.event, context.venue, context.booked_seats)?;

    for selection in selections {
        let label: SeatLabel = selection.label();
        let state: SeatState = seat_map.get(&label).ok_or_else(|| DomainError::UnknownSeat {
            seat: selection.seat_label.trim().to_string(),
        })?;

        if state != SeatState::Available {
            return Err(CoreError::SeatUnavailable {
                seat: label.value().to_string(),
                state,
            });
        }

        let ticket_type_id: &str = selection.ticket_type();
        if ticket_type_id.is_empty() {
            return Err(DomainError::MissingTicketType {
                seat: label.value().to_string(),
            }
            .into());
        }

        if context.ticket_product(ticket_type_id).is_none() {
            return Err(DomainError::UnknownTicketType {
                seat: label.value().to_string(),
                ticket_type_id: ticket_type_id.to_string(),
            }
            .into());
        }
    }

    Ok(())
}

/// Validates selections and prices them without committing anything.
///
/// # Errors
///
/// Returns an error if validation fails or a ticket type cannot be priced.
pub fn preview(
    context: &BookingContext<'_>,
    selections: &[SeatSelection],
    now: OffsetDateTime,
) -> Result<OrderQuote, CoreError> {
    validate_selections(context, selections)?;
    price_selections(context, selections, now)
}

/// Turns a checkout request into the booking that should be appended.
///
/// The caller must hold the event's exclusive lock for the lifetime of
/// `context` and until the returned booking is appended. Prices are always
/// recomputed here; nothing the caller quoted earlier is trusted.
///
/// # Arguments
///
/// * `context` - Snapshot of the event, venue, booked seats, ticket types and deals
/// * `request` - The checkout request
/// * `reference_code` - The reference to stamp on the booking
/// * `created_at` - Commit instant; also the instant deals are evaluated at
///
/// # Errors
///
/// Returns an error if:
/// - The customer name is blank or no seats are selected
/// - Any selection fails availability validation
/// - A requested seat has no matching quote line
pub fn prepare_booking(
    context: &BookingContext<'_>,
    request: &BookingRequest,
    reference_code: &str,
    created_at: OffsetDateTime,
) -> Result<Booking, CoreError> {
    if request.event_id != context.event.id {
        return Err(CoreError::Internal(format!(
            "request for event '{}' applied to context of event '{}'",
            request.event_id, context.event.id
        )));
    }

    validate_customer_name(&request.customer.name)?;
    validate_selection_count(&request.seats)?;
    validate_selections(context, &request.seats)?;

    let quote: OrderQuote = price_selections(context, &request.seats, created_at)?;

    let mut lines: Vec<BookingLine> = Vec::with_capacity(request.seats.len());
    for selection in &request.seats {
        let label: SeatLabel = selection.label();
        let quote_line: &OrderQuoteLine = quote.line_for(&label).ok_or_else(|| {
            CoreError::Internal(format!("seat {label} has no matching quote line"))
        })?;
        lines.push(BookingLine {
            seat_label: label,
            ticket_type_id: quote_line.ticket_type_id.clone(),
            unit_price: quote_line.unit_price,
        });
    }

    Ok(Booking {
        id: new_entity_id(),
        event_id: context.event.id.clone(),
        reference_code: reference_code.to_string(),
        customer_name: request.customer.name.trim().to_string(),
        customer_email: request.customer.email.trim().to_string(),
        customer_phone: request.customer.phone.trim().to_string(),
        created_at,
        subtotal: quote.subtotal,
        discount: quote.discount,
        total: quote.total,
        lines,
    })
}
