// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stateless price calculation.
//!
//! Feed it an event, its venue and seat selections; it returns a quote with
//! one line per seat. All arithmetic uses `Decimal`; unit prices are rounded
//! to cents with midpoint-away-from-zero.

use crate::error::CoreError;
use crate::state::BookingContext;
use cinebook_domain::{
    Deal, Event, OrderQuote, OrderQuoteLine, SeatClass, SeatLabel, SeatSelection, TicketProduct,
    Venue, classify_seat,
};
use rust_decimal::{Decimal, RoundingStrategy};
use time::OffsetDateTime;

/// Added to premium seats.
pub const PREMIUM_SEAT_SURCHARGE: Decimal = Decimal::from_parts(400, 0, 0, false, 2);

/// Taken off accessible seats.
pub const ACCESSIBLE_SEAT_DISCOUNT: Decimal = Decimal::from_parts(250, 0, 0, false, 2);

/// Added to every seat of a premium large format screening.
pub const LARGE_FORMAT_SURCHARGE: Decimal = Decimal::from_parts(250, 0, 0, false, 2);

const DECIMAL_PLACES: u32 = 2;

/// Computes the unit price of one seat.
///
/// Starts from the ticket price (or the event base price when the ticket
/// price is zero), adjusts for the seat class and the venue class, then
/// rounds to cents.
#[must_use]
pub fn seat_unit_price(
    event: &Event,
    venue: &Venue,
    product: &TicketProduct,
    label: &SeatLabel,
) -> Decimal {
    let mut price: Decimal = product.effective_price(event.base_price);

    price += match classify_seat(venue, label) {
        SeatClass::Premium => PREMIUM_SEAT_SURCHARGE,
        SeatClass::Accessible => -ACCESSIBLE_SEAT_DISCOUNT,
        SeatClass::Standard => Decimal::ZERO,
    };

    if event.class.is_premium_large_format() {
        price += LARGE_FORMAT_SURCHARGE;
    }

    price.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Finds the deal that applies to a movie at `now`.
///
/// Picks the first unexpired deal in store order. Deal creation keeps at
/// most one deal per movie, so in practice there is at most one candidate.
#[must_use]
pub fn active_deal_for<'a>(
    deals: &'a [Deal],
    movie_id: &str,
    now: OffsetDateTime,
) -> Option<&'a Deal> {
    deals
        .iter()
        .find(|deal| deal.movie_id == movie_id && deal.is_active_at(now))
}

/// Computes the deal discount for one seat. Not rounded.
#[must_use]
pub fn seat_discount(deal: Option<&Deal>, unit_price: Decimal) -> Decimal {
    deal.map_or(Decimal::ZERO, |deal| {
        Decimal::from(deal.discount) * unit_price / Decimal::ONE_HUNDRED
    })
}

/// Prices a set of seat selections for an event.
///
/// Lines are grouped by ticket type in order of first appearance. An empty
/// selection produces an empty quote. Seat availability is not checked
/// here; see [`crate::validate_selections`].
///
/// # Errors
///
/// Returns an error if a selection names a ticket type that does not exist.
pub fn price_selections(
    context: &BookingContext<'_>,
    selections: &[SeatSelection],
    now: OffsetDateTime,
) -> Result<OrderQuote, CoreError> {
    let event: &Event = context.event;
    if selections.is_empty() {
        return Ok(OrderQuote::empty(&event.id));
    }

    let deal: Option<&Deal> = active_deal_for(context.deals, &event.movie_id, now);

    // Group by ticket type, keeping first-appearance order of the groups.
    let mut groups: Vec<(&str, Vec<&SeatSelection>)> = Vec::new();
    for selection in selections {
        let ticket_type_id: &str = selection.ticket_type();
        match groups.iter_mut().find(|(id, _)| *id == ticket_type_id) {
            Some((_, members)) => members.push(selection),
            None => groups.push((ticket_type_id, vec![selection])),
        }
    }

    let mut lines: Vec<OrderQuoteLine> = Vec::with_capacity(selections.len());
    for (ticket_type_id, members) in groups {
        let product: &TicketProduct = context
            .ticket_product(ticket_type_id)
            .ok_or_else(|| CoreError::ticket_type_not_found(ticket_type_id))?;

        for selection in members {
            let label: SeatLabel = selection.label();
            let unit_price: Decimal = seat_unit_price(event, context.venue, product, &label);
            lines.push(OrderQuoteLine {
                description: format!("{} - Seat {}", product.name, label),
                seat_label: label,
                ticket_type_id: product.id.clone(),
                quantity: 1,
                unit_price,
                discount: seat_discount(deal, unit_price),
            });
        }
    }

    Ok(OrderQuote::from_lines(&event.id, lines))
}
