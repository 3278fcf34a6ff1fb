// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod codes;
mod error;
mod quote;
mod seat;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use codes::{
    REFERENCE_PREFIX, REWARD_CODE_ALPHABET, REWARD_CODE_LENGTH, generate_reference_code,
    generate_reward_code, new_entity_id, reference_code_from, reward_code_from,
};
pub use error::DomainError;
pub use quote::{OrderQuote, OrderQuoteLine};
pub use seat::{SeatClass, SeatLabel, SeatMap, SeatState, classify_seat, is_permanently_blocked};
pub use types::{
    Booking, BookingLine, Cinema, Customer, CustomerInfo, Deal, Event, Message, Movie, Reward,
    SeatSelection, TicketCategory, TicketProduct, Venue, VenueClass,
};
pub use validation::{
    validate_customer_name, validate_deal_discount, validate_selection_count,
    validate_unique_seats, validate_venue,
};
