// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use cinebook::BookingRequest;
use cinebook_domain::{CustomerInfo, Movie, SeatSelection, VenueClass};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// API request to price a set of seats without booking them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The screening the seats belong to.
    pub event_id: String,
    /// The seats and ticket types to price.
    #[serde(default)]
    pub seats: Vec<SeatSelection>,
    /// Accepted for symmetry with confirmation; does not change the price.
    #[serde(default)]
    pub promo_code: Option<String>,
}

/// API request to book a set of seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmRequest {
    /// The screening the seats belong to.
    pub event_id: String,
    /// Contact details of the purchaser.
    pub customer: CustomerInfo,
    /// The seats and ticket types to book.
    #[serde(default)]
    pub seats: Vec<SeatSelection>,
    /// A reward code to redeem once the booking commits.
    #[serde(default)]
    pub promo_code: Option<String>,
}

impl From<ConfirmRequest> for BookingRequest {
    fn from(request: ConfirmRequest) -> Self {
        Self {
            event_id: request.event_id,
            customer: request.customer,
            seats: request.seats,
            promo_code: request.promo_code,
        }
    }
}

/// A screening as listed to customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningSummary {
    pub screening_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_utc: OffsetDateTime,
    pub cinema_id: String,
    pub cinema_name: String,
    pub cinema_state: String,
    pub auditorium_name: String,
    pub base_price: Decimal,
    pub class: VenueClass,
    /// The movie being shown, when it is still in the catalog.
    pub movie: Option<Movie>,
}

/// API request to create a deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddDealRequest {
    pub movie_id: String,
    /// Discount percentage, 0 to 100.
    pub discount: u8,
    #[serde(with = "time::serde::rfc3339")]
    pub expiry_date: OffsetDateTime,
}

/// API request to update a deal in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDealRequest {
    pub id: String,
    pub movie_id: String,
    pub discount: u8,
    #[serde(with = "time::serde::rfc3339")]
    pub expiry_date: OffsetDateTime,
}

/// API request to remove a deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveDealRequest {
    pub id: String,
}

/// API response for a deal mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealMutationResponse {
    /// Whether the store changed.
    pub success: bool,
    /// A human-readable outcome.
    pub message: String,
}

impl DealMutationResponse {
    /// Builds a response from a store result.
    #[must_use]
    pub fn from_outcome(success: bool, applied: &str, refused: &str) -> Self {
        Self {
            success,
            message: String::from(if success { applied } else { refused }),
        }
    }
}
