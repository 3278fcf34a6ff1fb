// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinebook_domain::{CustomerInfo, SeatSelection};

/// A checkout request represents customer intent as data only.
///
/// Prices are never part of a request; they are always recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// The event the seats belong to.
    pub event_id: String,
    /// Contact details of the purchaser.
    pub customer: CustomerInfo,
    /// The seats and ticket types requested.
    pub seats: Vec<SeatSelection>,
    /// Optional reward code the customer entered.
    pub promo_code: Option<String>,
}

impl BookingRequest {
    /// Returns the promo code, or `None` if it is absent or blank.
    #[must_use]
    pub fn promo_code(&self) -> Option<&str> {
        self.promo_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}
