// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::seat::SeatLabel;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One priced seat of a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderQuoteLine {
    /// Display text, e.g. `Adult - Seat A1`.
    pub description: String,
    pub seat_label: SeatLabel,
    pub ticket_type_id: String,
    pub quantity: u32,
    /// Price after seat and venue adjustments, rounded to cents.
    pub unit_price: Decimal,
    /// Deal discount applied to this seat.
    pub discount: Decimal,
}

impl OrderQuoteLine {
    /// Returns `unit_price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// A priced, non-persisted offer for a set of seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderQuote {
    pub event_id: String,
    pub lines: Vec<OrderQuoteLine>,
    pub subtotal: Decimal,
    pub discount: Decimal,
    /// Always `subtotal - discount`.
    pub total: Decimal,
}

impl OrderQuote {
    /// Creates a quote with no lines and zero totals.
    #[must_use]
    pub fn empty(event_id: &str) -> Self {
        Self {
            event_id: event_id.to_string(),
            lines: Vec::new(),
            subtotal: Decimal::ZERO,
            discount: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    /// Creates a quote whose totals are summed from its lines.
    #[must_use]
    pub fn from_lines(event_id: &str, lines: Vec<OrderQuoteLine>) -> Self {
        let subtotal: Decimal = lines.iter().map(OrderQuoteLine::line_total).sum();
        let discount: Decimal = lines.iter().map(|line| line.discount).sum();
        Self {
            event_id: event_id.to_string(),
            lines,
            subtotal,
            discount,
            total: subtotal - discount,
        }
    }

    /// Finds the line for a seat.
    #[must_use]
    pub fn line_for(&self, label: &SeatLabel) -> Option<&OrderQuoteLine> {
        self.lines.iter().find(|line| &line.seat_label == label)
    }
}
