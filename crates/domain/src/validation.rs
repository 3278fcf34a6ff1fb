// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::seat::SeatLabel;
use crate::types::{SeatSelection, Venue};
use std::collections::HashSet;

/// Highest row count a venue may have; rows are lettered `A` to `Z`.
const MAX_ROWS: u8 = 26;

/// Validates that a venue's geometry can produce a seat grid.
///
/// # Errors
///
/// Returns an error if:
/// - The venue has no rows, or more rows than there are letters
/// - The venue has no columns
/// - The premium cutoff exceeds the row count
pub fn validate_venue(venue: &Venue) -> Result<(), DomainError> {
    if venue.row_count == 0 || venue.row_count > MAX_ROWS {
        return Err(DomainError::InvalidVenueGeometry {
            venue_id: venue.id.clone(),
            reason: format!(
                "row count must be between 1 and {MAX_ROWS}, got {}",
                venue.row_count
            ),
        });
    }

    if venue.column_count == 0 {
        return Err(DomainError::InvalidVenueGeometry {
            venue_id: venue.id.clone(),
            reason: String::from("column count must be at least 1"),
        });
    }

    if venue.premium_row_cutoff > venue.row_count {
        return Err(DomainError::InvalidVenueGeometry {
            venue_id: venue.id.clone(),
            reason: format!(
                "premium row cutoff {} exceeds row count {}",
                venue.premium_row_cutoff, venue.row_count
            ),
        });
    }

    Ok(())
}

/// Validates the customer name on a checkout request.
///
/// # Errors
///
/// Returns an error if the name is empty or only whitespace.
pub fn validate_customer_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidCustomerName(String::from(
            "Name is required",
        )));
    }
    Ok(())
}

/// Validates that a checkout request selects at least one seat.
///
/// # Errors
///
/// Returns an error if `selections` is empty.
pub fn validate_selection_count(selections: &[SeatSelection]) -> Result<(), DomainError> {
    if selections.is_empty() {
        return Err(DomainError::EmptySelection);
    }
    Ok(())
}

/// Validates that no seat appears twice in one selection list.
///
/// Labels are compared case-insensitively.
///
/// # Errors
///
/// Returns an error naming the first repeated seat.
pub fn validate_unique_seats(selections: &[SeatSelection]) -> Result<(), DomainError> {
    let mut seen: HashSet<SeatLabel> = HashSet::with_capacity(selections.len());
    for selection in selections {
        let label: SeatLabel = selection.label();
        if !seen.insert(label.clone()) {
            return Err(DomainError::DuplicateSeat {
                seat: label.value().to_string(),
            });
        }
    }
    Ok(())
}

/// Validates a deal's discount percentage.
///
/// # Errors
///
/// Returns an error if the discount is above 100 percent.
pub const fn validate_deal_discount(discount: u8) -> Result<(), DomainError> {
    if discount > 100 {
        return Err(DomainError::InvalidDiscount { discount });
    }
    Ok(())
}
