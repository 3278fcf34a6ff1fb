// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use cinebook_domain::{
    Event, SeatLabel, SeatMap, SeatState, Venue, is_permanently_blocked, validate_venue,
};
use std::collections::{BTreeMap, HashSet};

/// Derives the full seat grid of an event and each seat's current state.
///
/// Accessible column-1 seats are `Blocked` regardless of bookings. Every
/// other seat is `Booked` if its label is in `booked_seats`, else
/// `Available`. The result depends only on its inputs.
///
/// # Errors
///
/// Returns an error if:
/// - `venue` is not the event's venue
/// - The venue geometry cannot produce a grid
pub fn derive_seat_map(
    event: &Event,
    venue: &Venue,
    booked_seats: &HashSet<SeatLabel>,
) -> Result<SeatMap, CoreError> {
    if venue.id != event.venue_id {
        return Err(CoreError::venue_not_found(&event.venue_id));
    }

    validate_venue(venue).map_err(|err| CoreError::Internal(err.to_string()))?;

    let mut seats: BTreeMap<SeatLabel, SeatState> = BTreeMap::new();
    for row_index in 0..venue.row_count {
        for column in 1..=venue.column_count {
            let label: SeatLabel = SeatLabel::from_position(row_index, column);
            let state: SeatState = if is_permanently_blocked(venue, &label) {
                SeatState::Blocked
            } else if booked_seats.contains(&label) {
                SeatState::Booked
            } else {
                SeatState::Available
            };
            seats.insert(label, state);
        }
    }

    Ok(SeatMap {
        event_id: event.id.clone(),
        rows: venue.row_count,
        columns: venue.column_count,
        seats,
    })
}
