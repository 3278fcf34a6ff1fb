// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seat identity, classification and the derived seat map.
//!
//! Seats are never stored. A seat is identified by its label
//! `{row-letter}{column-number}` within a venue's grid, and its class is a
//! pure function of that position and the venue geometry.

use crate::types::Venue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Represents a seat label such as `A1` or `M14`.
///
/// Labels are normalized to uppercase so that comparisons are
/// case-insensitive everywhere a label is used as a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SeatLabel {
    /// The normalized label value.
    value: String,
}

impl SeatLabel {
    /// Creates a new `SeatLabel`, trimming whitespace and normalizing to uppercase.
    ///
    /// # Arguments
    ///
    /// * `value` - The raw label as supplied by a caller
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_uppercase(),
        }
    }

    /// Builds the label for a zero-based row index and one-based column.
    ///
    /// Rows past `Z` have no letter; callers validate geometry first.
    #[must_use]
    pub fn from_position(row_index: u8, column: u16) -> Self {
        let row_letter: char = char::from(b'A'.saturating_add(row_index));
        Self {
            value: format!("{row_letter}{column}"),
        }
    }

    /// Returns the label value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Parses the label into `(row_index, column)`.
    ///
    /// Returns `None` when the first character is not a row letter or the
    /// remainder is not a column number.
    #[must_use]
    pub fn position(&self) -> Option<(u8, u16)> {
        let mut chars = self.value.chars();
        let row_letter: char = chars.next()?;
        if !row_letter.is_ascii_uppercase() {
            return None;
        }
        let column: u16 = chars.as_str().parse().ok()?;
        let row_index: u8 = u8::try_from(row_letter).ok()? - b'A';
        Some((row_index, column))
    }
}

impl std::fmt::Display for SeatLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<String> for SeatLabel {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<SeatLabel> for String {
    fn from(label: SeatLabel) -> Self {
        label.value
    }
}

/// Positional seat class within a venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatClass {
    /// An ordinary seat.
    Standard,
    /// One of the front rows inside the venue's premium cutoff.
    Premium,
    /// Columns 1 and 2 of the last row.
    Accessible,
}

/// Sale state of a seat for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatState {
    /// The seat can be sold.
    Available,
    /// The seat appears in a committed booking.
    Booked,
    /// The seat is permanently excluded from sale.
    Blocked,
}

impl std::fmt::Display for SeatState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text: &str = match self {
            Self::Available => "available",
            Self::Booked => "booked",
            Self::Blocked => "blocked",
        };
        write!(f, "{text}")
    }
}

/// Classifies a seat by its position in the venue.
///
/// Premium rows take precedence over the accessible rule, so a venue whose
/// premium cutoff covers every row has no accessible seats. Labels that do
/// not parse are treated as standard seats.
#[must_use]
pub fn classify_seat(venue: &Venue, label: &SeatLabel) -> SeatClass {
    let Some((row_index, column)) = label.position() else {
        return SeatClass::Standard;
    };

    if row_index < venue.premium_row_cutoff {
        return SeatClass::Premium;
    }

    let last_row: u8 = venue.row_count.saturating_sub(1);
    if row_index == last_row && (column == 1 || column == 2) {
        return SeatClass::Accessible;
    }

    SeatClass::Standard
}

/// Returns whether a seat is excluded from sale regardless of bookings.
///
/// Accessible seats in column 1 are kept free for wheelchair space.
#[must_use]
pub fn is_permanently_blocked(venue: &Venue, label: &SeatLabel) -> bool {
    classify_seat(venue, label) == SeatClass::Accessible
        && label.position().is_some_and(|(_, column)| column == 1)
}

/// Snapshot of an event's seating grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap {
    /// The event this map describes.
    pub event_id: String,
    /// Number of rows in the venue.
    pub rows: u8,
    /// Number of columns in the venue.
    pub columns: u16,
    /// Every seat in the grid with its current state.
    pub seats: BTreeMap<SeatLabel, SeatState>,
}

impl SeatMap {
    /// Returns the state of a seat, or `None` if the label is not in the grid.
    #[must_use]
    pub fn get(&self, label: &SeatLabel) -> Option<SeatState> {
        self.seats.get(label).copied()
    }

    /// Returns the state of a seat, treating unknown labels as blocked.
    #[must_use]
    pub fn state(&self, label: &str) -> SeatState {
        self.get(&SeatLabel::new(label))
            .unwrap_or(SeatState::Blocked)
    }

    /// Counts the seats in a given state.
    #[must_use]
    pub fn count(&self, state: SeatState) -> usize {
        self.seats.values().filter(|s| **s == state).count()
    }

    /// Returns every label currently in the given state.
    #[must_use]
    pub fn labels_in_state(&self, state: SeatState) -> Vec<&SeatLabel> {
        self.seats
            .iter()
            .filter(|(_, s)| **s == state)
            .map(|(label, _)| label)
            .collect()
    }
}
