// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod seat;
mod types;

use crate::Venue;

pub fn create_test_venue(row_count: u8, column_count: u16, premium_row_cutoff: u8) -> Venue {
    Venue {
        id: String::from("aud-1"),
        cinema_id: String::from("cinema-1"),
        name: String::from("Auditorium 1"),
        row_count,
        column_count,
        premium_row_cutoff,
    }
}
