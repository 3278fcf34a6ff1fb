// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries on the `CatalogStore`.
//!
//! ## Module Organization
//!
//! - `catalog`: movies, venues, screenings and ticket types
//! - `ledger`: bookings and booked seats
//! - `bookkeeping`: deals, rewards, messages and customers
//!
//! Every query returns owned copies; no lock outlives the call.

mod bookkeeping;
mod catalog;
mod ledger;
