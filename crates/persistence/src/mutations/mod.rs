// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations on the `CatalogStore`.
//!
//! ## Module Organization
//!
//! - `ledger`: appending bookings
//! - `catalog`: replacing the movie list
//! - `deals`: adding, updating and removing deals
//! - `rewards`: issuing and taking reward codes
//! - `messages`: mailbox delivery
//!
//! Every mutation writes the backend first, under the collection's write
//! lock, and only then updates the in-memory collection.

mod catalog;
mod deals;
mod ledger;
mod messages;
mod rewards;

pub use rewards::MAX_REWARD_CODE_ATTEMPTS;
