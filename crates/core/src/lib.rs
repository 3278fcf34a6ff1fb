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

mod apply;
mod command;
mod effects;
mod error;
mod pricing;
mod seat_map;
mod state;

#[cfg(test)]
mod tests;

pub use apply::{prepare_booking, preview, validate_selections};
pub use command::BookingRequest;
pub use effects::{
    PostCommitEffect, REWARD_CADENCE, confirmation_message, is_eligible_for_reward,
    plan_post_commit_effects, reward_message,
};
pub use error::CoreError;
pub use pricing::{
    ACCESSIBLE_SEAT_DISCOUNT, LARGE_FORMAT_SURCHARGE, PREMIUM_SEAT_SURCHARGE, active_deal_for,
    price_selections, seat_discount, seat_unit_price,
};
pub use seat_map::derive_seat_map;
pub use state::{BookingContext, BookingStage, Confirmation};
