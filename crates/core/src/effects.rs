// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinebook_domain::{Booking, Customer};

/// Every Nth booking by a customer earns a reward.
pub const REWARD_CADENCE: usize = 3;

/// Work to run once a booking is durable.
///
/// Effects never feed back into the booking. A failed effect is logged by
/// whoever runs it and otherwise ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostCommitEffect {
    /// Send the booking confirmation to a known customer.
    SendConfirmation {
        email: String,
        display_name: String,
        reference_code: String,
    },
    /// Mint a reward code and send it to the customer.
    IssueReward { email: String, display_name: String },
    /// Consume a reward code supplied as a promo code, if it exists.
    RedeemReward { code: String },
}

impl PostCommitEffect {
    /// Short name used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SendConfirmation { .. } => "send_confirmation",
            Self::IssueReward { .. } => "issue_reward",
            Self::RedeemReward { .. } => "redeem_reward",
        }
    }
}

/// Returns whether a customer's booking count earns a reward.
///
/// `booking_count` includes the booking just committed.
#[must_use]
pub const fn is_eligible_for_reward(booking_count: usize) -> bool {
    booking_count > 0 && booking_count % REWARD_CADENCE == 0
}

/// Plans the effects of a committed booking.
///
/// Confirmation and reward effects are only planned when the booking's
/// e-mail belongs to a known customer. A promo code is always scheduled for
/// redemption; the store decides whether it matches an outstanding reward.
///
/// # Arguments
///
/// * `booking` - The booking that was just appended
/// * `customer` - The registered customer matching the booking's e-mail
/// * `customer_booking_count` - Bookings for that e-mail, including this one
/// * `promo_code` - The trimmed promo code from the request
#[must_use]
pub fn plan_post_commit_effects(
    booking: &Booking,
    customer: Option<&Customer>,
    customer_booking_count: usize,
    promo_code: Option<&str>,
) -> Vec<PostCommitEffect> {
    let mut effects: Vec<PostCommitEffect> = Vec::new();

    if let Some(customer) = customer {
        effects.push(PostCommitEffect::SendConfirmation {
            email: customer.email.clone(),
            display_name: customer.display_name.clone(),
            reference_code: booking.reference_code.clone(),
        });

        if is_eligible_for_reward(customer_booking_count) {
            effects.push(PostCommitEffect::IssueReward {
                email: customer.email.clone(),
                display_name: customer.display_name.clone(),
            });
        }
    }

    if let Some(code) = promo_code {
        effects.push(PostCommitEffect::RedeemReward {
            code: code.to_string(),
        });
    }

    effects
}

/// Text of the booking confirmation message.
#[must_use]
pub fn confirmation_message(display_name: &str, reference_code: &str) -> String {
    format!(
        "Dear {display_name}, your booking with reference {reference_code} has been confirmed."
    )
}

/// Text of the reward message.
#[must_use]
pub fn reward_message(display_name: &str, reward_code: &str) -> String {
    format!(
        "Congratulations {display_name}! You are now eligible for a reward. \
         Please use this code to get 50% off: {reward_code}"
    )
}
