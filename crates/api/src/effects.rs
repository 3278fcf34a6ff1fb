// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::collaborators::{NotificationError, Notifier};
use cinebook::{PostCommitEffect, confirmation_message, reward_message};
use cinebook_domain::Reward;
use cinebook_persistence::CatalogStore;
use std::sync::Arc;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

/// Outcome counts of one dispatch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Runs post-commit effects.
///
/// Failures are logged at `warn` and counted, never returned: by the time
/// effects run the booking is already durable.
pub struct EffectDispatcher {
    store: Arc<CatalogStore>,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for EffectDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectDispatcher").finish_non_exhaustive()
    }
}

impl EffectDispatcher {
    #[must_use]
    pub fn new(store: Arc<CatalogStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Runs every effect in order, continuing past failures.
    pub fn dispatch(&self, effects: &[PostCommitEffect]) -> DispatchSummary {
        let mut summary: DispatchSummary = DispatchSummary::default();
        for effect in effects {
            match self.run(effect) {
                Ok(()) => summary.succeeded += 1,
                Err(err) => {
                    warn!(effect = effect.kind(), error = %err, "Post-commit effect failed");
                    summary.failed += 1;
                }
            }
        }
        summary
    }

    fn run(&self, effect: &PostCommitEffect) -> Result<(), NotificationError> {
        match effect {
            PostCommitEffect::SendConfirmation {
                email,
                display_name,
                reference_code,
            } => self
                .notifier
                .send_to_customer(email, &confirmation_message(display_name, reference_code)),
            PostCommitEffect::IssueReward {
                email,
                display_name,
            } => {
                let reward: Reward = self.store.issue_reward(email, OffsetDateTime::now_utc())?;
                info!(email = %email, "Reward issued");
                self.notifier
                    .send_to_customer(email, &reward_message(display_name, &reward.reward_code))
            }
            PostCommitEffect::RedeemReward { code } => {
                match self.store.take_reward(code)? {
                    Some(reward) => {
                        info!(customer_email = %reward.customer_email, "Reward redeemed");
                    }
                    None => debug!("Promo code does not match an outstanding reward"),
                }
                Ok(())
            }
        }
    }
}
