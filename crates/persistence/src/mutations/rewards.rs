// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::EntityKind;
use crate::collections::normalize_reward_code;
use crate::{CatalogStore, PersistenceError, to_values};
use cinebook_domain::{Reward, generate_reward_code};
use serde_json::Value;
use time::OffsetDateTime;
use tracing::{debug, warn};

/// Draws allowed before reward issuance gives up on finding a free code.
pub const MAX_REWARD_CODE_ATTEMPTS: usize = 16;

impl CatalogStore {
    /// Issues a reward with a random code.
    ///
    /// # Errors
    ///
    /// Returns an error if no free code is found or the backend write fails.
    pub fn issue_reward(
        &self,
        customer_email: &str,
        issued_at: OffsetDateTime,
    ) -> Result<Reward, PersistenceError> {
        self.issue_reward_with(customer_email, issued_at, generate_reward_code)
    }

    /// Issues a reward with a code drawn from `generate`.
    ///
    /// Codes that collide with an outstanding reward are re-drawn, up to
    /// [`MAX_REWARD_CODE_ATTEMPTS`] draws in total.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Every draw collides with an outstanding reward
    /// - The backend write fails
    pub fn issue_reward_with<G>(
        &self,
        customer_email: &str,
        issued_at: OffsetDateTime,
        mut generate: G,
    ) -> Result<Reward, PersistenceError>
    where
        G: FnMut() -> String,
    {
        let mut rewards = self.write_rewards()?;

        for attempt in 1..=MAX_REWARD_CODE_ATTEMPTS {
            let code: String = normalize_reward_code(&generate());
            if rewards.iter().any(|reward| reward.reward_code == code) {
                warn!(attempt, "Reward code collision, drawing again");
                continue;
            }

            let reward: Reward = Reward {
                reward_code: code,
                customer_email: customer_email.trim().to_string(),
                issued_at,
            };
            let record: Value = serde_json::to_value(&reward)?;
            self.backend.append_one(EntityKind::Rewards, record)?;
            rewards.push(reward.clone());
            debug!(customer_email = %reward.customer_email, "Reward issued");
            return Ok(reward);
        }

        Err(PersistenceError::RewardCodeExhausted {
            attempts: MAX_REWARD_CODE_ATTEMPTS,
        })
    }

    /// Removes and returns the reward with a code, if any.
    ///
    /// The lookup and removal happen under one write lock, so a code is
    /// handed out at most once even under concurrent redemption.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn take_reward(&self, code: &str) -> Result<Option<Reward>, PersistenceError> {
        let code: String = normalize_reward_code(code);
        let mut rewards = self.write_rewards()?;
        let Some(index) = rewards.iter().position(|reward| reward.reward_code == code) else {
            return Ok(None);
        };

        let mut remaining: Vec<Reward> = rewards.clone();
        let taken: Reward = remaining.remove(index);
        self.backend
            .replace_all(EntityKind::Rewards, to_values(&remaining)?)?;
        *rewards = remaining;
        Ok(Some(taken))
    }
}
