// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::collections::normalize_reward_code;
use crate::{CatalogStore, PersistenceError};
use cinebook_domain::{Customer, Deal, Message, Reward};

impl CatalogStore {
    /// Lists all deals in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the deals lock is poisoned.
    pub fn list_deals(&self) -> Result<Vec<Deal>, PersistenceError> {
        Ok(self.read_deals()?.clone())
    }

    /// Lists the deals for a movie in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the deals lock is poisoned.
    pub fn deals_for_movie(&self, movie_id: &str) -> Result<Vec<Deal>, PersistenceError> {
        Ok(self
            .read_deals()?
            .iter()
            .filter(|deal| deal.movie_id == movie_id)
            .cloned()
            .collect())
    }

    /// Lists all outstanding rewards.
    ///
    /// # Errors
    ///
    /// Returns an error if the rewards lock is poisoned.
    pub fn list_rewards(&self) -> Result<Vec<Reward>, PersistenceError> {
        Ok(self.read_rewards()?.clone())
    }

    /// Finds an outstanding reward by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the rewards lock is poisoned.
    pub fn find_reward(&self, code: &str) -> Result<Option<Reward>, PersistenceError> {
        let code: String = normalize_reward_code(code);
        Ok(self
            .read_rewards()?
            .iter()
            .find(|reward| reward.reward_code == code)
            .cloned())
    }

    /// Lists a customer's messages, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the messages lock is poisoned.
    pub fn messages_for_customer(&self, user_id: &str) -> Result<Vec<Message>, PersistenceError> {
        let mut messages: Vec<Message> = self
            .read_messages()?
            .iter()
            .filter(|message| message.to_user_id == user_id)
            .cloned()
            .collect();
        messages.reverse();
        messages.sort_by(|a, b| b.sent_utc.cmp(&a.sent_utc));
        Ok(messages)
    }

    /// Finds a customer by e-mail, ignoring case. Blank addresses never match.
    ///
    /// # Errors
    ///
    /// Returns an error if the customers lock is poisoned.
    pub fn find_customer_by_email(&self, email: &str) -> Result<Option<Customer>, PersistenceError> {
        let email: &str = email.trim();
        if email.is_empty() {
            return Ok(None);
        }
        Ok(self
            .read_customers()?
            .iter()
            .find(|customer| customer.email.trim().eq_ignore_ascii_case(email))
            .cloned())
    }

    /// Finds a customer by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the customers lock is poisoned.
    pub fn find_customer(&self, user_id: &str) -> Result<Option<Customer>, PersistenceError> {
        Ok(self
            .read_customers()?
            .iter()
            .find(|customer| customer.id == user_id)
            .cloned())
    }
}
