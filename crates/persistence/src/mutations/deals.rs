// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::EntityKind;
use crate::{CatalogStore, PersistenceError, to_values};
use cinebook_domain::Deal;
use serde_json::Value;
use tracing::debug;

impl CatalogStore {
    /// Adds a deal unless its movie already has one.
    ///
    /// # Returns
    ///
    /// `true` if the deal was added, `false` if the movie already has a deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn add_deal(&self, deal: Deal) -> Result<bool, PersistenceError> {
        let mut deals = self.write_deals()?;
        if deals.iter().any(|existing| existing.movie_id == deal.movie_id) {
            debug!(movie_id = %deal.movie_id, "Movie already has a deal");
            return Ok(false);
        }

        let record: Value = serde_json::to_value(&deal)?;
        self.backend.append_one(EntityKind::Deals, record)?;
        deals.push(deal);
        Ok(true)
    }

    /// Replaces the deal with the same id.
    ///
    /// # Returns
    ///
    /// `false` if no deal has that id, or if the update would give the
    /// deal's movie a second deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn update_deal(&self, deal: Deal) -> Result<bool, PersistenceError> {
        let mut deals = self.write_deals()?;
        let Some(index) = deals.iter().position(|existing| existing.id == deal.id) else {
            return Ok(false);
        };
        if deals
            .iter()
            .any(|existing| existing.id != deal.id && existing.movie_id == deal.movie_id)
        {
            debug!(deal_id = %deal.id, movie_id = %deal.movie_id, "Update would duplicate a movie deal");
            return Ok(false);
        }

        let mut updated: Vec<Deal> = deals.clone();
        updated[index] = deal;
        self.backend
            .replace_all(EntityKind::Deals, to_values(&updated)?)?;
        *deals = updated;
        Ok(true)
    }

    /// Removes a deal by id.
    ///
    /// # Returns
    ///
    /// `false` if no deal has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn remove_deal(&self, deal_id: &str) -> Result<bool, PersistenceError> {
        let mut deals = self.write_deals()?;
        if !deals.iter().any(|existing| existing.id == deal_id) {
            return Ok(false);
        }

        let remaining: Vec<Deal> = deals
            .iter()
            .filter(|existing| existing.id != deal_id)
            .cloned()
            .collect();
        self.backend
            .replace_all(EntityKind::Deals, to_values(&remaining)?)?;
        *deals = remaining;
        Ok(true)
    }
}
