// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog Store for the Cinebook booking system.
//!
//! The store keeps every collection in memory and mirrors each mutation to
//! a swappable [`StorageBackend`]. The backend is written before the
//! in-memory collection changes, so a failed write leaves the store as it
//! was.
//!
//! ## Locking
//!
//! Each collection has its own `RwLock`. A mutation holds that collection's
//! write lock across both the backend write and the in-memory update, so
//! rewrites of one backing collection never interleave. Readers that need a
//! consistent view of several collections take read locks in this order:
//!
//! 1. catalog
//! 2. ledger
//! 3. deals
//! 4. rewards
//! 5. messages
//! 6. customers
//!
//! ## Backends
//!
//! - [`JsonDirectoryBackend`]: one JSON file per collection
//! - [`InMemoryBackend`]: nothing persisted, used in tests

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

mod backend;
mod collections;
mod data_models;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use backend::json::JsonDirectoryBackend;
pub use backend::memory::InMemoryBackend;
pub use backend::{EntityKind, StorageBackend};
pub use data_models::{EventSnapshot, ScreeningRecord};
pub use error::PersistenceError;
pub use mutations::MAX_REWARD_CODE_ATTEMPTS;

use cinebook_domain::{
    Booking, Cinema, Customer, Deal, Event, Message, Movie, Reward, TicketProduct, Venue,
    validate_venue,
};
use collections::{Catalog, Ledger};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{info, warn};

/// In-memory catalog, ledger and bookkeeping collections over a backend.
pub struct CatalogStore {
    backend: Arc<dyn StorageBackend>,
    catalog: RwLock<Catalog>,
    ledger: RwLock<Ledger>,
    deals: RwLock<Vec<Deal>>,
    rewards: RwLock<Vec<Reward>>,
    messages: RwLock<Vec<Message>>,
    customers: RwLock<Vec<Customer>>,
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore").finish_non_exhaustive()
    }
}

impl CatalogStore {
    /// Loads every collection from a backend.
    ///
    /// Venues whose geometry cannot produce a seat grid are logged and
    /// skipped; their events will report the venue as missing.
    ///
    /// # Arguments
    ///
    /// * `backend` - The backend to load from and write through to
    ///
    /// # Errors
    ///
    /// Returns an error if a collection cannot be read or a record cannot
    /// be decoded.
    pub fn open(backend: Arc<dyn StorageBackend>) -> Result<Self, PersistenceError> {
        let mut venues: Vec<Venue> = load_records(backend.as_ref(), EntityKind::Auditoriums)?;
        venues.retain(|venue| match validate_venue(venue) {
            Ok(()) => true,
            Err(err) => {
                warn!(venue_id = %venue.id, error = %err, "Skipping venue with invalid geometry");
                false
            }
        });

        let catalog: Catalog = Catalog {
            movies: load_records::<Movie>(backend.as_ref(), EntityKind::Movies)?,
            cinemas: load_records::<Cinema>(backend.as_ref(), EntityKind::Cinemas)?,
            venues,
            events: load_records::<Event>(backend.as_ref(), EntityKind::Screenings)?,
            ticket_types: load_records::<TicketProduct>(backend.as_ref(), EntityKind::TicketTypes)?,
        };
        let bookings: Vec<Booking> = load_records(backend.as_ref(), EntityKind::Bookings)?;
        let deals: Vec<Deal> = load_records(backend.as_ref(), EntityKind::Deals)?;
        let rewards: Vec<Reward> = load_records(backend.as_ref(), EntityKind::Rewards)?;
        let messages: Vec<Message> = load_records(backend.as_ref(), EntityKind::Messages)?;
        let customers: Vec<Customer> = load_records(backend.as_ref(), EntityKind::Users)?;

        info!(
            movies = catalog.movies.len(),
            venues = catalog.venues.len(),
            screenings = catalog.events.len(),
            ticket_types = catalog.ticket_types.len(),
            bookings = bookings.len(),
            deals = deals.len(),
            rewards = rewards.len(),
            customers = customers.len(),
            "Catalog store loaded"
        );

        Ok(Self {
            backend,
            catalog: RwLock::new(catalog),
            ledger: RwLock::new(Ledger::from_bookings(bookings)),
            deals: RwLock::new(deals),
            rewards: RwLock::new(rewards),
            messages: RwLock::new(messages),
            customers: RwLock::new(customers),
        })
    }

    /// Creates an empty store over a fresh in-memory backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        Self::open(Arc::new(InMemoryBackend::new()))
    }

    /// Opens a store over a JSON storage directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be opened or loaded.
    pub fn open_directory<P: AsRef<std::path::Path>>(root: P) -> Result<Self, PersistenceError> {
        Self::open(Arc::new(JsonDirectoryBackend::open(root)?))
    }

    // ========================================================================
    // Lock helpers
    // ========================================================================

    fn read_catalog(&self) -> Result<RwLockReadGuard<'_, Catalog>, PersistenceError> {
        self.catalog
            .read()
            .map_err(|_| PersistenceError::LockPoisoned("catalog"))
    }

    fn write_catalog(&self) -> Result<RwLockWriteGuard<'_, Catalog>, PersistenceError> {
        self.catalog
            .write()
            .map_err(|_| PersistenceError::LockPoisoned("catalog"))
    }

    fn read_ledger(&self) -> Result<RwLockReadGuard<'_, Ledger>, PersistenceError> {
        self.ledger
            .read()
            .map_err(|_| PersistenceError::LockPoisoned("ledger"))
    }

    fn write_ledger(&self) -> Result<RwLockWriteGuard<'_, Ledger>, PersistenceError> {
        self.ledger
            .write()
            .map_err(|_| PersistenceError::LockPoisoned("ledger"))
    }

    fn read_deals(&self) -> Result<RwLockReadGuard<'_, Vec<Deal>>, PersistenceError> {
        self.deals
            .read()
            .map_err(|_| PersistenceError::LockPoisoned("deals"))
    }

    fn write_deals(&self) -> Result<RwLockWriteGuard<'_, Vec<Deal>>, PersistenceError> {
        self.deals
            .write()
            .map_err(|_| PersistenceError::LockPoisoned("deals"))
    }

    fn read_rewards(&self) -> Result<RwLockReadGuard<'_, Vec<Reward>>, PersistenceError> {
        self.rewards
            .read()
            .map_err(|_| PersistenceError::LockPoisoned("rewards"))
    }

    fn write_rewards(&self) -> Result<RwLockWriteGuard<'_, Vec<Reward>>, PersistenceError> {
        self.rewards
            .write()
            .map_err(|_| PersistenceError::LockPoisoned("rewards"))
    }

    fn read_messages(&self) -> Result<RwLockReadGuard<'_, Vec<Message>>, PersistenceError> {
        self.messages
            .read()
            .map_err(|_| PersistenceError::LockPoisoned("messages"))
    }

    fn write_messages(&self) -> Result<RwLockWriteGuard<'_, Vec<Message>>, PersistenceError> {
        self.messages
            .write()
            .map_err(|_| PersistenceError::LockPoisoned("messages"))
    }

    fn read_customers(&self) -> Result<RwLockReadGuard<'_, Vec<Customer>>, PersistenceError> {
        self.customers
            .read()
            .map_err(|_| PersistenceError::LockPoisoned("customers"))
    }
}

/// Decodes every stored record of a kind.
fn load_records<T: DeserializeOwned>(
    backend: &dyn StorageBackend,
    kind: EntityKind,
) -> Result<Vec<T>, PersistenceError> {
    backend
        .load_all(kind)?
        .into_iter()
        .map(|value| {
            serde_json::from_value(value).map_err(|err| PersistenceError::CorruptRecord {
                kind: kind.as_str(),
                message: err.to_string(),
            })
        })
        .collect()
}

/// Encodes a collection for a `replace_all` call.
fn to_values<T: Serialize>(records: &[T]) -> Result<Vec<Value>, PersistenceError> {
    records
        .iter()
        .map(|record| serde_json::to_value(record).map_err(PersistenceError::from))
        .collect()
}
