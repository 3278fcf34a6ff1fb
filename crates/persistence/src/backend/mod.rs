// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage backends.
//!
//! A backend stores one ordered collection of JSON records per entity kind
//! and knows nothing about the entities themselves. The `CatalogStore`
//! decodes records on load and encodes them on every write.
//!
//! ## Backend Support
//!
//! - `json`: one JSON array file per kind in a directory
//! - `memory`: process-local collections, used by tests and ephemeral runs
//!
//! Backends do not serialize callers. The store holds the owning
//! collection's write lock around every mutating call.

pub mod json;
pub mod memory;

use crate::error::PersistenceError;
use serde_json::Value;

/// The collections a backend stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Movies,
    Cinemas,
    Auditoriums,
    Screenings,
    TicketTypes,
    Bookings,
    Deals,
    Rewards,
    Messages,
    Users,
}

impl EntityKind {
    /// Every kind, in load order.
    pub const ALL: [Self; 10] = [
        Self::Movies,
        Self::Cinemas,
        Self::Auditoriums,
        Self::Screenings,
        Self::TicketTypes,
        Self::Bookings,
        Self::Deals,
        Self::Rewards,
        Self::Messages,
        Self::Users,
    ];

    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Movies => "movies",
            Self::Cinemas => "cinemas",
            Self::Auditoriums => "auditoriums",
            Self::Screenings => "screenings",
            Self::TicketTypes => "ticket_types",
            Self::Bookings => "bookings",
            Self::Deals => "deals",
            Self::Rewards => "rewards",
            Self::Messages => "messages",
            Self::Users => "users",
        }
    }

    /// Name of the file this kind is stored in by the JSON backend.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A swappable store of record collections keyed by entity kind.
pub trait StorageBackend: Send + Sync {
    /// Loads every record of a kind, in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or decoded.
    fn load_all(&self, kind: EntityKind) -> Result<Vec<Value>, PersistenceError>;

    /// Appends one record to the end of a kind's collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written.
    fn append_one(&self, kind: EntityKind, record: Value) -> Result<(), PersistenceError>;

    /// Replaces a kind's whole collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written.
    fn replace_all(&self, kind: EntityKind, records: Vec<Value>) -> Result<(), PersistenceError>;
}
