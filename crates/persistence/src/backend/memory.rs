// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{EntityKind, StorageBackend};
use crate::error::PersistenceError;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;

/// Keeps every collection in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    collections: RwLock<HashMap<EntityKind, Vec<Value>>>,
}

impl InMemoryBackend {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a collection with typed records, replacing what was there.
    ///
    /// # Errors
    ///
    /// Returns an error if a record cannot be serialized.
    pub fn with_records<T: Serialize>(
        self,
        kind: EntityKind,
        records: &[T],
    ) -> Result<Self, PersistenceError> {
        let values: Vec<Value> = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<_, _>>()?;
        self.replace_all(kind, values)?;
        Ok(self)
    }

    /// Returns a copy of a kind's collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend lock is poisoned.
    pub fn snapshot(&self, kind: EntityKind) -> Result<Vec<Value>, PersistenceError> {
        self.load_all(kind)
    }
}

impl StorageBackend for InMemoryBackend {
    fn load_all(&self, kind: EntityKind) -> Result<Vec<Value>, PersistenceError> {
        let collections = self
            .collections
            .read()
            .map_err(|_| PersistenceError::LockPoisoned("backend"))?;
        Ok(collections.get(&kind).cloned().unwrap_or_default())
    }

    fn append_one(&self, kind: EntityKind, record: Value) -> Result<(), PersistenceError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| PersistenceError::LockPoisoned("backend"))?;
        collections.entry(kind).or_default().push(record);
        Ok(())
    }

    fn replace_all(&self, kind: EntityKind, records: Vec<Value>) -> Result<(), PersistenceError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| PersistenceError::LockPoisoned("backend"))?;
        collections.insert(kind, records);
        Ok(())
    }
}
