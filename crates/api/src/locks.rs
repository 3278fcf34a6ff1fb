// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One exclusive lock per event, created on first use.
///
/// Holding an event's lock from reading its booked seats until the new
/// booking is appended is what keeps two customers from buying the same
/// seat. Different events never contend.
///
/// The locks guard no data, so a lock poisoned by a panicking holder is
/// recovered rather than reported.
#[derive(Debug, Default)]
pub struct EventLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl EventLocks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lock for an event, creating it if needed.
    #[must_use]
    pub fn lock_for(&self, event_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.table();
        Arc::clone(locks.entry(event_id.to_string()).or_default())
    }

    /// Blocks until the event's lock is held.
    #[must_use]
    pub fn acquire(lock: &Mutex<()>) -> MutexGuard<'_, ()> {
        lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of events that have a lock.
    #[must_use]
    pub fn tracked_events(&self) -> usize {
        self.table().len()
    }

    fn table(&self) -> MutexGuard<'_, HashMap<String, Arc<Mutex<()>>>> {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
