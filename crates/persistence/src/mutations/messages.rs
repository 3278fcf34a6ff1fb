// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::EntityKind;
use crate::{CatalogStore, PersistenceError};
use cinebook_domain::Message;
use serde_json::Value;

impl CatalogStore {
    /// Appends a message to a customer's mailbox.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn add_message(&self, message: Message) -> Result<(), PersistenceError> {
        let mut messages = self.write_messages()?;
        let record: Value = serde_json::to_value(&message)?;
        self.backend.append_one(EntityKind::Messages, record)?;
        messages.push(message);
        Ok(())
    }
}
