// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Services the orchestrator and effect dispatcher depend on.
//!
//! Both are traits so that tests and alternative deployments can swap in
//! their own delivery and identity lookup.

use cinebook_domain::{Customer, Message};
use cinebook_persistence::{CatalogStore, PersistenceError};
use std::sync::Arc;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::{debug, warn};

/// Failures while running a post-commit effect.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The message could not be delivered.
    #[error("Notification delivery failed: {0}")]
    Delivery(String),

    /// The store rejected the effect's write.
    #[error("Store update failed: {0}")]
    Store(#[from] PersistenceError),
}

/// Best-effort delivery of text to a customer.
pub trait Notifier: Send + Sync {
    /// Sends `text` to the customer with this e-mail.
    ///
    /// # Errors
    ///
    /// Returns an error if delivery fails.
    fn send_to_customer(&self, email: &str, text: &str) -> Result<(), NotificationError>;
}

/// Identity lookup for booking contact details.
pub trait CustomerDirectory: Send + Sync {
    /// Finds the registered customer with this e-mail, if any.
    fn find_customer_by_contact(&self, email: &str) -> Option<Customer>;
}

/// Delivers notifications into the store's customer mailbox.
#[derive(Debug, Clone)]
pub struct MailboxNotifier {
    store: Arc<CatalogStore>,
}

impl MailboxNotifier {
    #[must_use]
    pub const fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }
}

impl Notifier for MailboxNotifier {
    fn send_to_customer(&self, email: &str, text: &str) -> Result<(), NotificationError> {
        let Some(customer) = self.store.find_customer_by_email(email)? else {
            debug!(email, "No mailbox for recipient, skipping notification");
            return Ok(());
        };

        let message: Message = Message::new(&customer.id, text.to_string(), OffsetDateTime::now_utc());
        self.store.add_message(message)?;
        debug!(user_id = %customer.id, "Message delivered to mailbox");
        Ok(())
    }
}

/// Looks customers up in the store's user collection.
#[derive(Debug, Clone)]
pub struct StoreCustomerDirectory {
    store: Arc<CatalogStore>,
}

impl StoreCustomerDirectory {
    #[must_use]
    pub const fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }
}

impl CustomerDirectory for StoreCustomerDirectory {
    fn find_customer_by_contact(&self, email: &str) -> Option<Customer> {
        match self.store.find_customer_by_email(email) {
            Ok(customer) => customer,
            Err(err) => {
                warn!(error = %err, "Customer lookup failed, treating as unknown");
                None
            }
        }
    }
}
