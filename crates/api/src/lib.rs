// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the Cinebook booking system.
//!
//! Everything a transport needs: the booking orchestrator, post-commit
//! effect dispatch, deal bookkeeping, catalog queries and the error
//! taxonomy they all report through.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod booking;
mod collaborators;
mod deals;
mod effects;
mod error;
mod locks;
mod queries;
mod request_response;

#[cfg(test)]
mod tests;

pub use booking::BookingOrchestrator;
pub use collaborators::{
    CustomerDirectory, MailboxNotifier, NotificationError, Notifier, StoreCustomerDirectory,
};
pub use deals::{
    add_deal, get_deal_for_movie, list_deals, list_deals_for_movie, remove_deal, update_deal,
};
pub use effects::{DispatchSummary, EffectDispatcher};
pub use error::{
    ApiError, BookingPhase, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
pub use locks::EventLocks;
pub use queries::{
    list_messages_for_customer, list_movies, list_screenings_for_cinema,
    list_screenings_for_movie, list_ticket_types, replace_movies,
};
pub use request_response::{
    AddDealRequest, ConfirmRequest, DealMutationResponse, QuoteRequest, RemoveDealRequest,
    ScreeningSummary, UpdateDealRequest,
};

use cinebook_persistence::CatalogStore;
use std::sync::Arc;

/// The orchestrator and dispatcher wired to the default collaborators.
#[derive(Debug, Clone)]
pub struct Services {
    pub store: Arc<CatalogStore>,
    pub orchestrator: Arc<BookingOrchestrator>,
    pub dispatcher: Arc<EffectDispatcher>,
}

impl Services {
    /// Wires services that look customers up in, and deliver messages to,
    /// the store itself.
    #[must_use]
    pub fn from_store(store: Arc<CatalogStore>) -> Self {
        let directory: Arc<dyn CustomerDirectory> =
            Arc::new(StoreCustomerDirectory::new(Arc::clone(&store)));
        let notifier: Arc<dyn Notifier> = Arc::new(MailboxNotifier::new(Arc::clone(&store)));
        Self::with_collaborators(store, directory, notifier)
    }

    /// Wires services with caller-supplied collaborators.
    #[must_use]
    pub fn with_collaborators(
        store: Arc<CatalogStore>,
        directory: Arc<dyn CustomerDirectory>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            orchestrator: Arc::new(BookingOrchestrator::new(Arc::clone(&store), directory)),
            dispatcher: Arc::new(EffectDispatcher::new(Arc::clone(&store), notifier)),
            store,
        }
    }
}
