// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Deal bookkeeping.

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{AddDealRequest, DealMutationResponse, UpdateDealRequest};
use cinebook_domain::{Deal, validate_deal_discount};
use cinebook_persistence::CatalogStore;
use tracing::info;

/// Lists every deal, ordered by movie id.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_deals(store: &CatalogStore) -> Result<Vec<Deal>, ApiError> {
    let mut deals: Vec<Deal> = store.list_deals()?;
    deals.sort_by(|a, b| a.movie_id.cmp(&b.movie_id));
    Ok(deals)
}

/// Lists the deals for one movie.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_deals_for_movie(store: &CatalogStore, movie_id: &str) -> Result<Vec<Deal>, ApiError> {
    Ok(store.deals_for_movie(movie_id)?)
}

/// Returns the deal for a movie, if it has one.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn get_deal_for_movie(store: &CatalogStore, movie_id: &str) -> Result<Option<Deal>, ApiError> {
    Ok(store.deals_for_movie(movie_id)?.into_iter().next())
}

/// Creates a deal. Refused without error when the movie already has one.
///
/// # Errors
///
/// Returns an error if the discount is above 100 percent or the store
/// write fails.
pub fn add_deal(
    store: &CatalogStore,
    request: AddDealRequest,
) -> Result<DealMutationResponse, ApiError> {
    validate_deal_discount(request.discount).map_err(translate_domain_error)?;

    let deal: Deal = Deal::new(&request.movie_id, request.discount, request.expiry_date);
    let added: bool = store.add_deal(deal)?;
    if added {
        info!(movie_id = %request.movie_id, discount = request.discount, "Deal added");
    }
    Ok(DealMutationResponse::from_outcome(
        added,
        "Deal added",
        "A deal already exists for this movie",
    ))
}

/// Replaces a deal by id.
///
/// # Errors
///
/// Returns an error if the discount is above 100 percent or the store
/// write fails.
pub fn update_deal(
    store: &CatalogStore,
    request: UpdateDealRequest,
) -> Result<DealMutationResponse, ApiError> {
    validate_deal_discount(request.discount).map_err(translate_domain_error)?;

    let deal: Deal = Deal {
        id: request.id,
        movie_id: request.movie_id,
        discount: request.discount,
        expiry_date: request.expiry_date,
    };
    let updated: bool = store.update_deal(deal)?;
    Ok(DealMutationResponse::from_outcome(
        updated,
        "Deal updated",
        "Deal not found or movie already has a deal",
    ))
}

/// Removes a deal by id.
///
/// # Errors
///
/// Returns an error if the store write fails.
pub fn remove_deal(store: &CatalogStore, deal_id: &str) -> Result<DealMutationResponse, ApiError> {
    let removed: bool = store.remove_deal(deal_id)?;
    Ok(DealMutationResponse::from_outcome(
        removed,
        "Deal removed",
        "Deal not found",
    ))
}
