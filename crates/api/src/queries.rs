// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog, screening and mailbox queries.

use crate::error::ApiError;
use crate::request_response::ScreeningSummary;
use cinebook_domain::{Event, Message, Movie, TicketProduct};
use cinebook_persistence::{CatalogStore, ScreeningRecord};
use time::{Date, UtcOffset};
use tracing::info;

/// Lists all movies.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_movies(store: &CatalogStore) -> Result<Vec<Movie>, ApiError> {
    Ok(store.list_movies()?)
}

/// Replaces the movie list.
///
/// # Errors
///
/// Returns an error if a movie has a blank id or title, or the store write
/// fails.
pub fn replace_movies(store: &CatalogStore, movies: Vec<Movie>) -> Result<(), ApiError> {
    if let Some(movie) = movies
        .iter()
        .find(|movie| movie.id.trim().is_empty() || movie.title.trim().is_empty())
    {
        return Err(ApiError::InvalidInput {
            field: String::from("movies"),
            message: format!("Movie '{}' must have an id and a title", movie.id),
        });
    }

    let count: usize = movies.len();
    store.replace_movies(movies)?;
    info!(count, "Movie list replaced");
    Ok(())
}

/// Lists all ticket types.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_ticket_types(store: &CatalogStore) -> Result<Vec<TicketProduct>, ApiError> {
    Ok(store.list_ticket_types()?)
}

/// Lists a movie's screenings, optionally on one UTC date and at one cinema.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_screenings_for_movie(
    store: &CatalogStore,
    movie_id: &str,
    date: Option<Date>,
    cinema_id: Option<&str>,
) -> Result<Vec<ScreeningSummary>, ApiError> {
    let records: Vec<ScreeningRecord> = store.screening_records(|event, venue| {
        event.movie_id == movie_id
            && date.is_none_or(|date| utc_date(event) == date)
            && cinema_id.is_none_or(|cinema_id| venue.is_some_and(|v| v.cinema_id == cinema_id))
    })?;
    Ok(records.into_iter().filter_map(summarize).collect())
}

/// Lists every screening at a cinema on one UTC date.
///
/// # Errors
///
/// Returns an error if the cinema does not exist or the store cannot be read.
pub fn list_screenings_for_cinema(
    store: &CatalogStore,
    cinema_id: &str,
    date: Date,
) -> Result<Vec<ScreeningSummary>, ApiError> {
    if store.find_cinema(cinema_id)?.is_none() {
        return Err(ApiError::not_found("Cinema", cinema_id));
    }

    let records: Vec<ScreeningRecord> = store.screening_records(|event, venue| {
        utc_date(event) == date && venue.is_some_and(|v| v.cinema_id == cinema_id)
    })?;
    Ok(records.into_iter().filter_map(summarize).collect())
}

/// Lists a customer's mailbox, newest first.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_messages_for_customer(
    store: &CatalogStore,
    user_id: &str,
) -> Result<Vec<Message>, ApiError> {
    Ok(store.messages_for_customer(user_id)?)
}

/// Calendar date of the screening's start in UTC, whatever offset it was stored with.
fn utc_date(event: &Event) -> Date {
    event.start_utc.to_offset(UtcOffset::UTC).date()
}

/// Screenings whose venue or cinema is missing are not listed.
fn summarize(record: ScreeningRecord) -> Option<ScreeningSummary> {
    let venue = record.venue?;
    let cinema = record.cinema?;
    Some(ScreeningSummary {
        screening_id: record.event.id,
        start_utc: record.event.start_utc.to_offset(UtcOffset::UTC),
        cinema_id: cinema.id,
        cinema_name: cinema.name,
        cinema_state: cinema.state,
        auditorium_name: venue.name,
        base_price: record.event.base_price,
        class: record.event.class,
        movie: record.movie,
    })
}
