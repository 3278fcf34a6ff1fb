// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use cinebook_api::{
    AddDealRequest, ApiError, ConfirmRequest, DealMutationResponse, DispatchSummary,
    QuoteRequest, RemoveDealRequest, ScreeningSummary, Services, UpdateDealRequest, add_deal,
    list_deals, list_deals_for_movie, list_messages_for_customer, list_movies,
    list_screenings_for_cinema, list_screenings_for_movie, list_ticket_types, remove_deal,
    replace_movies, update_deal,
};
use cinebook_domain::{Booking, Deal, Message, Movie, OrderQuote, SeatMap, TicketProduct};
use cinebook_persistence::{CatalogStore, PersistenceError};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use time::Date;
use time::macros::format_description;
use tracing::{error, info, warn};

/// Cinebook Server - HTTP server for the Cinebook booking system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the JSON collections. If not provided, data is kept in memory.
    #[arg(short, long)]
    storage: Option<PathBuf>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    services: Services,
}

/// Query parameters for listing a movie's screenings.
#[derive(Debug, Deserialize)]
struct MovieScreeningsQuery {
    /// UTC date, `YYYY-MM-DD`.
    date: Option<String>,
    cinema_id: Option<String>,
}

/// Query parameters for listing a cinema's screenings.
#[derive(Debug, Deserialize)]
struct CinemaScreeningsQuery {
    /// UTC date, `YYYY-MM-DD`.
    date: String,
}

/// API response for a committed booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfirmApiResponse {
    booking: Booking,
    /// Post-commit effects that completed.
    notifications_sent: usize,
    /// Post-commit effects that failed and were skipped.
    notifications_failed: usize,
}

/// API response for the health probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
    bookings: usize,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl HttpError {
    fn bad_request(message: String) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }

    fn internal(message: String) -> Self {
        error!(error = %message, "Request failed");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        ApiError::from(err).into()
    }
}

impl From<tokio::task::JoinError> for HttpError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("Worker task failed: {err}"))
    }
}

/// Runs store work that takes blocking locks or touches the disk off the
/// async runtime.
async fn run_blocking<T, F>(work: F) -> Result<T, HttpError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(work).await??)
}

fn parse_date(value: &str) -> Result<Date, HttpError> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|err| HttpError::bad_request(format!("Invalid date '{value}': {err}")))
}

// ============================================================================
// Booking handlers
// ============================================================================

/// Handler for GET `/api/screenings/{id}/seatmap` endpoint.
async fn handle_get_seat_map(
    AxumState(app_state): AxumState<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<SeatMap>, HttpError> {
    info!(event_id = %event_id, "Handling get_seat_map request");
    Ok(Json(app_state.services.orchestrator.get_seat_map(&event_id)?))
}

/// Handler for POST `/api/quote` endpoint.
///
/// Prices a selection without booking it.
async fn handle_quote(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<OrderQuote>, HttpError> {
    info!(event_id = %request.event_id, seats = request.seats.len(), "Handling quote request");
    Ok(Json(app_state.services.orchestrator.preview(&request)?))
}

/// Handler for POST `/api/bookings` endpoint.
///
/// Commits the booking, then runs its post-commit effects. The response
/// reports effect failures but never fails because of them.
async fn handle_confirm(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<ConfirmRequest>,
) -> Result<Json<ConfirmApiResponse>, HttpError> {
    info!(event_id = %request.event_id, "Handling confirm request");

    let orchestrator = Arc::clone(&app_state.services.orchestrator);
    let confirmation = run_blocking(move || orchestrator.confirm(request)).await?;

    let dispatcher = Arc::clone(&app_state.services.dispatcher);
    let effects = confirmation.effects.clone();
    let summary: DispatchSummary =
        match tokio::task::spawn_blocking(move || dispatcher.dispatch(&effects)).await {
            Ok(summary) => summary,
            Err(err) => {
                warn!(error = %err, "Post-commit dispatch did not complete");
                DispatchSummary {
                    succeeded: 0,
                    failed: confirmation.effects.len(),
                }
            }
        };

    Ok(Json(ConfirmApiResponse {
        booking: confirmation.booking,
        notifications_sent: summary.succeeded,
        notifications_failed: summary.failed,
    }))
}

/// Handler for GET `/api/bookings/{reference}` endpoint.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(reference): Path<String>,
) -> Result<Json<Booking>, HttpError> {
    info!(reference = %reference, "Handling get_booking request");
    Ok(Json(
        app_state
            .services
            .orchestrator
            .booking_by_reference(&reference)?,
    ))
}

/// Handler for GET `/api/customers/{email}/bookings` endpoint.
async fn handle_list_customer_bookings(
    AxumState(app_state): AxumState<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Booking>>, HttpError> {
    info!("Handling list_customer_bookings request");
    Ok(Json(
        app_state
            .services
            .orchestrator
            .bookings_for_customer(&email)?,
    ))
}

// ============================================================================
// Catalog handlers
// ============================================================================

/// Handler for GET `/api/movies` endpoint.
async fn handle_list_movies(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<Movie>>, HttpError> {
    info!("Handling list_movies request");
    Ok(Json(list_movies(&app_state.services.store)?))
}

/// Handler for POST `/api/movies` endpoint.
///
/// Replaces the whole movie list.
async fn handle_replace_movies(
    AxumState(app_state): AxumState<AppState>,
    Json(movies): Json<Vec<Movie>>,
) -> Result<Json<Vec<Movie>>, HttpError> {
    info!(count = movies.len(), "Handling replace_movies request");
    let store: Arc<CatalogStore> = Arc::clone(&app_state.services.store);
    let movies: Vec<Movie> = run_blocking(move || {
        replace_movies(&store, movies)?;
        list_movies(&store)
    })
    .await?;
    Ok(Json(movies))
}

/// Handler for GET `/api/movies/{id}/screenings` endpoint.
///
/// A movie with no matching screenings is reported as not found.
async fn handle_list_movie_screenings(
    AxumState(app_state): AxumState<AppState>,
    Path(movie_id): Path<String>,
    Query(query): Query<MovieScreeningsQuery>,
) -> Result<Json<Vec<ScreeningSummary>>, HttpError> {
    info!(movie_id = %movie_id, "Handling list_movie_screenings request");

    let date: Option<Date> = query.date.as_deref().map(parse_date).transpose()?;
    let screenings: Vec<ScreeningSummary> = list_screenings_for_movie(
        &app_state.services.store,
        &movie_id,
        date,
        query.cinema_id.as_deref(),
    )?;
    if screenings.is_empty() {
        return Err(HttpError {
            status: StatusCode::NOT_FOUND,
            message: format!("No screenings found for movie '{movie_id}'"),
        });
    }
    Ok(Json(screenings))
}

/// Handler for GET `/api/cinemas/{id}/screenings` endpoint.
async fn handle_list_cinema_screenings(
    AxumState(app_state): AxumState<AppState>,
    Path(cinema_id): Path<String>,
    Query(query): Query<CinemaScreeningsQuery>,
) -> Result<Json<Vec<ScreeningSummary>>, HttpError> {
    info!(cinema_id = %cinema_id, date = %query.date, "Handling list_cinema_screenings request");

    let date: Date = parse_date(&query.date)?;
    Ok(Json(list_screenings_for_cinema(
        &app_state.services.store,
        &cinema_id,
        date,
    )?))
}

/// Handler for GET `/api/ticket-types` endpoint.
async fn handle_list_ticket_types(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<TicketProduct>>, HttpError> {
    info!("Handling list_ticket_types request");
    Ok(Json(list_ticket_types(&app_state.services.store)?))
}

// ============================================================================
// Deal handlers
// ============================================================================

/// Handler for GET `/api/deals` endpoint.
async fn handle_list_deals(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<Deal>>, HttpError> {
    info!("Handling list_deals request");
    Ok(Json(list_deals(&app_state.services.store)?))
}

/// Handler for GET `/api/movies/{id}/deals` endpoint.
async fn handle_list_movie_deals(
    AxumState(app_state): AxumState<AppState>,
    Path(movie_id): Path<String>,
) -> Result<Json<Vec<Deal>>, HttpError> {
    info!(movie_id = %movie_id, "Handling list_movie_deals request");
    Ok(Json(list_deals_for_movie(
        &app_state.services.store,
        &movie_id,
    )?))
}

// Deal and movie mutations write through to the storage backend, so they
// run on the blocking pool.

/// Handler for POST `/api/deals/add` endpoint.
async fn handle_add_deal(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<AddDealRequest>,
) -> Result<Json<DealMutationResponse>, HttpError> {
    info!(movie_id = %request.movie_id, "Handling add_deal request");
    let store: Arc<CatalogStore> = Arc::clone(&app_state.services.store);
    Ok(Json(run_blocking(move || add_deal(&store, request)).await?))
}

/// Handler for POST `/api/deals/update` endpoint.
async fn handle_update_deal(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<UpdateDealRequest>,
) -> Result<Json<DealMutationResponse>, HttpError> {
    info!(deal_id = %request.id, "Handling update_deal request");
    let store: Arc<CatalogStore> = Arc::clone(&app_state.services.store);
    Ok(Json(run_blocking(move || update_deal(&store, request)).await?))
}

/// Handler for POST `/api/deals/remove` endpoint.
async fn handle_remove_deal(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<RemoveDealRequest>,
) -> Result<Json<DealMutationResponse>, HttpError> {
    info!(deal_id = %request.id, "Handling remove_deal request");
    let store: Arc<CatalogStore> = Arc::clone(&app_state.services.store);
    Ok(Json(run_blocking(move || remove_deal(&store, &request.id)).await?))
}

// ============================================================================
// Mailbox and health
// ============================================================================

/// Handler for GET `/api/messages/{user_id}` endpoint.
async fn handle_list_messages(
    AxumState(app_state): AxumState<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Message>>, HttpError> {
    info!(user_id = %user_id, "Handling list_messages request");
    Ok(Json(list_messages_for_customer(
        &app_state.services.store,
        &user_id,
    )?))
}

/// Handler for GET `/health` endpoint.
async fn handle_health(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<HealthResponse>, HttpError> {
    Ok(Json(HealthResponse {
        status: String::from("ok"),
        bookings: app_state.services.store.booking_count()?,
    }))
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/api/screenings/{id}/seatmap", get(handle_get_seat_map))
        .route("/api/quote", post(handle_quote))
        .route("/api/bookings", post(handle_confirm))
        .route("/api/bookings/{reference}", get(handle_get_booking))
        .route(
            "/api/customers/{email}/bookings",
            get(handle_list_customer_bookings),
        )
        .route(
            "/api/movies",
            get(handle_list_movies).post(handle_replace_movies),
        )
        .route(
            "/api/movies/{id}/screenings",
            get(handle_list_movie_screenings),
        )
        .route("/api/movies/{id}/deals", get(handle_list_movie_deals))
        .route(
            "/api/cinemas/{id}/screenings",
            get(handle_list_cinema_screenings),
        )
        .route("/api/ticket-types", get(handle_list_ticket_types))
        .route("/api/deals", get(handle_list_deals))
        .route("/api/deals/add", post(handle_add_deal))
        .route("/api/deals/update", post(handle_update_deal))
        .route("/api/deals/remove", post(handle_remove_deal))
        .route("/api/messages/{user_id}", get(handle_list_messages))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Cinebook Server");

    let store: CatalogStore = if let Some(root) = &args.storage {
        info!("Using JSON storage at: {}", root.display());
        CatalogStore::open_directory(root)?
    } else {
        info!("Using in-memory storage");
        CatalogStore::new_in_memory()?
    };

    let app_state: AppState = AppState {
        services: Services::from_store(Arc::new(store)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
