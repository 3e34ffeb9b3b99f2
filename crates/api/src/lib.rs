//! # PawSync API
//!
//! HTTP front for the availability sharing flow. It exposes the schedule
//! merge, address verification and post creation over JSON.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Turn requests into calls on the core crate
//! - **Middleware**: Error to status mapping
//! - **Geocoding**: Nominatim adapter for address lookups
//! - **Config**: Environment driven settings
//!
//! Collaborators are held behind the `AvailabilityStore` and `Geocoder`
//! traits so tests can swap them for in-memory versions.

/// Configuration module for API settings
pub mod config;
/// Nominatim address lookup
pub mod geocoding;
/// Request handlers
pub mod handlers;
/// Error handling middleware
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    http::{HeaderValue, Method, StatusCode, header},
};
use eyre::Result;
use pawsync_core::services::{AvailabilityStore, Geocoder};
use pawsync_db::{DbPool, store::PgAvailabilityStore};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::geocoding::NominatimGeocoder;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Where published posts are written
    pub store: Arc<dyn AvailabilityStore>,
    /// Address lookup used by location verification
    pub geocoder: Arc<dyn Geocoder>,
}

/// Builds the router with every endpoint attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .merge(routes::availability::routes())
        .merge(routes::location::routes())
        .with_state(state)
}

/// CORS for the configured origins. Origins that are not valid header
/// values are skipped with a warning.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(allowed)
        .allow_credentials(true)
}

/// Starts the API server with the provided configuration and database connection
///
/// Sets up logging, wires the Postgres store and the Nominatim geocoder into
/// the shared state, applies CORS and the request timeout, then serves until
/// the listener fails.
pub async fn start_server(config: config::ApiConfig, db_pool: DbPool) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let geocoder = NominatimGeocoder::new(
        config.geocoder_base_url.clone(),
        &config.geocoder_user_agent,
    )?;
    let state = Arc::new(ApiState {
        store: Arc::new(PgAvailabilityStore::new(db_pool)),
        geocoder: Arc::new(geocoder),
    });

    let app = app(state);

    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(|err: BoxError| async move {
                warn!(error = %err, "request timed out");
                StatusCode::REQUEST_TIMEOUT
            }))
            .timeout(Duration::from_secs(config.request_timeout)),
    );

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
