//! # Location Handlers
//!
//! Address verification for custom post locations.

use axum::{Json, extract::State};
use std::sync::Arc;
use pawsync_core::{
    models::location::{Address, VerifiedLocation},
    services::lookup_address,
};

use crate::{ApiState, middleware::error_handling::AppError};

/// Looks up a street address and returns its coordinates and labels
///
/// # Errors
///
/// * `400 Bad Request` when any address field is blank
/// * `404 Not Found` when the geocoder has no match
/// * `502 Bad Gateway` when the lookup itself fails
pub async fn verify_location(
    State(state): State<Arc<ApiState>>,
    Json(address): Json<Address>,
) -> Result<Json<VerifiedLocation>, AppError> {
    let verified = lookup_address(state.geocoder.as_ref(), &address).await?;
    Ok(Json(verified))
}
