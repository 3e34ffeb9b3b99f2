//! # Availability Handlers
//!
//! Endpoints around the weekly availability grid:
//!
//! - `POST /api/availability/schedule` folds raw grid points into per-day
//!   ranges, exactly as saving the grid does.
//! - `POST /api/availability` validates a finished share form and stores it.
//!
//! Neither endpoint keeps state between requests. The grid itself lives in
//! the client and only its points or its saved schedule travel over the wire.

use axum::{Json, extract::State, http::StatusCode};
use std::{collections::BTreeSet, sync::Arc};
use pawsync_core::{
    errors::ShareError,
    grid::AvailabilityGrid,
    models::{
        post::{CreateAvailabilityRequest, CreateAvailabilityResponse},
        schedule::{AvailabilityMap, ComputeScheduleRequest, ComputeScheduleResponse, enabled_days},
        time_point::TimePoint,
    },
};
use tracing::{info, warn};

use crate::{ApiState, middleware::error_handling::AppError};

/// Merges selected grid points into contiguous hour ranges
///
/// Points whose minutes are not 0, 15, 30 or 45 are dropped before merging.
/// Days without any remaining point are left out of the response.
///
/// # Errors
///
/// * `400 Bad Request` when a point is not a valid `HH:MM` time, or when no
///   day ends up with a slot
pub async fn compute_schedule(
    Json(request): Json<ComputeScheduleRequest>,
) -> Result<Json<ComputeScheduleResponse>, AppError> {
    let mut availability = AvailabilityMap::new();
    for (day, points) in request.availability {
        let parsed = points
            .iter()
            .map(|point| point.parse::<TimePoint>())
            .collect::<Result<BTreeSet<TimePoint>, _>>()?;
        availability.insert(day, parsed);
    }

    let mut grid = AvailabilityGrid::from_points(availability);
    let day_schedules = grid.save()?;

    Ok(Json(ComputeScheduleResponse {
        enabled_days: enabled_days(&day_schedules),
        day_schedules,
    }))
}

/// Publishes an availability post
///
/// The body carries the saved schedule, the selected dogs, the location
/// choice and the free-text details. Validation runs in the same order the
/// share form uses, so the first failing rule decides the message.
///
/// # Errors
///
/// * `400 Bad Request` for any validation failure
/// * `500 Internal Server Error` when the insert fails
pub async fn create_availability(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<CreateAvailabilityRequest>,
) -> Result<(StatusCode, Json<CreateAvailabilityResponse>), AppError> {
    let post = request.into_post()?;

    let created = state.store.insert(&post).await.map_err(|err| {
        warn!(owner_id = %post.owner_id, error = %err, "insert failed");
        ShareError::Database(eyre::eyre!(
            "Failed to create availability post: {}",
            err.user_message()
        ))
    })?;

    info!(post_id = %created.id, post_type = %post.post_type, "availability post published");
    Ok((StatusCode::CREATED, Json(created)))
}
