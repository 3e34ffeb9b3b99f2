use axum::{Router, routing::post};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/availability",
            post(handlers::availability::create_availability),
        )
        .route(
            "/api/availability/schedule",
            post(handlers::availability::compute_schedule),
        )
}
