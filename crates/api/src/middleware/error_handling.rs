//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! handler reports failures the same way.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use pawsync_core::errors::ShareError;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps `ShareError` and implements `IntoResponse`, producing a
/// `{ "error": "<message>" }` body. The message is the user-facing text
/// without the variant prefix, so it can be shown inline as-is.
#[derive(Debug)]
pub struct AppError(pub ShareError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ShareError::NotFound(_) => StatusCode::NOT_FOUND,
            ShareError::Validation(_) => StatusCode::BAD_REQUEST,
            ShareError::Busy(_) => StatusCode::CONFLICT,
            ShareError::Geocoding(_) => StatusCode::BAD_GATEWAY,
            ShareError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ShareError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        }

        let body = Json(json!({ "error": self.0.user_message() }));
        (status, body).into_response()
    }
}

/// Allows `?` on `ShareResult` inside handlers.
impl From<ShareError> for AppError {
    fn from(err: ShareError) -> Self {
        AppError(err)
    }
}

/// Wraps adapter failures reported as `eyre::Report` in `ShareError::Database`.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ShareError::Database(err))
    }
}

/// Maps a ShareError to an HTTP response
pub fn map_error(err: ShareError) -> Response {
    AppError(err).into_response()
}
