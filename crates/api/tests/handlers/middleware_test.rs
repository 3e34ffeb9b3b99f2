use axum::http::StatusCode;
use pawsync_api::middleware::error_handling::{AppError, map_error};
use pawsync_core::errors::ShareError;
use rstest::rstest;

#[rstest]
#[case(ShareError::NotFound("Resource not found".to_string()), StatusCode::NOT_FOUND)]
#[case(ShareError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case(ShareError::Busy("Already running".to_string()), StatusCode::CONFLICT)]
#[case(ShareError::Geocoding("Lookup failed".to_string()), StatusCode::BAD_GATEWAY)]
#[case(ShareError::Database(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: ShareError, #[case] expected: StatusCode) {
    assert_eq!(AppError(error).status(), expected);
}

#[tokio::test]
async fn test_error_handling_internal() {
    let error = ShareError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_body_carries_user_message() {
    let response = map_error(ShareError::Validation(
        "Please select at least one day for availability.".to_string(),
    ));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(
        body,
        serde_json::json!({ "error": "Please select at least one day for availability." })
    );
}

#[tokio::test]
async fn test_eyre_report_becomes_server_error() {
    let error: AppError = eyre::eyre!("connection reset").into();

    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
