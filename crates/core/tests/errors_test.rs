use std::error::Error;
use pawsync_core::errors::{ShareError, ShareResult};

#[test]
fn test_share_error_display() {
    let not_found = ShareError::NotFound("Time slot not found".to_string());
    let validation = ShareError::Validation("Invalid input".to_string());
    let busy = ShareError::Busy("Submitting".to_string());
    let geocoding = ShareError::Geocoding("Lookup failed".to_string());
    let database = ShareError::Database(eyre::eyre!("Database connection failed"));
    let internal = ShareError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Time slot not found"
    );
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(busy.to_string(), "Operation already in progress: Submitting");
    assert_eq!(geocoding.to_string(), "Geocoding error: Lookup failed");
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_user_message_strips_prefix() {
    let validation = ShareError::Validation("Please fill in all address fields".to_string());
    let database = ShareError::Database(eyre::eyre!("duplicate key value"));

    assert_eq!(validation.user_message(), "Please fill in all address fields");
    assert_eq!(database.user_message(), "duplicate key value");
}

#[test]
fn test_error_source() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let share_error = ShareError::Internal(Box::new(io_error));

    assert!(share_error.source().is_some());
}

#[test]
fn test_share_result() {
    let result: ShareResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: ShareResult<i32> = Err(ShareError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_eyre_report() {
    let share_error: ShareError = eyre::eyre!("insert failed").into();

    assert!(matches!(share_error, ShareError::Database(_)));
    assert!(share_error.to_string().contains("insert failed"));
}
