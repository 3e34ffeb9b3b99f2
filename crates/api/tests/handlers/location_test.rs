use axum::http::StatusCode;
use pawsync_core::{errors::ShareError, models::location::VerifiedLocation};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::test_utils::{TestContext, portland_match};

fn full_address() -> Value {
    json!({
        "address": "1 NW 10th Ave",
        "city": "Portland",
        "state": "OR",
        "zip_code": "97209"
    })
}

#[tokio::test]
async fn test_verify_location_success() {
    let mut ctx = TestContext::new();
    ctx.geocoder
        .expect_search()
        .withf(|query| query == "1 NW 10th Ave, Portland, OR 97209")
        .times(1)
        .returning(|_| Ok(Some(portland_match())));
    let server = ctx.server();

    let response = server.post("/api/locations/verify").json(&full_address()).await;

    response.assert_status_ok();
    let verified: VerifiedLocation = response.json();
    assert_eq!(verified.neighborhood, "Pearl District");
    assert_eq!(verified.city, "Portland");
    assert_eq!(verified.state, "Oregon");
    assert_eq!(verified.lat, 45.5231);
}

#[tokio::test]
async fn test_verify_location_incomplete_address_skips_lookup() {
    let mut ctx = TestContext::new();
    ctx.geocoder.expect_search().never();
    let server = ctx.server();

    let response = server
        .post("/api/locations/verify")
        .json(&json!({ "address": "1 NW 10th Ave", "city": "", "state": "OR", "zip_code": "97209" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Please fill in all address fields");
}

#[tokio::test]
async fn test_verify_location_not_found() {
    let mut ctx = TestContext::new();
    ctx.geocoder.expect_search().returning(|_| Ok(None));
    let server = ctx.server();

    let response = server.post("/api/locations/verify").json(&full_address()).await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Address not found. Please check your address details."
    );
}

#[tokio::test]
async fn test_verify_location_lookup_failure() {
    let mut ctx = TestContext::new();
    ctx.geocoder
        .expect_search()
        .returning(|_| Err(ShareError::Geocoding("connection refused".to_string())));
    let server = ctx.server();

    let response = server.post("/api/locations/verify").json(&full_address()).await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["error"], "Failed to verify address. Please try again.");
}
