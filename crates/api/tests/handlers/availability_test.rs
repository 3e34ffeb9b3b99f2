use axum::http::StatusCode;
use chrono::Utc;
use pawsync_core::{
    errors::ShareError,
    models::{day::DayKey, post::{CreateAvailabilityResponse, PostType}},
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::test_utils::{TestContext, dog_post_request};

#[tokio::test]
async fn test_compute_schedule_merges_points() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/availability/schedule")
        .json(&json!({
            "availability": {
                "monday": ["09:00", "10:00", "11:00", "14:00"],
                "sunday": ["23:00"],
                "tuesday": []
            }
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["enabled_days"], json!(["monday", "sunday"]));
    assert_eq!(
        body["day_schedules"]["monday"],
        json!({
            "enabled": true,
            "timeSlots": [
                { "id": "monday-0", "start": "09:00", "end": "12:00" },
                { "id": "monday-1", "start": "14:00", "end": "15:00" }
            ]
        })
    );
    assert_eq!(body["day_schedules"]["sunday"]["timeSlots"][0]["end"], "00:00");
    assert!(body["day_schedules"].get("tuesday").is_none());
}

#[tokio::test]
async fn test_compute_schedule_without_points_is_rejected() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/availability/schedule")
        .json(&json!({ "availability": { "friday": [] } }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Please select at least one time slot before saving."
    );
}

#[tokio::test]
async fn test_compute_schedule_rejects_malformed_time() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/availability/schedule")
        .json(&json!({ "availability": { "monday": ["9am"] } }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_availability_success() {
    let owner_id = Uuid::new_v4();
    let dog_id = Uuid::new_v4();
    let post_id = Uuid::new_v4();

    let mut ctx = TestContext::new();
    ctx.store
        .expect_insert()
        .withf(move |post| {
            post.owner_id == owner_id
                && post.post_type == PostType::DogAvailable
                && post.enabled_days == vec![DayKey::Monday, DayKey::Wednesday]
                && post.dog_id == Some(dog_id)
                && post.details.title == "Morning walks"
                && post.details.help.need_extra_help
                && post.details.help.help_reason_single_parent
                && post.details.help.open_to_helping_others
                && !post.details.help.can_help_everyone
        })
        .times(1)
        .returning(move |_| {
            Ok(CreateAvailabilityResponse {
                id: post_id,
                created_at: Utc::now(),
            })
        });
    let server = ctx.server();

    let response = server
        .post("/api/availability")
        .json(&dog_post_request(owner_id, dog_id))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created: CreateAvailabilityResponse = response.json();
    assert_eq!(created.id, post_id);
}

#[tokio::test]
async fn test_create_availability_requires_a_dog() {
    let mut ctx = TestContext::new();
    ctx.store.expect_insert().never();
    let server = ctx.server();

    let mut request = dog_post_request(Uuid::new_v4(), Uuid::new_v4());
    request["dog_ids"] = json!([]);

    let response = server.post("/api/availability").json(&request).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Please select at least one dog for dog availability."
    );
}

#[tokio::test]
async fn test_create_availability_rejects_reversed_slot() {
    let mut ctx = TestContext::new();
    ctx.store.expect_insert().never();
    let server = ctx.server();

    let mut request = dog_post_request(Uuid::new_v4(), Uuid::new_v4());
    request["day_schedules"]["wednesday"]["timeSlots"][0]["end"] = json!("13:00");

    let response = server.post("/api/availability").json(&request).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "End time must be after start time for wednesday.");
}

#[tokio::test]
async fn test_create_availability_unverified_custom_location() {
    let mut ctx = TestContext::new();
    ctx.store.expect_insert().never();
    let server = ctx.server();

    let mut request = dog_post_request(Uuid::new_v4(), Uuid::new_v4());
    request["location"] = json!({
        "kind": "custom",
        "address": {
            "address": "1 NW 10th Ave",
            "city": "Portland",
            "state": "OR",
            "zip_code": "97209"
        },
        "verified": null
    });

    let response = server.post("/api/availability").json(&request).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Please verify the custom address to get the neighborhood information."
    );
}

#[tokio::test]
async fn test_create_availability_store_failure() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_insert()
        .returning(|_| Err(ShareError::Database(eyre::eyre!("relation does not exist"))));
    let server = ctx.server();

    let response = server
        .post("/api/availability")
        .json(&dog_post_request(Uuid::new_v4(), Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Failed to create availability post: relation does not exist"
    );
}
