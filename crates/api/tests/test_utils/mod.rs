use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use axum_test::TestServer;
use mockall::mock;
use pawsync_api::{ApiState, app};
use pawsync_core::{
    errors::ShareResult,
    services::{GeocodeMatch, Geocoder},
};
use pawsync_db::mock::repositories::MockAvailabilityStore;
use serde_json::{Value, json};
use uuid::Uuid;

mock! {
    pub Geocoder {}

    #[async_trait]
    impl Geocoder for Geocoder {
        async fn search(&self, query: &str) -> ShareResult<Option<GeocodeMatch>>;
    }
}

pub struct TestContext {
    pub store: MockAvailabilityStore,
    pub geocoder: MockGeocoder,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            store: MockAvailabilityStore::new(),
            geocoder: MockGeocoder::new(),
        }
    }

    /// Hands the configured mocks to a router and wraps it in a test server.
    pub fn server(self) -> TestServer {
        let state = Arc::new(ApiState {
            store: Arc::new(self.store),
            geocoder: Arc::new(self.geocoder),
        });

        TestServer::new(app(state)).expect("Failed to start test server")
    }
}

pub fn portland_match() -> GeocodeMatch {
    GeocodeMatch {
        lat: 45.5231,
        lng: -122.6765,
        address: HashMap::from([
            ("suburb".to_string(), "Pearl  District".to_string()),
            ("city".to_string(), "Portland".to_string()),
            ("state".to_string(), "Oregon".to_string()),
        ]),
    }
}

/// A valid dog post request using the profile location.
pub fn dog_post_request(owner_id: Uuid, dog_id: Uuid) -> Value {
    json!({
        "owner_id": owner_id,
        "post_type": "dog_available",
        "dog_ids": [dog_id],
        "day_schedules": {
            "monday": {
                "enabled": true,
                "timeSlots": [{ "id": "monday-0", "start": "09:00", "end": "11:00" }]
            },
            "wednesday": {
                "enabled": true,
                "timeSlots": [{ "id": "wednesday-0", "start": "14:00", "end": "15:00" }]
            }
        },
        "location": {
            "kind": "profile",
            "display_lat": 45.52,
            "display_lng": -122.68,
            "city": "Portland"
        },
        "details": {
            "title": "Morning walks",
            "description": "Happy to walk Biscuit before work",
            "need_extra_help": true,
            "help_reason_single_parent": true,
            "open_to_helping_others": true
        }
    })
}
