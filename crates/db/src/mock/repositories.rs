use async_trait::async_trait;
use mockall::mock;
use pawsync_core::{
    errors::ShareResult,
    models::post::{CreateAvailabilityResponse, NewAvailabilityPost},
    services::AvailabilityStore,
};

// Mock collaborators for handler tests
mock! {
    pub AvailabilityStore {}

    #[async_trait]
    impl AvailabilityStore for AvailabilityStore {
        async fn insert(
            &self,
            post: &NewAvailabilityPost,
        ) -> ShareResult<CreateAvailabilityResponse>;
    }
}
