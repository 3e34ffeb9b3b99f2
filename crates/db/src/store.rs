use async_trait::async_trait;
use pawsync_core::{
    errors::{ShareError, ShareResult},
    models::post::{CreateAvailabilityResponse, NewAvailabilityPost},
    services::AvailabilityStore,
};
use tracing::{debug, error};

use crate::{DbPool, repositories::availability};

/// `AvailabilityStore` backed by the Postgres `availability` table.
#[derive(Debug, Clone)]
pub struct PgAvailabilityStore {
    pool: DbPool,
}

impl PgAvailabilityStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl AvailabilityStore for PgAvailabilityStore {
    async fn insert(&self, post: &NewAvailabilityPost) -> ShareResult<CreateAvailabilityResponse> {
        let created = availability::create_availability_post(&self.pool, post)
            .await
            .map_err(|e| {
                error!(error = %e, owner_id = %post.owner_id, "availability insert failed");
                ShareError::Database(e)
            })?;

        debug!(post_id = %created.id, "availability post stored");
        Ok(CreateAvailabilityResponse {
            id: created.id,
            created_at: created.created_at,
        })
    }
}
