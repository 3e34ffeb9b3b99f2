use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create availability table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS availability (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            owner_id UUID NOT NULL,
            post_type VARCHAR(32) NOT NULL,
            enabled_days TEXT[] NOT NULL DEFAULT '{}',
            day_schedules JSONB NOT NULL DEFAULT '{}'::jsonb,
            use_profile_location BOOLEAN NOT NULL DEFAULT TRUE,
            custom_location_address TEXT NULL,
            custom_location_neighborhood TEXT NULL,
            custom_location_city TEXT NULL,
            custom_location_state TEXT NULL,
            custom_location_zip_code TEXT NULL,
            custom_location_lat DOUBLE PRECISION NULL,
            custom_location_lng DOUBLE PRECISION NULL,
            display_lat DOUBLE PRECISION NULL,
            display_lng DOUBLE PRECISION NULL,
            city_label TEXT NULL,
            title TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            availability_notes TEXT NOT NULL DEFAULT '',
            special_instructions TEXT NOT NULL DEFAULT '',
            is_urgent BOOLEAN NOT NULL DEFAULT FALSE,
            urgency_notes TEXT NOT NULL DEFAULT '',
            can_pick_up_drop_off BOOLEAN NOT NULL DEFAULT FALSE,
            preferred_meeting_location TEXT NOT NULL DEFAULT '',
            community_support_enabled BOOLEAN NOT NULL DEFAULT FALSE,
            support_preferences TEXT[] NOT NULL DEFAULT '{}',
            flexible_scheduling_needed BOOLEAN NOT NULL DEFAULT FALSE,
            support_story TEXT NOT NULL DEFAULT '',
            need_extra_help BOOLEAN NOT NULL DEFAULT FALSE,
            help_reason_elderly BOOLEAN NOT NULL DEFAULT FALSE,
            help_reason_sick BOOLEAN NOT NULL DEFAULT FALSE,
            help_reason_low_income BOOLEAN NOT NULL DEFAULT FALSE,
            help_reason_disability BOOLEAN NOT NULL DEFAULT FALSE,
            help_reason_single_parent BOOLEAN NOT NULL DEFAULT FALSE,
            help_reason_other BOOLEAN NOT NULL DEFAULT FALSE,
            help_reason_other_text TEXT NOT NULL DEFAULT '',
            help_context TEXT NOT NULL DEFAULT '',
            open_to_helping_others BOOLEAN NOT NULL DEFAULT FALSE,
            can_help_everyone BOOLEAN NOT NULL DEFAULT FALSE,
            can_help_elderly BOOLEAN NOT NULL DEFAULT FALSE,
            can_help_sick BOOLEAN NOT NULL DEFAULT FALSE,
            can_help_low_income BOOLEAN NOT NULL DEFAULT FALSE,
            can_help_disability BOOLEAN NOT NULL DEFAULT FALSE,
            can_help_single_parent BOOLEAN NOT NULL DEFAULT FALSE,
            helping_others_context TEXT NOT NULL DEFAULT '',
            dog_id UUID NULL,
            dog_ids UUID[] NOT NULL DEFAULT '{}',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_post_type CHECK (post_type IN ('dog_available', 'petpal_available'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_availability_owner_id ON availability(owner_id)",
        "CREATE INDEX IF NOT EXISTS idx_availability_post_type ON availability(post_type)",
        "CREATE INDEX IF NOT EXISTS idx_availability_created_at ON availability(created_at)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
