use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAvailabilityPost {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub post_type: String,
    pub enabled_days: Vec<String>,
    pub day_schedules: Json<serde_json::Value>,

    pub use_profile_location: bool,
    pub custom_location_address: Option<String>,
    pub custom_location_neighborhood: Option<String>,
    pub custom_location_city: Option<String>,
    pub custom_location_state: Option<String>,
    pub custom_location_zip_code: Option<String>,
    pub custom_location_lat: Option<f64>,
    pub custom_location_lng: Option<f64>,
    pub display_lat: Option<f64>,
    pub display_lng: Option<f64>,
    pub city_label: Option<String>,

    pub title: String,
    pub description: String,
    pub availability_notes: String,
    pub special_instructions: String,
    pub is_urgent: bool,
    pub urgency_notes: String,
    pub can_pick_up_drop_off: bool,
    pub preferred_meeting_location: String,
    pub community_support_enabled: bool,
    pub support_preferences: Vec<String>,
    pub flexible_scheduling_needed: bool,
    pub support_story: String,

    pub need_extra_help: bool,
    pub help_reason_elderly: bool,
    pub help_reason_sick: bool,
    pub help_reason_low_income: bool,
    pub help_reason_disability: bool,
    pub help_reason_single_parent: bool,
    pub help_reason_other: bool,
    pub help_reason_other_text: String,
    pub help_context: String,
    pub open_to_helping_others: bool,
    pub can_help_everyone: bool,
    pub can_help_elderly: bool,
    pub can_help_sick: bool,
    pub can_help_low_income: bool,
    pub can_help_disability: bool,
    pub can_help_single_parent: bool,
    pub helping_others_context: String,

    pub dog_id: Option<Uuid>,
    pub dog_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}
