use crate::models::DbAvailabilityPost;
use chrono::Utc;
use eyre::Result;
use pawsync_core::models::post::NewAvailabilityPost;
use sqlx::{Pool, Postgres, types::Json};
use uuid::Uuid;

const POST_COLUMNS: &str = "id, owner_id, post_type, enabled_days, day_schedules, \
    use_profile_location, custom_location_address, custom_location_neighborhood, \
    custom_location_city, custom_location_state, custom_location_zip_code, \
    custom_location_lat, custom_location_lng, display_lat, display_lng, city_label, \
    title, description, availability_notes, special_instructions, is_urgent, urgency_notes, \
    can_pick_up_drop_off, preferred_meeting_location, community_support_enabled, \
    support_preferences, flexible_scheduling_needed, support_story, \
    need_extra_help, help_reason_elderly, help_reason_sick, help_reason_low_income, \
    help_reason_disability, help_reason_single_parent, help_reason_other, \
    help_reason_other_text, help_context, open_to_helping_others, can_help_everyone, \
    can_help_elderly, can_help_sick, can_help_low_income, can_help_disability, \
    can_help_single_parent, helping_others_context, dog_id, dog_ids, created_at";

/// Day identifiers as stored in the `enabled_days` column.
pub fn enabled_day_names(post: &NewAvailabilityPost) -> Vec<String> {
    post.enabled_days
        .iter()
        .map(|day| day.as_str().to_string())
        .collect()
}

pub async fn create_availability_post(
    pool: &Pool<Postgres>,
    post: &NewAvailabilityPost,
) -> Result<DbAvailabilityPost> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    let location = &post.location;
    let details = &post.details;
    let help = &details.help;

    let sql = format!(
        r#"
        INSERT INTO availability ({POST_COLUMNS})
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28, $29, $30, $31, $32,
                $33, $34, $35, $36, $37, $38, $39, $40, $41, $42, $43, $44, $45, $46, $47, $48)
        RETURNING {POST_COLUMNS}
        "#
    );

    let created = sqlx::query_as::<_, DbAvailabilityPost>(&sql)
        .bind(id)
        .bind(post.owner_id)
        .bind(post.post_type.as_str())
        .bind(enabled_day_names(post))
        .bind(Json(&post.day_schedules))
        .bind(location.use_profile_location)
        .bind(location.custom_location_address.as_deref())
        .bind(location.custom_location_neighborhood.as_deref())
        .bind(location.custom_location_city.as_deref())
        .bind(location.custom_location_state.as_deref())
        .bind(location.custom_location_zip_code.as_deref())
        .bind(location.custom_location_lat)
        .bind(location.custom_location_lng)
        .bind(location.display_lat)
        .bind(location.display_lng)
        .bind(location.city_label.as_deref())
        .bind(&details.title)
        .bind(&details.description)
        .bind(&details.availability_notes)
        .bind(&details.special_instructions)
        .bind(details.is_urgent)
        .bind(&details.urgency_notes)
        .bind(details.can_pick_up_drop_off)
        .bind(&details.preferred_meeting_location)
        .bind(details.community_support_enabled)
        .bind(&details.support_preferences)
        .bind(details.flexible_scheduling_needed)
        .bind(&details.support_story)
        .bind(help.need_extra_help)
        .bind(help.help_reason_elderly)
        .bind(help.help_reason_sick)
        .bind(help.help_reason_low_income)
        .bind(help.help_reason_disability)
        .bind(help.help_reason_single_parent)
        .bind(help.help_reason_other)
        .bind(&help.help_reason_other_text)
        .bind(&help.help_context)
        .bind(help.open_to_helping_others)
        .bind(help.can_help_everyone)
        .bind(help.can_help_elderly)
        .bind(help.can_help_sick)
        .bind(help.can_help_low_income)
        .bind(help.can_help_disability)
        .bind(help.can_help_single_parent)
        .bind(&help.helping_others_context)
        .bind(post.dog_id)
        .bind(&post.dog_ids)
        .bind(now)
        .fetch_one(pool)
        .await?;

    Ok(created)
}

pub async fn get_availability_post_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbAvailabilityPost>> {
    let sql = format!("SELECT {POST_COLUMNS} FROM availability WHERE id = $1");

    let post = sqlx::query_as::<_, DbAvailabilityPost>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(post)
}
