use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{
    location::{LocationChoice, LocationData},
    schedule::{WeeklySchedule, enabled_days},
};
use crate::{
    errors::{ShareError, ShareResult},
    models::{day::DayKey, schedule::DaySchedule},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    /// Offering one or more of the owner's dogs for playdates.
    DogAvailable,
    /// Offering pet-sitting help.
    PetpalAvailable,
}

impl PostType {
    pub fn as_str(self) -> &'static str {
        match self {
            PostType::DogAvailable => "dog_available",
            PostType::PetpalAvailable => "petpal_available",
        }
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    pub id: Uuid,
    pub name: String,
}

/// The signed-in owner's profile and pets, resolved by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerProfile {
    pub id: Uuid,
    pub display_lat: Option<f64>,
    pub display_lng: Option<f64>,
    pub city: Option<String>,
    #[serde(default)]
    pub dogs: Vec<Dog>,
}

/// Free-text and flag fields of the post, stored as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostDetails {
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
    #[serde(flatten)]
    pub help: CommunityHelp,
}

/// Whether the owner needs a hand, and whom they can help in turn.
/// Serialized flat alongside the other detail fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunityHelp {
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
}

/// A dog post needs at least one selected dog.
pub fn check_dog_selection(post_type: PostType, selected_dogs: &[Uuid]) -> ShareResult<()> {
    if post_type == PostType::DogAvailable && selected_dogs.is_empty() {
        return Err(ShareError::Validation(
            "Please select at least one dog for dog availability.".to_string(),
        ));
    }
    Ok(())
}

/// The record inserted into the `availability` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAvailabilityPost {
    pub owner_id: Uuid,
    pub post_type: PostType,
    pub enabled_days: Vec<DayKey>,
    pub day_schedules: WeeklySchedule,
    pub location: LocationData,
    pub details: PostDetails,
    /// First selected dog, kept for readers that expect a single dog.
    pub dog_id: Option<Uuid>,
    pub dog_ids: Vec<Uuid>,
}

impl NewAvailabilityPost {
    /// Validates the submission and assembles the insert record.
    ///
    /// Checks run in the order the form reports them: dog selection, at
    /// least one scheduled day, slot boundaries, then the location.
    pub fn build(
        owner_id: Uuid,
        post_type: PostType,
        selected_dogs: &[Uuid],
        schedule: &WeeklySchedule,
        location: &LocationChoice,
        details: PostDetails,
    ) -> ShareResult<Self> {
        check_dog_selection(post_type, selected_dogs)?;

        let days = enabled_days(schedule);
        if days.is_empty() {
            return Err(ShareError::Validation(
                "Please select at least one day for availability.".to_string(),
            ));
        }

        for day in &days {
            let slots = &schedule[day].time_slots;
            if slots.iter().any(|slot| !slot.ends_after_start()) {
                return Err(ShareError::Validation(format!(
                    "End time must be after start time for {}.",
                    day
                )));
            }
        }

        let location = location.to_location_data()?;

        let day_schedules = days
            .iter()
            .map(|day| (*day, DaySchedule::from_slots(schedule[day].time_slots.clone())))
            .collect();

        let (dog_id, dog_ids) = match post_type {
            PostType::DogAvailable => (selected_dogs.first().copied(), selected_dogs.to_vec()),
            PostType::PetpalAvailable => (None, Vec::new()),
        };

        Ok(Self {
            owner_id,
            post_type,
            enabled_days: days,
            day_schedules,
            location,
            details,
            dog_id,
            dog_ids,
        })
    }
}

/// Request body for publishing an availability post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAvailabilityRequest {
    pub owner_id: Uuid,
    pub post_type: PostType,
    #[serde(default)]
    pub dog_ids: Vec<Uuid>,
    pub day_schedules: WeeklySchedule,
    pub location: LocationChoice,
    #[serde(default)]
    pub details: PostDetails,
}

impl CreateAvailabilityRequest {
    pub fn into_post(self) -> ShareResult<NewAvailabilityPost> {
        NewAvailabilityPost::build(
            self.owner_id,
            self.post_type,
            &self.dog_ids,
            &self.day_schedules,
            &self.location,
            self.details,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAvailabilityResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}
