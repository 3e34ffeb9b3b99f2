use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::{day::DayKey, time_point::TimePoint, time_slot::TimeSlot};

/// Selected grid points per day.
pub type AvailabilityMap = BTreeMap<DayKey, BTreeSet<TimePoint>>;

/// The schedule for every day that has at least one slot.
pub type WeeklySchedule = BTreeMap<DayKey, DaySchedule>;

/// Slots for a single weekday. `enabled` is true iff `time_slots` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub enabled: bool,
    pub time_slots: Vec<TimeSlot>,
}

impl DaySchedule {
    pub fn from_slots(time_slots: Vec<TimeSlot>) -> Self {
        Self {
            enabled: !time_slots.is_empty(),
            time_slots,
        }
    }
}

/// Days that carry at least one slot, in calendar order.
pub fn enabled_days(schedule: &WeeklySchedule) -> Vec<DayKey> {
    schedule
        .iter()
        .filter(|(_, day)| day.enabled)
        .map(|(key, _)| *key)
        .collect()
}

/// Request body for computing a weekly schedule from raw grid points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeScheduleRequest {
    pub availability: BTreeMap<DayKey, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeScheduleResponse {
    pub enabled_days: Vec<DayKey>,
    pub day_schedules: WeeklySchedule,
}
