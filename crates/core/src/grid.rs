//! # Availability Grid
//!
//! State for the weekly drag-to-select grid. Each day keeps the set of
//! selected time points plus any slots added by hand; the visible schedule
//! is always derived from those two through [`AvailabilityGrid::schedule`],
//! so there is one source of truth.
//!
//! ## Merge algorithm
//!
//! Points whose minute is not a quarter-hour offset are dropped, the rest are
//! sorted, and a new range starts whenever a point is not exactly 60 minutes
//! after the previous one. A range ends one hour after its last point,
//! wrapping 23:xx to 00:xx.

use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    errors::{ShareError, ShareResult},
    models::{
        day::DayKey,
        schedule::{AvailabilityMap, DaySchedule, WeeklySchedule},
        time_point::TimePoint,
        time_slot::{SlotField, TimeSlot},
    },
};

const MANUAL_TIME_MESSAGE: &str = "Please enter a time with minutes 0, 15, 30, or 45.";
const EMPTY_SAVE_MESSAGE: &str = "Please select at least one time slot before saving.";

/// Pointer interaction state. The mode is locked by the first cell of a
/// drag and applied to every cell entered until the pointer is released.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Interaction {
    #[default]
    Idle,
    DraggingAdd,
    DraggingRemove,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct DayState {
    points: BTreeSet<TimePoint>,
    added: Vec<TimeSlot>,
    manual_input: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityGrid {
    days: BTreeMap<DayKey, DayState>,
    interaction: Interaction,
    saved: Option<WeeklySchedule>,
}

fn slot_not_found(day: DayKey, id: &str) -> ShareError {
    ShareError::NotFound(format!("Time slot {} not found on {}", id, day))
}

/// Accepts a time only if it parses and its minute is 0, 15, 30 or 45.
pub fn is_valid_time_interval(time: &str) -> bool {
    time.parse::<TimePoint>()
        .map(TimePoint::is_valid_interval)
        .unwrap_or(false)
}

/// Groups aligned points into runs of consecutive hours.
fn contiguous_runs(points: &BTreeSet<TimePoint>) -> Vec<Vec<TimePoint>> {
    let mut runs: Vec<Vec<TimePoint>> = Vec::new();

    for point in points.iter().copied().filter(|p| p.is_valid_interval()) {
        let extends_run = runs
            .last()
            .and_then(|run| run.last())
            .is_some_and(|prev| prev.minutes() + 60 == point.minutes());

        if extends_run {
            if let Some(run) = runs.last_mut() {
                run.push(point);
            }
        } else {
            runs.push(vec![point]);
        }
    }

    runs
}

/// Compresses a day's selected points into `{id, start, end}` ranges.
pub fn merge_points(day: DayKey, points: &BTreeSet<TimePoint>) -> Vec<TimeSlot> {
    contiguous_runs(points)
        .into_iter()
        .enumerate()
        .map(|(index, run)| {
            let start = run[0];
            let last = run[run.len() - 1];
            TimeSlot::new(format!("{}-{}", day, index), start, last.next_hour_wrapping())
        })
        .collect()
}

impl AvailabilityGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid from raw points, as if each had been clicked once.
    pub fn from_points(availability: AvailabilityMap) -> Self {
        let days = availability
            .into_iter()
            .map(|(day, points)| {
                (
                    day,
                    DayState {
                        points,
                        ..DayState::default()
                    },
                )
            })
            .collect();

        Self {
            days,
            ..Self::default()
        }
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn is_selected(&self, day: DayKey, time: TimePoint) -> bool {
        self.days
            .get(&day)
            .is_some_and(|state| state.points.contains(&time))
    }

    pub fn selected_points(&self, day: DayKey) -> Vec<TimePoint> {
        self.days
            .get(&day)
            .map(|state| state.points.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Raw selection for every day that has at least one point.
    pub fn availability(&self) -> AvailabilityMap {
        self.days
            .iter()
            .filter(|(_, state)| !state.points.is_empty())
            .map(|(day, state)| (*day, state.points.clone()))
            .collect()
    }

    /// The derived schedule for one day: merged ranges, then added slots.
    pub fn schedule(&self, day: DayKey) -> DaySchedule {
        let Some(state) = self.days.get(&day) else {
            return DaySchedule::default();
        };

        let mut slots = merge_points(day, &state.points);
        slots.extend(state.added.iter().cloned());
        DaySchedule::from_slots(slots)
    }

    /// Schedules for every enabled day.
    pub fn weekly_schedule(&self) -> WeeklySchedule {
        DayKey::ALL
            .into_iter()
            .map(|day| (day, self.schedule(day)))
            .filter(|(_, schedule)| schedule.enabled)
            .collect()
    }

    pub fn selected_days(&self) -> Vec<DayKey> {
        self.weekly_schedule().into_keys().collect()
    }

    /// Snapshot from the last successful [`save`](Self::save), cleared by any
    /// later edit.
    pub fn saved(&self) -> Option<&WeeklySchedule> {
        self.saved.as_ref()
    }

    pub fn pointer_down(&mut self, day: DayKey, time: TimePoint) {
        self.interaction = if self.is_selected(day, time) {
            Interaction::DraggingRemove
        } else {
            Interaction::DraggingAdd
        };
        self.apply_mode(day, time);
    }

    /// A cell entered while the pointer moves. `primary_pressed` reports
    /// whether the primary button is still held; if it is not, the drag ends.
    pub fn pointer_enter(&mut self, day: DayKey, time: TimePoint, primary_pressed: bool) {
        if self.interaction == Interaction::Idle {
            return;
        }
        if !primary_pressed {
            self.interaction = Interaction::Idle;
            return;
        }
        self.apply_mode(day, time);
    }

    pub fn pointer_up(&mut self) {
        self.interaction = Interaction::Idle;
    }

    /// Flips membership of a single point.
    pub fn toggle(&mut self, day: DayKey, time: TimePoint) {
        let points = &mut self.days.entry(day).or_default().points;
        if !points.remove(&time) {
            points.insert(time);
        }
        self.saved = None;
    }

    fn apply_mode(&mut self, day: DayKey, time: TimePoint) {
        let points = &mut self.days.entry(day).or_default().points;
        let changed = match self.interaction {
            Interaction::DraggingAdd => points.insert(time),
            Interaction::DraggingRemove => points.remove(&time),
            Interaction::Idle => false,
        };
        if changed {
            self.saved = None;
        }
    }

    pub fn manual_input(&self, day: DayKey) -> &str {
        self.days
            .get(&day)
            .map(|state| state.manual_input.as_str())
            .unwrap_or("")
    }

    pub fn set_manual_input(&mut self, day: DayKey, value: impl Into<String>) {
        self.days.entry(day).or_default().manual_input = value.into();
    }

    /// Applies the day's typed time as a toggle and clears the input.
    ///
    /// Empty input does nothing. A malformed time or one off the quarter
    /// hour is rejected and the input is left as typed.
    pub fn submit_manual_input(&mut self, day: DayKey) -> ShareResult<Option<TimePoint>> {
        let input = self.manual_input(day).trim().to_string();
        if input.is_empty() {
            return Ok(None);
        }

        let time = input
            .parse::<TimePoint>()
            .ok()
            .filter(|time| time.is_valid_interval())
            .ok_or_else(|| ShareError::Validation(MANUAL_TIME_MESSAGE.to_string()))?;

        self.toggle(day, time);
        self.set_manual_input(day, String::new());
        debug!(%day, %time, "manual time applied");
        Ok(Some(time))
    }

    /// Appends an independent 09:00–10:00 slot and returns its id.
    pub fn add_slot(&mut self, day: DayKey) -> String {
        let slot = TimeSlot::new(
            Uuid::new_v4().to_string(),
            TimePoint::on_the_hour(9),
            TimePoint::on_the_hour(10),
        );
        let id = slot.id.clone();
        self.days.entry(day).or_default().added.push(slot);
        self.saved = None;
        id
    }

    /// Removes a slot. Removing a merged range deselects the points it covers.
    pub fn remove_slot(&mut self, day: DayKey, id: &str) -> ShareResult<()> {
        let state = self.days.get_mut(&day).ok_or_else(|| slot_not_found(day, id))?;

        if let Some(index) = state.added.iter().position(|slot| slot.id == id) {
            state.added.remove(index);
        } else {
            let run = Self::derived_run(day, state, id)?;
            for point in run {
                state.points.remove(&point);
            }
        }

        self.saved = None;
        Ok(())
    }

    /// Changes one boundary of a slot and returns the slot's id afterwards.
    ///
    /// Editing a merged range detaches it: its points are deselected and an
    /// independent slot with a fresh id takes its place.
    pub fn update_slot(
        &mut self,
        day: DayKey,
        id: &str,
        field: SlotField,
        value: TimePoint,
    ) -> ShareResult<String> {
        let state = self.days.get_mut(&day).ok_or_else(|| slot_not_found(day, id))?;

        let id = if let Some(slot) = state.added.iter_mut().find(|slot| slot.id == id) {
            slot.set(field, value);
            slot.id.clone()
        } else {
            let run = Self::derived_run(day, state, id)?;
            let mut slot = TimeSlot::new(
                Uuid::new_v4().to_string(),
                run[0],
                run[run.len() - 1].next_hour_wrapping(),
            );
            slot.set(field, value);
            for point in &run {
                state.points.remove(point);
            }
            let new_id = slot.id.clone();
            state.added.push(slot);
            new_id
        };

        self.saved = None;
        Ok(id)
    }

    fn derived_run(day: DayKey, state: &DayState, id: &str) -> ShareResult<Vec<TimePoint>> {
        let index = id
            .strip_prefix(day.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
            .and_then(|index| index.parse::<usize>().ok());

        index
            .and_then(|index| contiguous_runs(&state.points).into_iter().nth(index))
            .ok_or_else(|| slot_not_found(day, id))
    }

    /// Recomputes every day's ranges and stores them as the saved schedule.
    ///
    /// With nothing selected the state is left untouched and an error is
    /// returned for the caller to show.
    pub fn save(&mut self) -> ShareResult<WeeklySchedule> {
        let schedule = self.weekly_schedule();
        if schedule.is_empty() {
            return Err(ShareError::Validation(EMPTY_SAVE_MESSAGE.to_string()));
        }

        info!(days = schedule.len(), "availability saved");
        self.saved = Some(schedule.clone());
        Ok(schedule)
    }
}
