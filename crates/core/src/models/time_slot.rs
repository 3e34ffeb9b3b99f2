use serde::{Deserialize, Serialize};

use super::time_point::TimePoint;

/// A contiguous availability range within one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: String,
    pub start: TimePoint,
    pub end: TimePoint,
}

/// Which boundary of a slot an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotField {
    Start,
    End,
}

impl TimeSlot {
    pub fn new(id: impl Into<String>, start: TimePoint, end: TimePoint) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// Whether the slot ends after it starts. An end of `00:00` is read as
    /// midnight at the end of the day, which is what a range closing at
    /// 23:00 wraps to. A slot whose start equals its end is empty and never
    /// passes, so `00:00`–`00:00` is rejected rather than read as a full day.
    pub fn ends_after_start(&self) -> bool {
        if self.start == self.end {
            return false;
        }
        let end = match self.end {
            TimePoint::MIDNIGHT => 24 * 60,
            end => end.minutes(),
        };
        end > self.start.minutes()
    }

    pub fn set(&mut self, field: SlotField, value: TimePoint) {
        match field {
            SlotField::Start => self.start = value,
            SlotField::End => self.end = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> TimePoint {
        s.parse().unwrap()
    }

    #[test]
    fn midnight_end_counts_as_end_of_day() {
        assert!(TimeSlot::new("a", at("23:00"), at("00:00")).ends_after_start());
        assert!(TimeSlot::new("b", at("09:00"), at("10:00")).ends_after_start());
        assert!(!TimeSlot::new("c", at("10:00"), at("10:00")).ends_after_start());
        assert!(!TimeSlot::new("d", at("11:00"), at("10:00")).ends_after_start());
    }

    #[test]
    fn midnight_to_midnight_is_empty() {
        assert!(!TimeSlot::new("e", at("00:00"), at("00:00")).ends_after_start());
        assert!(TimeSlot::new("f", at("00:00"), at("01:00")).ends_after_start());
    }
}
