use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::ShareError;

/// Minute offsets a time point must use to survive a save.
pub const ACCEPTED_MINUTES: [u16; 4] = [0, 15, 30, 45];

/// First and last hour rendered as a clickable grid row.
pub const GRID_FIRST_HOUR: u16 = 0;
pub const GRID_LAST_HOUR: u16 = 22;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day on the availability grid, written `HH:MM`.
///
/// Stored as minutes since midnight so that ordering and gap arithmetic
/// are plain integer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimePoint(u16);

impl TimePoint {
    pub const MIDNIGHT: TimePoint = TimePoint(0);

    pub fn new(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(TimePoint(hour * 60 + minute))
        } else {
            None
        }
    }

    /// `HH:00`, with the hour taken modulo 24.
    pub const fn on_the_hour(hour: u16) -> Self {
        TimePoint((hour % 24) * 60)
    }

    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(TimePoint(minutes))
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Whether the minute component is one of the accepted quarter-hour offsets.
    pub fn is_valid_interval(self) -> bool {
        ACCEPTED_MINUTES.contains(&self.minute())
    }

    /// The same minute one hour later, wrapping 23:xx to 00:xx.
    pub fn next_hour_wrapping(self) -> TimePoint {
        TimePoint((self.0 + 60) % MINUTES_PER_DAY)
    }

    /// Hourly rows of the clickable grid, 00:00 through 22:00.
    pub fn grid() -> impl Iterator<Item = TimePoint> {
        (GRID_FIRST_HOUR..=GRID_LAST_HOUR).map(TimePoint::on_the_hour)
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimePoint {
    type Err = ShareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ShareError::Validation(format!("Invalid time: {:?}", s));

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let is_number = |part: &str| {
            (1..=2).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !is_number(hour) || minute.len() != 2 || !is_number(minute) {
            return Err(invalid());
        }

        let hour: u16 = hour.parse().map_err(|_| invalid())?;
        let minute: u16 = minute.parse().map_err(|_| invalid())?;
        TimePoint::new(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for TimePoint {
    type Error = ShareError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimePoint> for String {
    fn from(value: TimePoint) -> Self {
        value.to_string()
    }
}
