use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::ShareError;

/// A weekday column of the availability grid.
///
/// Ordered Monday first so that maps keyed by `DayKey` iterate in
/// calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKey {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayKey {
    pub const ALL: [DayKey; 7] = [
        DayKey::Monday,
        DayKey::Tuesday,
        DayKey::Wednesday,
        DayKey::Thursday,
        DayKey::Friday,
        DayKey::Saturday,
        DayKey::Sunday,
    ];

    /// Identifier used in persisted records and slot ids (`"monday"`).
    pub fn as_str(self) -> &'static str {
        match self {
            DayKey::Monday => "monday",
            DayKey::Tuesday => "tuesday",
            DayKey::Wednesday => "wednesday",
            DayKey::Thursday => "thursday",
            DayKey::Friday => "friday",
            DayKey::Saturday => "saturday",
            DayKey::Sunday => "sunday",
        }
    }

    /// Column header label (`"Mon"`).
    pub fn label(self) -> &'static str {
        match self {
            DayKey::Monday => "Mon",
            DayKey::Tuesday => "Tue",
            DayKey::Wednesday => "Wed",
            DayKey::Thursday => "Thu",
            DayKey::Friday => "Fri",
            DayKey::Saturday => "Sat",
            DayKey::Sunday => "Sun",
        }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayKey {
    type Err = ShareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        DayKey::ALL
            .into_iter()
            .find(|day| day.as_str() == needle || day.label().eq_ignore_ascii_case(&needle))
            .ok_or_else(|| ShareError::Validation(format!("Unknown day: {}", s)))
    }
}
