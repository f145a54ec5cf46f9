//! Resolved trigger descriptions handed to the native scheduler.

use crate::calendar::{CalendarField, DateComponents};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// The concrete trigger for one notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TriggerResult {
    /// Fire once at an absolute time, in epoch milliseconds.
    OneShotAt { at: i64 },
    /// Fire once after a delay.
    OneShotAfter { seconds: f64 },
    /// Fire every `seconds`.
    RepeatingInterval { seconds: f64 },
    /// Fire whenever the `matched` fields equal the anchor's values.
    RepeatingCalendarPattern {
        matched: Vec<CalendarField>,
        components: DateComponents,
        anchor: DateTime<Utc>,
    },
    /// Fire whenever wall-clock time matches `components`.
    RepeatingCustomPattern {
        components: DateComponents,
        repeats: bool,
    },
    /// Fire on geofence entry and/or exit.
    RegionTrigger {
        center: Coordinate,
        radius_meters: f64,
        notify_on_entry: bool,
        notify_on_exit: bool,
        repeats: bool,
    },
}

impl TriggerResult {
    /// Returns whether the trigger fires more than once.
    #[must_use]
    pub fn repeats(&self) -> bool {
        match self {
            Self::OneShotAt { .. } | Self::OneShotAfter { .. } => false,
            Self::RepeatingInterval { .. } | Self::RepeatingCalendarPattern { .. } => true,
            Self::RepeatingCustomPattern { repeats, .. } | Self::RegionTrigger { repeats, .. } => {
                *repeats
            }
        }
    }

    /// Returns the absolute fire time of a one-shot-at trigger.
    ///
    /// `None` for every other kind, or when the timestamp is out of range.
    #[must_use]
    pub fn fire_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::OneShotAt { at } => DateTime::<Utc>::from_timestamp_millis(*at),
            _ => None,
        }
    }
}
