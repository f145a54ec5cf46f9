//! Calendar fields, repeat units and weekday remapping.

use chrono::{DateTime, Datelike, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

/// Weekday lookup from the caller's numbering to the native calendar's.
///
/// Index 0 is a sentinel and maps to itself.
const WEEKDAY_REMAP: [i64; 8] = [0, 2, 3, 4, 5, 6, 7, 1];

/// Remaps a caller-supplied weekday into the native calendar numbering.
///
/// Returns `None` for values outside the table.
#[must_use]
pub fn remap_weekday(weekday: i64) -> Option<i64> {
    usize::try_from(weekday)
        .ok()
        .and_then(|index| WEEKDAY_REMAP.get(index))
        .copied()
}

/// A calendar unit name accepted by `every`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl CalendarUnit {
    /// Parses a unit name. Matching is case-insensitive and exact.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "minute" => Some(Self::Minute),
            "hour" => Some(Self::Hour),
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            _ => None,
        }
    }

    /// Fields held at the anchor's value when repeating every `unit`.
    ///
    /// `None` stands for an unrecognized unit name, which fixes every field
    /// from year down to second.
    #[must_use]
    pub fn fixed_fields(unit: Option<Self>) -> &'static [CalendarField] {
        use CalendarField::{Day, Hour, Minute, Month, Second, Weekday, Year};

        match unit {
            Some(Self::Minute) => &[Second],
            Some(Self::Hour) => &[Minute, Second],
            Some(Self::Day) => &[Hour, Minute, Second],
            Some(Self::Week) => &[Weekday, Hour, Minute, Second],
            Some(Self::Month) => &[Day, Hour, Minute, Second],
            Some(Self::Year) => &[Month, Day, Hour, Minute, Second],
            None => &[Year, Month, Day, Hour, Minute, Second],
        }
    }
}

/// A wall-clock field a calendar trigger can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarField {
    Year,
    Month,
    Day,
    Weekday,
    Hour,
    Minute,
    Second,
}

/// A partial calendar date; unset fields match any value.
///
/// Weekdays use the native numbering produced by [`remap_weekday`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateComponents {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarter: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_of_year: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_of_month: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday_ordinal: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<i64>,
}

impl DateComponents {
    /// Copies the given fields of `anchor`, read in the anchor's own zone.
    #[must_use]
    pub fn from_anchor<Tz: TimeZone>(anchor: &DateTime<Tz>, fields: &[CalendarField]) -> Self {
        let mut components = Self::default();
        for field in fields {
            match field {
                CalendarField::Year => components.year = Some(i64::from(anchor.year())),
                CalendarField::Month => components.month = Some(i64::from(anchor.month())),
                CalendarField::Day => components.day = Some(i64::from(anchor.day())),
                CalendarField::Weekday => {
                    components.weekday =
                        remap_weekday(i64::from(anchor.weekday().number_from_monday()));
                }
                CalendarField::Hour => components.hour = Some(i64::from(anchor.hour())),
                CalendarField::Minute => components.minute = Some(i64::from(anchor.minute())),
                CalendarField::Second => components.second = Some(i64::from(anchor.second())),
            }
        }
        components
    }

    /// Returns whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
