//! Tick/unit conversion.

use serde::{Deserialize, Serialize};

/// A time unit that a tick count can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    /// Thirty days.
    Month,
}

impl TimeUnit {
    /// Parses a unit name, accepting singular and plural spellings in any case.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        let singular = name.strip_suffix('s').unwrap_or(&name);
        match singular {
            "second" => Some(Self::Second),
            "minute" => Some(Self::Minute),
            "hour" => Some(Self::Hour),
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            _ => None,
        }
    }

    /// Number of seconds in one tick of this unit.
    #[must_use]
    pub const fn seconds(self) -> f64 {
        match self {
            Self::Second => 1.0,
            Self::Minute => 60.0,
            Self::Hour => 3_600.0,
            Self::Day => 86_400.0,
            Self::Week => 604_800.0,
            Self::Month => 2_592_000.0,
        }
    }
}

/// Converts `ticks` of `unit` into seconds.
///
/// Unknown or absent units count the ticks as seconds. The result is never
/// negative: NaN and non-positive products become zero, products that
/// overflow saturate at `f64::MAX`. Callers apply their own floors on top.
#[must_use]
pub fn convert_ticks_to_seconds(ticks: f64, unit: Option<&str>) -> f64 {
    let multiplier = unit.and_then(TimeUnit::parse).map_or(1.0, TimeUnit::seconds);
    let seconds = ticks * multiplier;
    if seconds.is_nan() || seconds <= 0.0 {
        0.0
    } else {
        seconds.min(f64::MAX)
    }
}
