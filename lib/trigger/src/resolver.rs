//! Resolution of schedules into concrete triggers.
//!
//! The decision order is:
//!
//! 1. Location schedules become a [`TriggerResult::RegionTrigger`].
//! 2. Non-repeating schedules fire once, at `at` or after `in` ticks.
//! 3. Repeating schedules become a calendar pattern (unit name), a custom
//!    pattern (field mapping) or a fixed interval (tick count).
//!
//! Resolution is pure apart from diagnostic logging and never fails.

use crate::calendar::{CalendarUnit, DateComponents, remap_weekday};
use crate::config::ResolverConfig;
use crate::result::{Coordinate, TriggerResult};
use crate::schedule::{Every, FieldPattern, ScheduleSpec, TriggerKind};
use crate::unit::convert_ticks_to_seconds;
use chrono::{DateTime, TimeZone, Utc};
use tracing::{debug, warn};

/// Resolves schedules using a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct TriggerResolver {
    config: ResolverConfig,
}

impl TriggerResolver {
    /// Creates a resolver with the given configuration.
    #[must_use]
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves `spec` relative to `now`.
    ///
    /// Calendar fields are read in the time zone of `now`.
    #[must_use]
    pub fn resolve<Tz: TimeZone>(&self, spec: &ScheduleSpec, now: &DateTime<Tz>) -> TriggerResult {
        match &spec.kind {
            TriggerKind::Location => return self.region(spec),
            TriggerKind::Other(kind) => {
                debug!(kind = %kind, "unknown trigger type, resolving as calendar");
            }
            TriggerKind::Calendar => {}
        }

        let every = match &spec.every {
            Some(every) if spec.is_repeating() => every,
            _ => return self.one_shot(spec),
        };

        match every {
            Every::Unit(name) => Self::calendar_pattern(name, spec.at, now),
            Every::Fields(pattern) => Self::custom_pattern(pattern),
            Every::Ticks(ticks) => self.interval(*ticks, spec.unit.as_deref()),
        }
    }

    fn one_shot(&self, spec: &ScheduleSpec) -> TriggerResult {
        if let Some(at) = spec.at {
            return TriggerResult::OneShotAt { at };
        }

        let seconds = convert_ticks_to_seconds(spec.in_ticks.unwrap_or(0.0), spec.unit.as_deref());
        TriggerResult::OneShotAfter {
            seconds: seconds.max(self.config.min_delay_secs),
        }
    }

    fn interval(&self, ticks: f64, unit: Option<&str>) -> TriggerResult {
        let floor = self.config.min_repeat_interval_secs;
        let mut seconds = convert_ticks_to_seconds(ticks, unit);
        if seconds < floor {
            warn!(
                requested_secs = seconds,
                floor_secs = floor,
                "repeating interval below platform minimum, clamping"
            );
            seconds = floor;
        }
        TriggerResult::RepeatingInterval { seconds }
    }

    fn calendar_pattern<Tz: TimeZone>(
        name: &str,
        at: Option<i64>,
        now: &DateTime<Tz>,
    ) -> TriggerResult {
        let unit = CalendarUnit::parse(name);
        if unit.is_none() {
            debug!(unit = name, "unrecognized repeat unit, matching every field");
        }

        let anchor = match at {
            Some(millis) => match DateTime::<Utc>::from_timestamp_millis(millis) {
                Some(anchor) => anchor.with_timezone(&now.timezone()),
                None => {
                    warn!(at = millis, "anchor timestamp out of range, using now");
                    now.clone()
                }
            },
            None => now.clone(),
        };

        let fields = CalendarUnit::fixed_fields(unit);
        TriggerResult::RepeatingCalendarPattern {
            matched: fields.to_vec(),
            components: DateComponents::from_anchor(&anchor, fields),
            anchor: anchor.with_timezone(&Utc),
        }
    }

    fn custom_pattern(pattern: &FieldPattern) -> TriggerResult {
        let weekday = pattern.weekday.and_then(|day| {
            let mapped = remap_weekday(day);
            if mapped.is_none() {
                warn!(weekday = day, "weekday outside 0-7, dropping it from the pattern");
            }
            mapped
        });

        TriggerResult::RepeatingCustomPattern {
            components: DateComponents {
                year: pattern.year,
                quarter: pattern.quarter,
                month: pattern.month,
                week_of_year: pattern.week,
                week_of_month: pattern.week_of_month,
                weekday,
                weekday_ordinal: pattern.weekday_ordinal,
                day: pattern.day,
                hour: pattern.hour,
                minute: pattern.minute,
                second: Some(pattern.second.unwrap_or(0)),
            },
            repeats: true,
        }
    }

    fn region(&self, spec: &ScheduleSpec) -> TriggerResult {
        let [latitude, longitude] = spec.center.unwrap_or([0.0, 0.0]);
        TriggerResult::RegionTrigger {
            center: Coordinate {
                latitude,
                longitude,
            },
            radius_meters: spec
                .radius
                .unwrap_or(self.config.default_radius_meters)
                .max(0.0),
            notify_on_entry: spec
                .notify_on_entry
                .unwrap_or(self.config.default_notify_on_entry),
            notify_on_exit: spec
                .notify_on_exit
                .unwrap_or(self.config.default_notify_on_exit),
            repeats: !spec.single.unwrap_or(false),
        }
    }
}

/// Resolves `spec` relative to `now` with the default configuration.
#[must_use]
pub fn resolve<Tz: TimeZone>(spec: &ScheduleSpec, now: &DateTime<Tz>) -> TriggerResult {
    TriggerResolver::default().resolve(spec, now)
}
