//! Schedule specifications parsed from caller-supplied options.
//!
//! Parsing is lenient: numeric fields go through best-effort coercion and
//! anything unparseable becomes zero rather than an error. Only a document
//! that is not JSON at all is rejected.

use crate::error::SpecError;
use serde_json::{Map, Value};

/// Which family of native trigger a schedule asks for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TriggerKind {
    /// Time based trigger.
    #[default]
    Calendar,
    /// Geofence trigger.
    Location,
    /// Unrecognized type name; resolved as a calendar trigger.
    Other(String),
}

impl TriggerKind {
    fn parse(name: &str) -> Self {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("calendar") {
            Self::Calendar
        } else if trimmed.eq_ignore_ascii_case("location") {
            Self::Location
        } else {
            Self::Other(trimmed.to_string())
        }
    }
}

/// Explicit calendar fields a custom repeat must match.
///
/// Weekdays are kept in the caller's numbering here; the resolver remaps
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPattern {
    pub year: Option<i64>,
    pub quarter: Option<i64>,
    pub month: Option<i64>,
    pub week: Option<i64>,
    pub week_of_month: Option<i64>,
    pub weekday: Option<i64>,
    pub weekday_ordinal: Option<i64>,
    pub day: Option<i64>,
    pub hour: Option<i64>,
    pub minute: Option<i64>,
    pub second: Option<i64>,
}

impl FieldPattern {
    fn from_map(map: &Map<String, Value>) -> Self {
        let get = |key: &str| present(map, key).map(coerce_integer);
        Self {
            year: get("year"),
            quarter: get("quarter"),
            month: get("month"),
            week: get("week"),
            week_of_month: get("weekOfMonth"),
            weekday: get("weekday"),
            weekday_ordinal: get("weekdayOrdinal"),
            day: get("day"),
            hour: get("hour"),
            minute: get("minute"),
            second: get("second"),
        }
    }

    /// Returns whether no recognized field was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The `every` option in one of its three shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Every {
    /// A calendar unit name such as `"day"`.
    Unit(String),
    /// A tick count, paired with the schedule's `unit`.
    Ticks(f64),
    /// An explicit field mapping.
    Fields(FieldPattern),
}

impl Every {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => Some(Self::Unit(name.clone())),
            Value::Object(map) => Some(Self::Fields(FieldPattern::from_map(map))),
            Value::Number(_) | Value::Bool(_) => Some(Self::Ticks(coerce_number(value))),
            Value::Null | Value::Array(_) => None,
        }
    }
}

/// A notification's schedule as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleSpec {
    /// Trigger family.
    pub kind: TriggerKind,
    /// Absolute fire time in epoch milliseconds.
    pub at: Option<i64>,
    /// Relative delay in ticks of `unit`.
    pub in_ticks: Option<f64>,
    /// Unit for `in_ticks` and numeric `every`.
    pub unit: Option<String>,
    /// Repeat description.
    pub every: Option<Every>,
    /// Geofence center as `[latitude, longitude]`.
    pub center: Option<[f64; 2]>,
    /// Geofence radius in meters.
    pub radius: Option<f64>,
    /// Fire the geofence only once.
    pub single: Option<bool>,
    /// Fire when entering the geofence.
    pub notify_on_entry: Option<bool>,
    /// Fire when leaving the geofence.
    pub notify_on_exit: Option<bool>,
}

impl ScheduleSpec {
    /// Builds a spec from a notification options object.
    ///
    /// Accepts either the full options (trigger fields nested under
    /// `trigger`, optional top-level `type`) or a bare trigger object.
    /// Anything that is not an object yields the empty spec.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(root) = value.as_object() else {
            return Self::default();
        };
        let trigger = root
            .get("trigger")
            .and_then(Value::as_object)
            .unwrap_or(root);

        let kind = present(trigger, "type")
            .or_else(|| present(root, "type"))
            .and_then(Value::as_str)
            .map(TriggerKind::parse)
            .unwrap_or_default();

        Self {
            kind,
            at: present(trigger, "at").map(coerce_integer),
            in_ticks: present(trigger, "in").map(coerce_number),
            unit: present(trigger, "unit")
                .and_then(Value::as_str)
                .map(str::to_string),
            every: present(trigger, "every").and_then(Every::from_value),
            center: present(trigger, "center").map(coerce_center),
            radius: present(trigger, "radius").map(coerce_number),
            single: present(trigger, "single").map(coerce_bool),
            notify_on_entry: present(trigger, "notifyOnEntry").map(coerce_bool),
            notify_on_exit: present(trigger, "notifyOnExit").map(coerce_bool),
        }
    }

    /// Parses a JSON document and builds a spec from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or its root is not an
    /// object.
    pub fn from_json_str(text: &str) -> beacon_core::Result<Self, SpecError> {
        let value: Value = serde_json::from_str(text).map_err(|e| SpecError::InvalidJson {
            reason: e.to_string(),
        })?;
        if !value.is_object() {
            return Err(SpecError::NotAnObject {
                found: json_type_name(&value),
            }
            .into());
        }
        Ok(Self::from_value(&value))
    }

    /// Returns whether `every` describes a repetition.
    #[must_use]
    pub fn is_repeating(&self) -> bool {
        match &self.every {
            Some(Every::Unit(name)) => !name.is_empty(),
            Some(Every::Fields(pattern)) => !pattern.is_empty(),
            Some(Every::Ticks(ticks)) => *ticks > 0.0,
            None => false,
        }
    }
}

fn present<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|value| !value.is_null())
}

fn coerce_number(value: &Value) -> f64 {
    let number = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    };
    if number.is_finite() { number } else { 0.0 }
}

fn coerce_integer(value: &Value) -> i64 {
    match value {
        Value::Number(n) if n.is_i64() => n.as_i64().unwrap_or(0),
        // Float-to-int casts saturate.
        _ => coerce_number(value).trunc() as i64,
    }
}

fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) if s.trim().eq_ignore_ascii_case("true") => true,
        Value::String(s) if s.trim().eq_ignore_ascii_case("false") => false,
        _ => coerce_number(value) != 0.0,
    }
}

fn coerce_center(value: &Value) -> [f64; 2] {
    let coordinate = |index: usize| {
        value
            .as_array()
            .and_then(|items| items.get(index))
            .map_or(0.0, coerce_number)
    };
    [coordinate(0), coordinate(1)]
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_nested_trigger() {
        let spec = ScheduleSpec::from_value(&json!({
            "id": 1,
            "trigger": { "in": 30, "unit": "minute" }
        }));

        assert_eq!(spec.kind, TriggerKind::Calendar);
        assert_eq!(spec.in_ticks, Some(30.0));
        assert_eq!(spec.unit.as_deref(), Some("minute"));
        assert!(!spec.is_repeating());
    }

    #[test]
    fn parses_bare_trigger() {
        let spec = ScheduleSpec::from_value(&json!({ "at": 1_700_000_000_000_i64 }));
        assert_eq!(spec.at, Some(1_700_000_000_000));
    }

    #[test]
    fn type_can_live_on_root_or_trigger() {
        let root = ScheduleSpec::from_value(&json!({ "type": "location", "trigger": {} }));
        assert_eq!(root.kind, TriggerKind::Location);

        let nested = ScheduleSpec::from_value(&json!({ "trigger": { "type": "Location" } }));
        assert_eq!(nested.kind, TriggerKind::Location);

        let other = ScheduleSpec::from_value(&json!({ "trigger": { "type": "beacon" } }));
        assert_eq!(other.kind, TriggerKind::Other("beacon".to_string()));
    }

    #[test]
    fn coerces_malformed_numbers_to_zero() {
        let spec = ScheduleSpec::from_value(&json!({
            "trigger": { "in": "soon", "at": "later", "radius": "12.5" }
        }));

        assert_eq!(spec.in_ticks, Some(0.0));
        assert_eq!(spec.at, Some(0));
        assert_eq!(spec.radius, Some(12.5));
    }

    #[test]
    fn every_shapes() {
        let unit = ScheduleSpec::from_value(&json!({ "every": "day" }));
        assert_eq!(unit.every, Some(Every::Unit("day".to_string())));
        assert!(unit.is_repeating());

        let ticks = ScheduleSpec::from_value(&json!({ "every": 5, "unit": "minute" }));
        assert_eq!(ticks.every, Some(Every::Ticks(5.0)));
        assert!(ticks.is_repeating());

        let fields = ScheduleSpec::from_value(&json!({ "every": { "weekday": "1", "hour": 9 } }));
        match fields.every {
            Some(Every::Fields(ref pattern)) => {
                assert_eq!(pattern.weekday, Some(1));
                assert_eq!(pattern.hour, Some(9));
            }
            ref other => panic!("unexpected every: {other:?}"),
        }
        assert!(fields.is_repeating());
    }

    #[test]
    fn empty_or_non_positive_every_is_not_repeating() {
        for every in [json!(""), json!({}), json!({ "unknown": 1 }), json!(0), json!(-3)] {
            let spec = ScheduleSpec::from_value(&json!({ "every": every.clone() }));
            assert!(!spec.is_repeating(), "every = {every}");
        }
        assert!(!ScheduleSpec::from_value(&json!({ "every": null })).is_repeating());
    }

    #[test]
    fn location_fields() {
        let spec = ScheduleSpec::from_value(&json!({
            "trigger": {
                "type": "location",
                "center": [52.1, 4.3],
                "radius": 100,
                "single": true,
                "notifyOnExit": 1
            }
        }));

        assert_eq!(spec.center, Some([52.1, 4.3]));
        assert_eq!(spec.radius, Some(100.0));
        assert_eq!(spec.single, Some(true));
        assert_eq!(spec.notify_on_entry, None);
        assert_eq!(spec.notify_on_exit, Some(true));
    }

    #[test]
    fn boolean_strings_follow_numeric_coercion() {
        let cases = [
            (json!("1"), true),
            (json!("0"), false),
            (json!(" TRUE "), true),
            (json!("false"), false),
            (json!("yes"), false),
            (json!(2.5), true),
        ];
        for (value, expected) in cases {
            let spec =
                ScheduleSpec::from_value(&json!({ "trigger": { "single": value.clone() } }));
            assert_eq!(spec.single, Some(expected), "single = {value}");
        }
    }

    #[test]
    fn non_object_value_is_empty_spec() {
        assert_eq!(ScheduleSpec::from_value(&json!([1, 2])), ScheduleSpec::default());
    }

    #[test]
    fn from_json_str_errors() {
        let err = ScheduleSpec::from_json_str("{ nope").unwrap_err();
        assert!(err.to_string().contains("invalid schedule JSON"));

        let err = ScheduleSpec::from_json_str("42").unwrap_err();
        assert!(err.to_string().contains("expected a JSON object, found number"));

        let spec = ScheduleSpec::from_json_str(r#"{"trigger":{"every":"hour"}}"#)
            .expect("valid document");
        assert!(spec.is_repeating());
    }
}
