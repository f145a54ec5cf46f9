//! Resolver configuration.

use serde::Deserialize;

/// Floors and location defaults applied by the resolver.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResolverConfig {
    /// Shortest repeating interval the platform accepts, in seconds.
    #[serde(default = "default_min_repeat_interval_secs")]
    pub min_repeat_interval_secs: f64,

    /// Shortest one-shot delay, in seconds.
    #[serde(default = "default_min_delay_secs")]
    pub min_delay_secs: f64,

    /// Geofence radius used when the schedule omits one.
    #[serde(default = "default_radius_meters")]
    pub default_radius_meters: f64,

    /// Fire on geofence entry when the schedule does not say.
    #[serde(default = "default_notify_on_entry")]
    pub default_notify_on_entry: bool,

    /// Fire on geofence exit when the schedule does not say.
    #[serde(default = "default_notify_on_exit")]
    pub default_notify_on_exit: bool,
}

fn default_min_repeat_interval_secs() -> f64 {
    60.0
}

fn default_min_delay_secs() -> f64 {
    0.01
}

fn default_radius_meters() -> f64 {
    5.0
}

fn default_notify_on_entry() -> bool {
    true
}

fn default_notify_on_exit() -> bool {
    false
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            min_repeat_interval_secs: default_min_repeat_interval_secs(),
            min_delay_secs: default_min_delay_secs(),
            default_radius_meters: default_radius_meters(),
            default_notify_on_entry: default_notify_on_entry(),
            default_notify_on_exit: default_notify_on_exit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolver_config_has_correct_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.min_repeat_interval_secs, 60.0);
        assert_eq!(config.min_delay_secs, 0.01);
        assert_eq!(config.default_radius_meters, 5.0);
        assert!(config.default_notify_on_entry);
        assert!(!config.default_notify_on_exit);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: ResolverConfig =
            serde_json::from_str(r#"{"min_repeat_interval_secs": 900}"#).expect("deserialize");
        assert_eq!(config.min_repeat_interval_secs, 900.0);
        assert_eq!(config.min_delay_secs, 0.01);
    }
}
