//! Resolver tool configuration.
//!
//! Loaded via the `config` crate from environment variables prefixed with
//! `BEACON`, nesting with `__`, e.g.
//! `BEACON__RESOLVER__MIN_REPEAT_INTERVAL_SECS=120`.

use beacon_trigger::ResolverConfig;
use serde::Deserialize;

const ENV_PREFIX: &str = "BEACON";
const ENV_SEPARATOR: &str = "__";

/// Tool configuration composed from library configs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Trigger resolution settings.
    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed into its field.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(environment())
    }

    fn from_environment(source: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}
