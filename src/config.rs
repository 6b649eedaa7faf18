//! Runtime configuration.
//!
//! Values come from the process environment, which `main` first populates
//! from an optional `.env` file.

use chrono_tz::Tz;
use std::error::Error;

/// Upper bound on the number of subnets a single query may enumerate.
pub const DEFAULT_MAX_SUBNETS: u64 = 65_536;
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

pub const ENV_MAX_SUBNETS: &str = "SUBNET_CALC_MAX_SUBNETS";
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";
pub const ENV_TZ: &str = "SUBNET_CALC_TZ";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Queries needing more subnets fail with `RequirementTooLarge`.
    pub max_subnets: u64,
    /// Path of the log4rs YAML file.
    pub log_config: String,
    /// Timezone of the report banner timestamp.
    pub timezone: Tz,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_subnets: DEFAULT_MAX_SUBNETS,
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            timezone: Tz::UTC,
        }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup, unset keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(ENV_MAX_SUBNETS) {
            let max = value
                .trim()
                .parse::<u64>()
                .map_err(|e| format!("{ENV_MAX_SUBNETS}={value}: {e}"))?;
            if max == 0 {
                return Err(format!("{ENV_MAX_SUBNETS} must be at least 1").into());
            }
            config.max_subnets = max;
        }
        if let Some(value) = lookup(ENV_LOG_CONFIG) {
            config.log_config = value;
        }
        if let Some(value) = lookup(ENV_TZ) {
            config.timezone = value
                .trim()
                .parse::<Tz>()
                .map_err(|e| format!("{ENV_TZ}={value}: {e}"))?;
        }

        log::debug!("config {config:?}");
        Ok(config)
    }
}
