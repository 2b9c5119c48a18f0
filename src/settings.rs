//! Process configuration sourced from the environment
//!
//! Raw working-time settings come from environment variables with built-in
//! defaults and may be overridden per invocation on the command line. They
//! stay plain strings here; `WorkingTimeConfig` owns all validation.

use std::env;

use chrono_tz::Tz;

use crate::core::config::WorkingTimeConfig;
use crate::error::{DueDateError, Result};

pub const ENV_WORKING_HOURS_START: &str = "WORKING_HOURS_START";
pub const ENV_WORKING_HOURS_END: &str = "WORKING_HOURS_END";
pub const ENV_WORKING_DAYS: &str = "WORKING_DAYS";
pub const ENV_TIMEZONE: &str = "DUEDATE_TIMEZONE";

pub const DEFAULT_WORKING_HOURS_START: &str = "09:00";
pub const DEFAULT_WORKING_HOURS_END: &str = "17:00";
pub const DEFAULT_WORKING_DAYS: &str = "1,2,3,4,5";
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Raw settings before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub working_hours_start: String,
    pub working_hours_end: String,
    pub working_days: String,
    pub timezone: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            working_hours_start: DEFAULT_WORKING_HOURS_START.to_string(),
            working_hours_end: DEFAULT_WORKING_HOURS_END.to_string(),
            working_days: DEFAULT_WORKING_DAYS.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl Settings {
    /// Reads the environment, falling back to the defaults for unset or
    /// blank variables.
    pub fn from_env() -> Self {
        Self {
            working_hours_start: env_or(ENV_WORKING_HOURS_START, DEFAULT_WORKING_HOURS_START),
            working_hours_end: env_or(ENV_WORKING_HOURS_END, DEFAULT_WORKING_HOURS_END),
            working_days: env_or(ENV_WORKING_DAYS, DEFAULT_WORKING_DAYS),
            timezone: env_or(ENV_TIMEZONE, DEFAULT_TIMEZONE),
        }
    }

    /// Validates the raw settings into an immutable working-time policy.
    pub fn into_config(self) -> Result<WorkingTimeConfig> {
        let timezone: Tz = self
            .timezone
            .parse()
            .map_err(|_| DueDateError::configuration(format!("Unknown timezone: {}", self.timezone)))?;
        let days = parse_working_days(&self.working_days)?;
        WorkingTimeConfig::new(
            &self.working_hours_start,
            &self.working_hours_end,
            &days,
            timezone,
        )
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Comma-separated weekday numbers. Empty segments (a trailing comma, say)
/// are tolerated; anything non-numeric is a configuration error rather than
/// being silently dropped.
fn parse_working_days(raw: &str) -> Result<Vec<u8>> {
    let mut days = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let day = part.parse::<u8>().map_err(|_| {
            DueDateError::configuration(
                "Working days must be a non-empty list of values between 1 and 7",
            )
        })?;
        days.push(day);
    }
    Ok(days)
}
