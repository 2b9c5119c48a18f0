//! Working-time policy validation
//!
//! The policy is validated once at startup and shared by reference with
//! every parse and calculation afterwards; nothing here performs I/O.

use std::collections::BTreeSet;

use chrono::{NaiveTime, Weekday};
use chrono_tz::Tz;

use crate::error::{DueDateError, Result};

/// Immutable snapshot of the working-time policy: the daily working window,
/// the set of working weekdays (1 = Monday .. 7 = Sunday) and the timezone
/// naive timestamps are interpreted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingTimeConfig {
    start: NaiveTime,
    end: NaiveTime,
    working_days: BTreeSet<u8>,
    timezone: Tz,
}

impl WorkingTimeConfig {
    /// Validates the raw policy values. `start` and `end` must be two-digit
    /// `HH:MM` strings with `start < end`; `working_days` must be a
    /// non-empty list of weekday numbers in 1..=7.
    pub fn new(start: &str, end: &str, working_days: &[u8], timezone: Tz) -> Result<Self> {
        let start_time = parse_hhmm(start)?;
        let end_time = parse_hhmm(end)?;
        if start_time >= end_time {
            return Err(DueDateError::configuration(
                "Working hours start must be before end",
            ));
        }

        if working_days.is_empty() || working_days.iter().any(|day| !(1..=7).contains(day)) {
            return Err(DueDateError::configuration(
                "Working days must be a non-empty list of values between 1 and 7",
            ));
        }

        Ok(Self {
            start: start_time,
            end: end_time,
            working_days: working_days.iter().copied().collect(),
            timezone,
        })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn working_days(&self) -> impl Iterator<Item = u8> + '_ {
        self.working_days.iter().copied()
    }

    /// HH:MM rendering of the window start, used in user-facing messages.
    pub fn start_hhmm(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    /// HH:MM rendering of the window end, used in user-facing messages.
    pub fn end_hhmm(&self) -> String {
        self.end.format("%H:%M").to_string()
    }

    pub fn is_working_day(&self, weekday: Weekday) -> bool {
        self.working_days
            .contains(&(weekday.number_from_monday() as u8))
    }

    /// The working window is inclusive at `start` and exclusive at `end`.
    pub fn is_working_time(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

fn parse_hhmm(value: &str) -> Result<NaiveTime> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 5
        && bytes[2] == b':'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || b.is_ascii_digit());
    if !shaped {
        return Err(DueDateError::configuration(
            "Working hours must follow HH:MM format",
        ));
    }
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| DueDateError::configuration("Working hours must follow HH:MM format"))
}
