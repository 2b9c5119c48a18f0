//! Turnaround time parsing and canonical formatting

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{DueDateError, Result};

/// A required amount of working time, normalized to whole minutes.
///
/// Accepted inputs are either a bare number of hours (`"8"`, `"1.5"`) or an
/// `H:MM` string (`"2:30"`, `"100:00"`) with unbounded hours. The canonical
/// form is always `H:MM` with two-digit minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Turnaround {
    minutes: i64,
}

impl Turnaround {
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if let Some((hours, minutes)) = input.split_once(':') {
            let all_digits = !hours.is_empty()
                && !minutes.is_empty()
                && hours.bytes().all(|b| b.is_ascii_digit())
                && minutes.bytes().all(|b| b.is_ascii_digit());
            let total = all_digits
                .then(|| hours.parse::<i64>().ok().zip(minutes.parse::<i64>().ok()))
                .flatten()
                .and_then(|(hours, minutes)| hours.checked_mul(60)?.checked_add(minutes))
                .ok_or_else(|| DueDateError::validation("Invalid turnaround time format"))?;
            return Self::from_minutes(total);
        }

        // No colon: the value is a number of hours, integer or decimal.
        let hours: f64 = input
            .parse()
            .map_err(|_| DueDateError::validation("Invalid turnaround time format"))?;
        Self::from_hours(hours)
    }

    /// Builds a turnaround from a number of hours, rounding to the nearest
    /// whole minute the same way the numeric input form does.
    pub fn from_hours(hours: f64) -> Result<Self> {
        if !hours.is_finite() {
            return Err(DueDateError::validation("Invalid turnaround time format"));
        }
        Self::from_minutes((hours * 60.0).round() as i64)
    }

    pub fn from_minutes(minutes: i64) -> Result<Self> {
        if minutes <= 0 {
            return Err(DueDateError::validation("Turnaround time must be positive"));
        }
        Ok(Self { minutes })
    }

    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    /// Fractional hours, for display alongside the canonical form.
    pub fn hours(&self) -> f64 {
        self.minutes as f64 / 60.0
    }
}

impl fmt::Display for Turnaround {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}

impl Serialize for Turnaround {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
