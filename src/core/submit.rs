//! Submit timestamp parsing, validation and canonical formatting

use std::fmt;

use chrono::{DateTime, Datelike, LocalResult, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};

use crate::core::config::WorkingTimeConfig;
use crate::error::{DueDateError, Result};

/// Naive layouts accepted for user-supplied timestamps.
const DATE_TIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// A point in time validated to fall on a working day within working hours,
/// held at minute precision in the configured timezone.
///
/// Equality compares the absolute instant, so two values built from the same
/// moment in different timezones are equal. The canonical textual form is
/// UTC ISO-8601 with a literal `Z` suffix and `:00` seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitInstant {
    moment: DateTime<Tz>,
}

impl SubmitInstant {
    /// Parses a user-supplied timestamp in the configured timezone and
    /// validates it against the working-time policy.
    ///
    /// Offset-carrying RFC 3339 input (the canonical `...Z` form among them)
    /// denotes an absolute instant and is converted into the configured
    /// zone; bare input is read as wall-clock time in that zone.
    pub fn parse(input: &str, config: &WorkingTimeConfig) -> Result<Self> {
        let input = input.trim();
        if let Ok(absolute) = DateTime::parse_from_rfc3339(input) {
            let local = absolute.with_timezone(&config.timezone()).naive_local();
            return Self::from_local(local, config);
        }
        let naive = parse_naive(input)?;
        Self::from_local(naive, config)
    }

    /// Builds an instant from an already-parsed local wall-clock value.
    /// Seconds and sub-seconds are discarded; all downstream arithmetic is
    /// minute-granular.
    pub fn from_local(local: NaiveDateTime, config: &WorkingTimeConfig) -> Result<Self> {
        let truncated = truncate_to_minute(local);

        if !config.is_working_time(truncated.time()) {
            return Err(DueDateError::validation(format!(
                "Submit time must be within working hours ({} - {})",
                config.start_hhmm(),
                config.end_hhmm()
            )));
        }
        if !config.is_working_day(truncated.weekday()) {
            return Err(DueDateError::validation("Submit date must be a working day"));
        }

        let moment = resolve_local(truncated, config.timezone())?;
        Ok(Self { moment })
    }

    /// The timezone-aware moment this instant represents.
    pub fn moment(&self) -> DateTime<Tz> {
        self.moment
    }

    /// Local wall-clock view, the coordinate system the calculator works in.
    pub fn local(&self) -> NaiveDateTime {
        self.moment.naive_local()
    }
}

fn parse_naive(input: &str) -> Result<NaiveDateTime> {
    DATE_TIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(input, layout).ok())
        .ok_or_else(|| DueDateError::validation("Invalid submit date format"))
}

fn truncate_to_minute(local: NaiveDateTime) -> NaiveDateTime {
    local.date().and_time(
        chrono::NaiveTime::from_hms_opt(local.hour(), local.minute(), 0)
            .unwrap_or_else(|| local.time()),
    )
}

/// Maps a local wall-clock value into the zone. An ambiguous time (the
/// fall-back overlap) resolves to the earlier offset; a time that never
/// occurs (the spring-forward gap) is rejected as unparseable.
fn resolve_local(naive: NaiveDateTime, timezone: Tz) -> Result<DateTime<Tz>> {
    match timezone.from_local_datetime(&naive) {
        LocalResult::Single(moment) => Ok(moment),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(DueDateError::validation("Invalid submit date format")),
    }
}

impl fmt::Display for SubmitInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // UTC so the same absolute moment prints identically from any zone.
        write!(
            f,
            "{}",
            self.moment
                .with_timezone(&Utc)
                .format("%Y-%m-%dT%H:%M:%SZ")
        )
    }
}

impl Serialize for SubmitInstant {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
