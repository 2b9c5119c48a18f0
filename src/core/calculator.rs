//! Due date calculation
//!
//! Advances a validated submit instant through the configured working
//! windows until the turnaround is spent. Non-working time is free: the
//! cursor jumps over evenings, nights and whole non-working days without
//! consuming any turnaround minutes.

use chrono::{Datelike, Duration, NaiveDateTime};

use crate::core::config::WorkingTimeConfig;
use crate::core::submit::SubmitInstant;
use crate::core::turnaround::Turnaround;
use crate::error::Result;

/// Stateless calculation component over an injected working-time policy.
pub struct DueDateCalculator<'a> {
    config: &'a WorkingTimeConfig,
}

impl<'a> DueDateCalculator<'a> {
    pub fn new(config: &'a WorkingTimeConfig) -> Self {
        Self { config }
    }

    /// Computes the due instant for a submit instant and a turnaround.
    ///
    /// The turnaround is consumed strictly as working minutes. The result
    /// lands on a working day inside the working window for any validated
    /// inputs; it is re-validated on construction, so the error path is
    /// unreachable under the type-level preconditions.
    pub fn calculate_due_date(
        &self,
        submit: &SubmitInstant,
        turnaround: &Turnaround,
    ) -> Result<SubmitInstant> {
        // All arithmetic is on local wall-clock minutes. A DST-shortened or
        // -lengthened day changes nothing about the local minute counts.
        let mut cursor = submit.local();
        let mut remaining = turnaround.minutes();

        while remaining > 0 {
            let day_end = cursor.date().and_time(self.config.end());
            let minutes_to_day_end = (day_end - cursor).num_minutes();

            // Strict comparison: landing exactly on day end rolls over to
            // the next working day, since the window excludes its end.
            if remaining < minutes_to_day_end {
                cursor += Duration::minutes(remaining);
                break;
            }

            remaining -= minutes_to_day_end;
            cursor = self.next_working_day_start(cursor);
        }

        SubmitInstant::from_local(cursor, self.config)
    }

    /// Daily working capacity in minutes.
    pub fn calculate_workday_minutes(&self) -> i64 {
        (self.config.end() - self.config.start()).num_minutes()
    }

    fn next_working_day_start(&self, cursor: NaiveDateTime) -> NaiveDateTime {
        let mut day = cursor.date() + Duration::days(1);
        while !self.config.is_working_day(day.weekday()) {
            day += Duration::days(1);
        }
        day.and_time(self.config.start())
    }
}
