//! Integration tests for the calculation pipeline
//!
//! These drive the library the way the binary does: build a config, parse
//! the two user inputs, calculate, and compare the canonical UTC form.

use duedate::{DueDateCalculator, SubmitInstant, Turnaround, WorkingTimeConfig};

fn weekday_config() -> WorkingTimeConfig {
    WorkingTimeConfig::new("09:00", "17:00", &[1, 2, 3, 4, 5], chrono_tz::UTC).unwrap()
}

fn calculate(config: &WorkingTimeConfig, submit: &str, turnaround: &str) -> String {
    let submit = SubmitInstant::parse(submit, config).expect("submit should be valid");
    let turnaround = Turnaround::parse(turnaround).expect("turnaround should be valid");
    DueDateCalculator::new(config)
        .calculate_due_date(&submit, &turnaround)
        .expect("calculation should succeed")
        .to_string()
}

#[test]
fn test_due_date_same_day() {
    assert_eq!(
        calculate(&weekday_config(), "2023-05-15 10:00:00", "2:00"),
        "2023-05-15T12:00:00Z"
    );
}

#[test]
fn test_due_date_next_day() {
    assert_eq!(
        calculate(&weekday_config(), "2023-05-15 16:00:00", "4:00"),
        "2023-05-16T12:00:00Z"
    );
}

#[test]
fn test_due_date_over_weekend() {
    assert_eq!(
        calculate(&weekday_config(), "2023-05-19 15:00:00", "16:00"),
        "2023-05-23T15:00:00Z"
    );
}

#[test]
fn test_due_date_long_turnaround() {
    assert_eq!(
        calculate(&weekday_config(), "2023-05-15 09:00:00", "100:00"),
        "2023-05-31T13:00:00Z"
    );
}

#[test]
fn test_due_date_start_of_working_hours() {
    assert_eq!(
        calculate(&weekday_config(), "2023-05-15 09:00:00", "1:00"),
        "2023-05-15T10:00:00Z"
    );
}

#[test]
fn test_due_date_end_of_working_hours() {
    assert_eq!(
        calculate(&weekday_config(), "2023-05-15 16:59:00", "0:01"),
        "2023-05-16T09:00:00Z"
    );
}

#[test]
fn test_due_date_decimal_hours_turnaround() {
    let turnaround = Turnaround::parse("1.5").unwrap();
    assert_eq!(turnaround.minutes(), 90);
    assert_eq!(turnaround.to_string(), "1:30");

    assert_eq!(
        calculate(&weekday_config(), "2023-05-15 10:00:00", "1.5"),
        "2023-05-15T11:30:00Z"
    );
}

#[test]
fn test_due_date_with_different_working_hours() {
    let config = WorkingTimeConfig::new("08:00", "16:00", &[1, 2, 3, 4, 5], chrono_tz::UTC).unwrap();
    assert_eq!(
        calculate(&config, "2023-05-15 15:00:00", "3:00"),
        "2023-05-16T10:00:00Z"
    );
}

#[test]
fn test_due_date_with_saturday_working() {
    let config =
        WorkingTimeConfig::new("09:00", "17:00", &[1, 2, 3, 4, 5, 6], chrono_tz::UTC).unwrap();
    assert_eq!(
        calculate(&config, "2023-05-19 16:00:00", "10:00"),
        "2023-05-22T10:00:00Z"
    );
}

#[test]
fn test_due_date_with_different_timezone() {
    let config = WorkingTimeConfig::new(
        "09:00",
        "17:00",
        &[1, 2, 3, 4, 5],
        chrono_tz::America::New_York,
    )
    .unwrap();
    // 16:00 New York is 20:00 UTC; four working hours later is next day
    // noon local, 16:00 UTC.
    assert_eq!(
        calculate(&config, "2023-05-15 16:00:00", "4:00"),
        "2023-05-16T16:00:00Z"
    );
}

#[test]
fn test_due_date_over_daylight_saving_transition() {
    let config = WorkingTimeConfig::new(
        "09:00",
        "17:00",
        &[1, 2, 3, 4, 5],
        chrono_tz::America::New_York,
    )
    .unwrap();
    // Submitted the Friday before the 2023 spring-forward; due Monday 10:00
    // local, which is UTC-4 after the transition instead of UTC-5.
    assert_eq!(
        calculate(&config, "2023-03-10 10:00:00", "8:00"),
        "2023-03-13T14:00:00Z"
    );
}

#[test]
fn test_due_date_satisfies_submit_invariant() {
    // The due instant is itself a valid submit instant: feeding it back in
    // must succeed.
    let config = weekday_config();
    let due = calculate(&config, "2023-05-19 15:00:00", "16:00");
    assert!(SubmitInstant::parse(&due, &config).is_ok());
}

#[test]
fn test_workday_minutes_reports_daily_capacity() {
    assert_eq!(
        DueDateCalculator::new(&weekday_config()).calculate_workday_minutes(),
        480
    );
}

#[test]
fn test_invalid_inputs_carry_exact_messages() {
    let config = weekday_config();

    let err = SubmitInstant::parse("gibberish", &config).unwrap_err();
    assert_eq!(err.message(), "Invalid submit date format");

    let err = SubmitInstant::parse("2023-05-15 08:00:00", &config).unwrap_err();
    assert_eq!(
        err.message(),
        "Submit time must be within working hours (09:00 - 17:00)"
    );

    let err = SubmitInstant::parse("2023-05-20 10:00:00", &config).unwrap_err();
    assert_eq!(err.message(), "Submit date must be a working day");

    let err = Turnaround::parse("soon").unwrap_err();
    assert_eq!(err.message(), "Invalid turnaround time format");

    let err = Turnaround::parse("0:00").unwrap_err();
    assert_eq!(err.message(), "Turnaround time must be positive");
}
