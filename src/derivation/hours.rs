//! Attendance hours calculation.
//!
//! Attendance records store clock times as `HH:MM` strings plus an unpaid
//! break duration in minutes. This module derives the worked hours for a
//! record, degrading to `None` when the inputs are insufficient.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

/// Parses an `HH:MM` clock string into minutes since midnight.
///
/// `NaiveTime` enforces the 0-23 hour / 0-59 minute ranges, so out-of-range
/// strings degrade to `None` like any other unparseable input.
fn clock_minutes(raw: &str) -> Option<i64> {
    let time = NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok()?;
    Some(i64::from(time.hour()) * 60 + i64::from(time.minute()))
}

/// Calculates the hours worked for an attendance record.
///
/// Both clock times are parsed as `HH:MM`; if either is missing or
/// unparseable the result is `None`. Otherwise the worked minutes are
/// `check_out - check_in - break_minutes` (break defaulting to zero),
/// clamped at zero, and returned as a decimal number of hours with no
/// rounding. Checkout earlier than checkin yields zero rather than wrapping
/// to the next day.
///
/// # Example
///
/// ```
/// use portal_engine::derivation::hours_worked;
/// use rust_decimal::Decimal;
///
/// assert_eq!(hours_worked(Some("09:00"), Some("17:00"), Some(60)), Some(Decimal::from(7)));
/// assert_eq!(hours_worked(None, Some("17:00"), Some(0)), None);
/// ```
pub fn hours_worked(
    check_in: Option<&str>,
    check_out: Option<&str>,
    break_minutes: Option<i64>,
) -> Option<Decimal> {
    let check_in_minutes = check_in.and_then(clock_minutes)?;
    let check_out_minutes = check_out.and_then(clock_minutes)?;

    let raw = check_out_minutes - check_in_minutes - break_minutes.unwrap_or(0);
    let worked_minutes = raw.max(0);

    Some(Decimal::new(worked_minutes, 0) / Decimal::new(60, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        use std::str::FromStr;
        Decimal::from_str(s).unwrap()
    }

    /// AH-001: standard day with a one-hour break
    #[test]
    fn test_standard_day_with_break() {
        assert_eq!(hours_worked(Some("09:00"), Some("17:00"), Some(60)), Some(dec("7")));
    }

    /// AH-002: no break recorded
    #[test]
    fn test_no_break() {
        assert_eq!(hours_worked(Some("09:00"), Some("17:00"), None), Some(dec("8")));
        assert_eq!(hours_worked(Some("09:00"), Some("17:00"), Some(0)), Some(dec("8")));
    }

    /// AH-003: checkout before checkin clamps to zero
    #[test]
    fn test_inverted_times_clamp_to_zero() {
        assert_eq!(hours_worked(Some("09:00"), Some("08:00"), Some(0)), Some(dec("0")));
    }

    /// AH-004: missing either clock time yields null
    #[test]
    fn test_missing_clock_times() {
        assert_eq!(hours_worked(None, Some("17:00"), Some(0)), None);
        assert_eq!(hours_worked(Some("09:00"), None, Some(0)), None);
        assert_eq!(hours_worked(None, None, None), None);
    }

    /// AH-005: unparseable clock strings yield null
    #[test]
    fn test_unparseable_clock_times() {
        assert_eq!(hours_worked(Some(""), Some("17:00"), Some(0)), None);
        assert_eq!(hours_worked(Some("nine"), Some("17:00"), Some(0)), None);
        assert_eq!(hours_worked(Some("09:00"), Some("25:00"), Some(0)), None);
        assert_eq!(hours_worked(Some("09:61"), Some("17:00"), Some(0)), None);
    }

    /// AH-006: fractional hours are exact, not rounded
    #[test]
    fn test_fractional_hours_not_rounded() {
        // 09:00 to 16:50 with a 25 minute break: 445 minutes.
        let hours = hours_worked(Some("09:00"), Some("16:50"), Some(25)).unwrap();
        assert_eq!(hours * Decimal::new(60, 0), dec("445"));
    }

    /// AH-007: a break longer than the shift clamps to zero
    #[test]
    fn test_break_longer_than_shift() {
        assert_eq!(hours_worked(Some("09:00"), Some("10:00"), Some(90)), Some(dec("0")));
    }

    #[test]
    fn test_whitespace_around_clock_times() {
        assert_eq!(hours_worked(Some(" 09:00 "), Some("17:00"), Some(0)), Some(dec("8")));
    }

    #[test]
    fn test_zero_duration_record() {
        assert_eq!(hours_worked(Some("09:00"), Some("09:00"), Some(0)), Some(dec("0")));
    }

    proptest! {
        /// Any computable result is non-negative.
        #[test]
        fn prop_hours_never_negative(
            in_h in 0u32..24, in_m in 0u32..60,
            out_h in 0u32..24, out_m in 0u32..60,
            break_minutes in 0i64..600,
        ) {
            let check_in = format!("{in_h:02}:{in_m:02}");
            let check_out = format!("{out_h:02}:{out_m:02}");
            let hours = hours_worked(Some(&check_in), Some(&check_out), Some(break_minutes));
            prop_assert!(hours.is_some());
            prop_assert!(hours.unwrap() >= Decimal::ZERO);
        }

        /// Same inputs always produce the same output.
        #[test]
        fn prop_hours_idempotent(
            in_h in 0u32..24, in_m in 0u32..60,
            out_h in 0u32..24, out_m in 0u32..60,
            break_minutes in proptest::option::of(-120i64..600),
        ) {
            let check_in = format!("{in_h:02}:{in_m:02}");
            let check_out = format!("{out_h:02}:{out_m:02}");
            let first = hours_worked(Some(&check_in), Some(&check_out), break_minutes);
            let second = hours_worked(Some(&check_in), Some(&check_out), break_minutes);
            prop_assert_eq!(first, second);
        }
    }
}
