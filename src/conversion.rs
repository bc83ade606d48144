//! Serial date conversion
//!
//! Converts between 1900-system serial day counts and calendar values.
//! Serial 0 is 1899-12-31T00:00:00 and serial 1 is 1900-01-01; the
//! fractional part of a serial is the elapsed fraction of a 24-hour day.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::types::{CalendarDateTime, SerialDateError};

/// Milliseconds in a day
const MILLISECONDS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// The 1900 date system incorrectly treats 1900 as a leap year: serial 60 is
/// a phantom 1900-02-29, and every serial from 60 on is offset by one from
/// the real calendar.
const LEAP_BUG_OFFSET: f64 = 1.0;

/// First serial affected by the phantom leap day
const LEAP_BUG_SERIAL: f64 = 60.0;

/// Serial 0, the day before the numbering convention's first day.
fn serial_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 31)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("serial epoch is a valid calendar date")
}

/// Serial 1, the numbering convention's first day (1900-01-01).
fn day_one() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1900, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("day one is a valid calendar date")
}

/// Convert a serial day count to a calendar value
///
/// With `adjust_leap_bug` set, serials on or past the phantom leap day
/// (serial 60) are shifted down by one so they land on the real calendar;
/// the phantom serial 60 itself collapses onto 1900-02-28. Time of day is
/// taken from the fractional part at millisecond resolution.
///
/// # Arguments
/// * `serial` - Whole and fractional days since 1899-12-31
/// * `adjust_leap_bug` - Whether to correct for the phantom 1900-02-29
///
/// # Errors
/// * [`SerialDateError::NonFiniteSerial`] if `serial` is NaN or infinite
/// * [`SerialDateError::SerialOutOfRange`] if the result is not a
///   representable calendar instant
///
/// # Examples
/// ```
/// use serial_date::{serial_to_calendar, CalendarDateTime};
///
/// let dt = serial_to_calendar(43831.0, true).unwrap();
/// assert_eq!(dt, CalendarDateTime::from_ymd(2020, 1, 1).unwrap());
/// ```
pub fn serial_to_calendar(
    serial: f64,
    adjust_leap_bug: bool,
) -> Result<CalendarDateTime, SerialDateError> {
    if !serial.is_finite() {
        return Err(SerialDateError::NonFiniteSerial(serial));
    }

    let effective = if adjust_leap_bug && serial >= LEAP_BUG_SERIAL {
        serial - LEAP_BUG_OFFSET
    } else {
        serial
    };

    let millis = effective * MILLISECONDS_PER_DAY;
    // Reject magnitudes the millisecond clock cannot hold before casting.
    if millis <= i64::MIN as f64 || millis >= i64::MAX as f64 {
        return Err(SerialDateError::SerialOutOfRange(serial));
    }

    serial_epoch()
        .checked_add_signed(TimeDelta::milliseconds(millis.round() as i64))
        .map(CalendarDateTime::from_naive)
        .ok_or(SerialDateError::SerialOutOfRange(serial))
}

/// Convert a calendar value to a serial day count
///
/// Inverse of [`serial_to_calendar`]: elapsed days since 1900-01-01 plus
/// one, so day one maps to serial 1. With `adjust_leap_bug` set, raw
/// serials of 60 or more are shifted up by one, skipping the phantom
/// 1900-02-29.
///
/// The result keeps the fractional day and may carry floating-point noise
/// from the day division; callers needing an integer day round explicitly.
///
/// # Examples
/// ```
/// use serial_date::{calendar_to_serial, CalendarDateTime};
///
/// let dt = CalendarDateTime::from_ymd(2020, 1, 1).unwrap();
/// assert_eq!(calendar_to_serial(dt, true).round(), 43831.0);
/// ```
pub fn calendar_to_serial(dt: CalendarDateTime, adjust_leap_bug: bool) -> f64 {
    let elapsed = dt.naive().signed_duration_since(day_one());
    let mut serial = elapsed.num_milliseconds() as f64 / MILLISECONDS_PER_DAY + 1.0;

    if adjust_leap_bug && serial >= LEAP_BUG_SERIAL {
        serial += LEAP_BUG_OFFSET;
    }

    serial
}
