//! Type definitions for serial date conversion
//!
//! This module defines the calendar value type, the parsed representation of
//! date format templates, and the error type shared by all fallible
//! operations in the crate.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Represents a single token parsed from a date format template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateToken {
    /// Four-digit year (YYYY)
    YearFourDigit,
    /// Zero-padded month number, 01-12 (MM)
    MonthPadded,
    /// Zero-padded day of month, 01-31 (DD)
    DayPadded,
    /// Zero-padded hour in 24-hour time, 00-23 (HH)
    HourPadded,
    /// Zero-padded minute, 00-59 (mm)
    MinutePadded,
    /// Zero-padded second, 00-59 (ss)
    SecondPadded,
    /// Literal character to display directly
    LiteralChar(char),
}

impl TemplateToken {
    /// Returns the template text of a field token, or `None` for a literal.
    ///
    /// Used when a field token occurs a second time in one template: only the
    /// first occurrence is substituted, later ones render as this text.
    pub fn field_text(&self) -> Option<&'static str> {
        match self {
            TemplateToken::YearFourDigit => Some("YYYY"),
            TemplateToken::MonthPadded => Some("MM"),
            TemplateToken::DayPadded => Some("DD"),
            TemplateToken::HourPadded => Some("HH"),
            TemplateToken::MinutePadded => Some("mm"),
            TemplateToken::SecondPadded => Some("ss"),
            TemplateToken::LiteralChar(_) => None,
        }
    }
}

/// A parsed date format template: the token sequence in template order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateTemplate {
    /// Sequence of template tokens
    pub tokens: Vec<TemplateToken>,
}

/// Error type for serial date conversion and calendar construction
///
/// Every variant is a rejected argument: validation happens before any
/// conversion arithmetic runs, and a failed check aborts the call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SerialDateError {
    /// The serial value was NaN or infinite
    NonFiniteSerial(f64),
    /// The serial value maps outside the representable calendar range
    SerialOutOfRange(f64),
    /// No such civil date (bad month, or day not in the month)
    InvalidDate { year: i32, month: u32, day: u32 },
    /// No such time of day
    InvalidTime { hour: u32, minute: u32, second: u32 },
}

impl fmt::Display for SerialDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerialDateError::NonFiniteSerial(value) => {
                write!(f, "serial date must be finite, got {}", value)
            }
            SerialDateError::SerialOutOfRange(value) => {
                write!(f, "serial date {} is outside the representable range", value)
            }
            SerialDateError::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date: {}-{:02}-{:02}", year, month, day)
            }
            SerialDateError::InvalidTime {
                hour,
                minute,
                second,
            } => {
                write!(
                    f,
                    "invalid time of day: {:02}:{:02}:{:02}",
                    hour, minute, second
                )
            }
        }
    }
}

impl std::error::Error for SerialDateError {}

/// A civil date and time in the crate's fixed reference calendar.
///
/// The value is interpreted as UTC; no host timezone or clock is consulted
/// anywhere in the crate, so conversions through serial numbers are
/// deterministic across environments. A `CalendarDateTime` always holds a
/// real calendar instant: construction validates the field ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDateTime(NaiveDateTime);

impl CalendarDateTime {
    /// Creates a `CalendarDateTime` from civil date and time fields.
    ///
    /// # Errors
    ///
    /// Returns [`SerialDateError::InvalidDate`] if the year/month/day triple
    /// is not a real date, or [`SerialDateError::InvalidTime`] if the
    /// hour/minute/second triple is out of range.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, SerialDateError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(SerialDateError::InvalidDate { year, month, day })?;
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or(
            SerialDateError::InvalidTime {
                hour,
                minute,
                second,
            },
        )?;
        Ok(Self(NaiveDateTime::new(date, time)))
    }

    /// Creates a `CalendarDateTime` at midnight on the given date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, SerialDateError> {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Wraps an already-constructed chrono value.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Self(dt)
    }

    /// Returns the underlying chrono value.
    pub fn naive(self) -> NaiveDateTime {
        self.0
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the day of month (1..=31).
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u32 {
        self.0.second()
    }
}

impl From<NaiveDateTime> for CalendarDateTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self(dt)
    }
}
