//! Calendar value formatting module
//!
//! This module renders calendar values as text according to date format
//! templates. The main entry point is the `format_calendar` function.

use std::fmt::Write;

use crate::parser::parse_date_template;
use crate::types::{CalendarDateTime, DateTemplate, TemplateToken};

/// Template used when callers have no formatting preference
pub const DEFAULT_DATE_TEMPLATE: &str = "YYYY-MM-DD";

/// Tracks which field tokens have already been substituted in one render
#[derive(Default)]
struct SubstitutedFields {
    year: bool,
    month: bool,
    day: bool,
    hour: bool,
    minute: bool,
    second: bool,
}

/// Format a calendar value according to a template string
///
/// Each recognized field token is substituted at its first occurrence only;
/// a template repeating a token (e.g. `"YYYY-YYYY"`) keeps the later
/// occurrences as literal text. Unrecognized characters pass through
/// unchanged and are never an error.
///
/// # Arguments
/// * `dt` - The calendar value to render
/// * `template` - The format template, e.g. [`DEFAULT_DATE_TEMPLATE`]
///
/// # Examples
/// ```
/// use serial_date::{format_calendar, CalendarDateTime, DEFAULT_DATE_TEMPLATE};
///
/// let dt = CalendarDateTime::new(2022, 1, 15, 13, 45, 30).unwrap();
/// assert_eq!(format_calendar(dt, DEFAULT_DATE_TEMPLATE), "2022-01-15");
/// assert_eq!(
///     format_calendar(dt, "DD.MM.YYYY HH:mm:ss"),
///     "15.01.2022 13:45:30"
/// );
/// ```
pub fn format_calendar(dt: CalendarDateTime, template: &str) -> String {
    render_template(dt, &parse_date_template(template))
}

/// Render a calendar value through an already-parsed template
///
/// The cheap path when one template formats many values.
pub fn render_template(dt: CalendarDateTime, template: &DateTemplate) -> String {
    let mut result = String::new();
    let mut substituted = SubstitutedFields::default();

    for token in &template.tokens {
        match token {
            TemplateToken::LiteralChar(c) => result.push(*c),
            TemplateToken::YearFourDigit if !substituted.year => {
                substituted.year = true;
                write!(result, "{:04}", dt.year()).unwrap();
            }
            TemplateToken::MonthPadded if !substituted.month => {
                substituted.month = true;
                write!(result, "{:02}", dt.month()).unwrap();
            }
            TemplateToken::DayPadded if !substituted.day => {
                substituted.day = true;
                write!(result, "{:02}", dt.day()).unwrap();
            }
            TemplateToken::HourPadded if !substituted.hour => {
                substituted.hour = true;
                write!(result, "{:02}", dt.hour()).unwrap();
            }
            TemplateToken::MinutePadded if !substituted.minute => {
                substituted.minute = true;
                write!(result, "{:02}", dt.minute()).unwrap();
            }
            TemplateToken::SecondPadded if !substituted.second => {
                substituted.second = true;
                write!(result, "{:02}", dt.second()).unwrap();
            }
            // A field token seen before renders as its template text.
            repeated => {
                if let Some(text) = repeated.field_text() {
                    result.push_str(text);
                }
            }
        }
    }

    result
}
