use winnow::error::ErrMode;
use winnow::token::{any, literal};
use winnow::{ModalResult, Parser};

use crate::types::TemplateToken;

// Field token parsers. Matching is case-sensitive: MM is a month while mm is
// a minute, so the Caseless matching common in spreadsheet format codes does
// not apply here.

// Date related parsers
pub fn parse_year_four_digit(input: &mut &str) -> ModalResult<TemplateToken> {
    literal("YYYY")
        .value(TemplateToken::YearFourDigit)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_month_padded(input: &mut &str) -> ModalResult<TemplateToken> {
    literal("MM")
        .value(TemplateToken::MonthPadded)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_day_padded(input: &mut &str) -> ModalResult<TemplateToken> {
    literal("DD")
        .value(TemplateToken::DayPadded)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

// Time related parsers
pub fn parse_hour_padded(input: &mut &str) -> ModalResult<TemplateToken> {
    literal("HH")
        .value(TemplateToken::HourPadded)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_minute_padded(input: &mut &str) -> ModalResult<TemplateToken> {
    literal("mm")
        .value(TemplateToken::MinutePadded)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_second_padded(input: &mut &str) -> ModalResult<TemplateToken> {
    literal("ss")
        .value(TemplateToken::SecondPadded)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Any character outside a field token renders unchanged.
pub fn parse_literal_passthrough(input: &mut &str) -> ModalResult<TemplateToken> {
    any.map(TemplateToken::LiteralChar)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}
