use winnow::combinator::alt;
use winnow::{ModalResult, Parser};

use crate::parser::tokens::*;
use crate::types::{DateTemplate, TemplateToken};

/// Parse a single token from the template string
///
/// Field tokens are tried first; the literal passthrough at the end accepts
/// any other character, so this only fails at end of input.
pub fn parse_single_token(input: &mut &str) -> ModalResult<TemplateToken> {
    alt((
        parse_year_four_digit,
        parse_month_padded,
        parse_day_padded,
        parse_hour_padded,
        parse_minute_padded,
        parse_second_padded,
        parse_literal_passthrough,
    ))
    .parse_next(input)
}

/// Parse a date format template
///
/// This is the main public API entry point of this module. It accepts a
/// template string and returns the parsed DateTemplate structure.
/// Tokenization is total: unrecognized characters become literals rather
/// than errors.
///
/// # Arguments
/// * `template` - The template string to parse
///
/// # Examples
/// ```
/// use serial_date::parse_date_template;
///
/// let template = parse_date_template("YYYY-MM-DD");
/// assert_eq!(template.tokens.len(), 5);
/// ```
pub fn parse_date_template(template: &str) -> DateTemplate {
    let mut input = template;
    let mut tokens = Vec::new();

    // The literal fallback consumes any character, so parsing can only stop
    // at end of input.
    while !input.is_empty() {
        match parse_single_token(&mut input) {
            Ok(token) => tokens.push(token),
            Err(_) => break,
        }
    }

    DateTemplate { tokens }
}
