use crate::parser::parse_date_template;
use crate::types::TemplateToken;

#[test]
fn test_default_template_tokens() {
    let template = parse_date_template("YYYY-MM-DD");
    assert_eq!(
        template.tokens,
        vec![
            TemplateToken::YearFourDigit,
            TemplateToken::LiteralChar('-'),
            TemplateToken::MonthPadded,
            TemplateToken::LiteralChar('-'),
            TemplateToken::DayPadded,
        ]
    );
}

#[test]
fn test_time_tokens() {
    let template = parse_date_template("HH:mm:ss");
    assert_eq!(
        template.tokens,
        vec![
            TemplateToken::HourPadded,
            TemplateToken::LiteralChar(':'),
            TemplateToken::MinutePadded,
            TemplateToken::LiteralChar(':'),
            TemplateToken::SecondPadded,
        ]
    );
}

#[test]
fn test_tokens_are_case_sensitive() {
    assert_eq!(
        parse_date_template("MM").tokens,
        vec![TemplateToken::MonthPadded]
    );
    assert_eq!(
        parse_date_template("mm").tokens,
        vec![TemplateToken::MinutePadded]
    );

    // Lowercase yyyy is not a token at all
    let template = parse_date_template("yyyy");
    assert!(
        template
            .tokens
            .iter()
            .all(|t| matches!(t, TemplateToken::LiteralChar(_)))
    );
}

#[test]
fn test_partial_field_tokens_are_literals() {
    let template = parse_date_template("YYY");
    assert_eq!(
        template.tokens,
        vec![
            TemplateToken::LiteralChar('Y'),
            TemplateToken::LiteralChar('Y'),
            TemplateToken::LiteralChar('Y'),
        ]
    );

    // A fifth Y falls out of the four-digit token
    let template = parse_date_template("YYYYY");
    assert_eq!(
        template.tokens,
        vec![
            TemplateToken::YearFourDigit,
            TemplateToken::LiteralChar('Y'),
        ]
    );
}

#[test]
fn test_empty_template() {
    assert!(parse_date_template("").tokens.is_empty());
}

#[test]
fn test_multibyte_literals_pass_through() {
    let template = parse_date_template("YYYY年MM月DD日");
    assert_eq!(
        template.tokens,
        vec![
            TemplateToken::YearFourDigit,
            TemplateToken::LiteralChar('年'),
            TemplateToken::MonthPadded,
            TemplateToken::LiteralChar('月'),
            TemplateToken::DayPadded,
            TemplateToken::LiteralChar('日'),
        ]
    );
}

#[test]
fn test_field_text_round_trips_field_tokens() {
    for (token, text) in [
        (TemplateToken::YearFourDigit, "YYYY"),
        (TemplateToken::MonthPadded, "MM"),
        (TemplateToken::DayPadded, "DD"),
        (TemplateToken::HourPadded, "HH"),
        (TemplateToken::MinutePadded, "mm"),
        (TemplateToken::SecondPadded, "ss"),
    ] {
        assert_eq!(token.field_text(), Some(text));
        assert_eq!(parse_date_template(text).tokens, vec![token]);
    }
    assert_eq!(TemplateToken::LiteralChar('x').field_text(), None);
}
