use serial_date::{
    CalendarDateTime, DEFAULT_DATE_TEMPLATE, format_calendar, parse_date_template, render_template,
    serial_to_calendar,
};

fn jan_15_2022() -> CalendarDateTime {
    CalendarDateTime::new(2022, 1, 15, 13, 45, 30).unwrap()
}

#[test]
fn test_default_template() {
    assert_eq!(
        format_calendar(jan_15_2022(), DEFAULT_DATE_TEMPLATE),
        "2022-01-15"
    );
}

#[test]
fn test_full_datetime_template() {
    assert_eq!(
        format_calendar(jan_15_2022(), "DD.MM.YYYY HH:mm:ss"),
        "15.01.2022 13:45:30"
    );
}

#[test]
fn test_us_style_template() {
    assert_eq!(format_calendar(jan_15_2022(), "MM/DD/YYYY"), "01/15/2022");
}

#[test]
fn test_time_only_template() {
    assert_eq!(format_calendar(jan_15_2022(), "HH:mm"), "13:45");
}

#[test]
fn test_fields_are_zero_padded() {
    let dt = CalendarDateTime::new(805, 7, 4, 5, 3, 9).unwrap();
    assert_eq!(
        format_calendar(dt, "YYYY-MM-DD HH:mm:ss"),
        "0805-07-04 05:03:09"
    );
}

#[test]
fn test_repeated_token_substitutes_first_occurrence_only() {
    assert_eq!(format_calendar(jan_15_2022(), "YYYY-YYYY"), "2022-YYYY");
    assert_eq!(format_calendar(jan_15_2022(), "mm:mm"), "45:mm");
}

#[test]
fn test_unrecognized_tokens_pass_through() {
    assert_eq!(format_calendar(jan_15_2022(), "YYYY/QQ"), "2022/QQ");
    // Lowercase dd is not a token
    assert_eq!(format_calendar(jan_15_2022(), "dd"), "dd");
}

#[test]
fn test_literal_only_template() {
    assert_eq!(format_calendar(jan_15_2022(), "no tokens here"), "no tokens here");
    assert_eq!(format_calendar(jan_15_2022(), ""), "");
}

#[test]
fn test_render_parsed_template_is_reusable() {
    let template = parse_date_template("YYYY-MM-DD");
    let first = serial_to_calendar(43831.0, true).unwrap();
    let second = serial_to_calendar(45292.0, true).unwrap();

    // Substitution state is per render, not per template
    assert_eq!(render_template(first, &template), "2020-01-01");
    assert_eq!(render_template(second, &template), "2024-01-01");
    assert_eq!(render_template(first, &template), "2020-01-01");
}

#[test]
fn test_formats_decoded_serial() {
    let dt = serial_to_calendar(45292.75, true).unwrap();
    assert_eq!(
        format_calendar(dt, "YYYY-MM-DD HH:mm:ss"),
        "2024-01-01 18:00:00"
    );
}
