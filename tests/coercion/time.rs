//! Integration tests for the time and ascii conveniences.

use chrono::{NaiveDate, NaiveTime};
use coax::{Ctx, ErrorKind, Value, parse_ascii, parse_time, parse_time_default};

#[test]
fn time_parses_common_shapes() {
    let ctx = Ctx::new();
    let dt = parse_time(&ctx, &Value::from("2023-12-25T10:30:00"), "%Y-%m-%dT%H:%M:%S").unwrap();
    assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2023, 12, 25).unwrap());
    assert_eq!(dt.time(), NaiveTime::from_hms_opt(10, 30, 0).unwrap());

    let dt = parse_time(&ctx, &Value::from("25/12/2023"), "%d/%m/%Y").unwrap();
    assert_eq!(dt.time(), NaiveTime::MIN);
}

#[test]
fn time_accepts_rendered_numbers() {
    let dt = parse_time(&Ctx::new(), &Value::from(20231225i64), "%Y%m%d").unwrap();
    assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2023, 12, 25).unwrap());
}

#[test]
fn time_partial_formats_default_missing_fields() {
    let ctx = Ctx::new();
    let expected = NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .and_time(NaiveTime::MIN);
    assert_eq!(parse_time(&ctx, &Value::from("2023"), "%Y").unwrap(), expected);
    assert_eq!(parse_time(&ctx, &Value::from(2023i64), "%Y").unwrap(), expected);
    assert_eq!(
        parse_time(&ctx, &Value::from(2025.0f64), "%Y").unwrap().date(),
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    );
}

#[test]
fn time_errors_name_text_and_format() {
    let err = parse_time(&Ctx::new(), &Value::from("garbage"), "%Y-%m-%d").unwrap_err();
    match &err.kind {
        ErrorKind::InvalidTime { text, format, .. } => {
            assert_eq!(text, "garbage");
            assert_eq!(format, "%Y-%m-%d");
        }
        other => panic!("expected time error, got {other}"),
    }
}

#[test]
fn time_default_substitutes_on_failure() {
    let fallback = NaiveDate::from_ymd_opt(2000, 1, 1)
        .unwrap()
        .and_time(NaiveTime::MIN);
    assert_eq!(
        parse_time_default(&Ctx::new(), &Value::Nil, "%Y-%m-%d", fallback),
        fallback
    );
}

#[test]
fn ascii_strips_diacritics_after_coercion() {
    let ctx = Ctx::new();
    assert_eq!(parse_ascii(&ctx, &Value::from("žůžoüÄÅ")).unwrap(), "zuzouAA");
    assert_eq!(parse_ascii(&ctx, &Value::from("abc0123")).unwrap(), "abc0123");
    assert!(parse_ascii(&ctx, &Value::from(7i64)).is_err());
}
