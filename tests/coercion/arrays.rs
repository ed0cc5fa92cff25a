//! Integration tests for collection coercion.

use coax::{
    Ctx, ErrorKind, Value, parse_int64_array, parse_int_array, parse_int_array_default,
    parse_strings, parse_strings_default,
};

use crate::fixtures::{Direction, Route, text, text_list};

// =============================================================================
// Integer arrays
// =============================================================================

#[test]
fn int_array_converts_mixed_numeric_elements() {
    let ctx = Ctx::new();
    let v = Value::List(vec![
        Value::from(1i32),
        Value::from(2i64),
        Value::from(2.6f64),
        Value::from("4"),
    ]);
    assert_eq!(parse_int_array(&ctx, &v).unwrap(), vec![1, 2, 3, 4]);
}

#[test]
fn int64_array_from_string_elements() {
    let v = Value::from(vec!["10", "-20", "30"]);
    assert_eq!(parse_int64_array(&Ctx::new(), &v).unwrap(), vec![10, -20, 30]);
}

#[test]
fn int_array_is_all_or_nothing() {
    // Element 1 of 3 is invalid: the call fails outright, no partial
    // vector of length 1 is returned.
    let v = Value::from(vec![
        Value::from(1i64),
        Value::from("banana"),
        Value::from(3i64),
    ]);
    let err = parse_int_array(&Ctx::new(), &v).unwrap_err();
    match err.kind {
        ErrorKind::Element { index, source } => {
            assert_eq!(index, 1);
            assert!(source.to_string().contains("banana"));
        }
        other => panic!("expected element error, got {other}"),
    }
}

#[test]
fn int_array_rejects_non_sequences() {
    let ctx = Ctx::new();
    for rejected in [Value::from("1,2,3"), Value::from(1i64), Value::Nil] {
        let err = parse_int_array(&ctx, &rejected).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Unsupported { .. }));
    }
}

// =============================================================================
// String arrays
// =============================================================================

#[test]
fn strings_pass_through_unchanged() {
    let v = Value::from(vec!["banana"]);
    assert_eq!(parse_strings(&Ctx::new(), &v).unwrap(), vec!["banana"]);
}

#[test]
fn strings_single_scalar_becomes_singleton() {
    assert_eq!(
        parse_strings(&Ctx::new(), &Value::from("banana")).unwrap(),
        vec!["banana"]
    );
}

#[test]
fn strings_bulk_capability_bypasses_elements() {
    let route = Route(vec![Direction::North, Direction::South]);
    assert_eq!(
        parse_strings(&Ctx::new(), &text_list(route)).unwrap(),
        vec!["north", "south"]
    );
}

#[test]
fn strings_from_string_like_element_types() {
    // Elements the engine has never seen, participating through the
    // single-string capability.
    let v = Value::List(vec![
        text(Direction::East),
        text(Direction::West),
        Value::from("north"),
    ]);
    assert_eq!(
        parse_strings(&Ctx::new(), &v).unwrap(),
        vec!["east", "west", "north"]
    );
}

#[test]
fn strings_render_numeric_and_bool_elements() {
    let ctx = Ctx::new();
    assert_eq!(
        parse_strings(&ctx, &Value::from(vec![1i64, 2, 3])).unwrap(),
        vec!["1", "2", "3"]
    );
    assert_eq!(
        parse_strings(&ctx, &Value::from(vec![1.5f64, -0.25])).unwrap(),
        vec!["1.5", "-0.25"]
    );
    assert_eq!(
        parse_strings(&ctx, &Value::from(vec![true, false])).unwrap(),
        vec!["true", "false"]
    );
}

#[test]
fn strings_nil_yields_empty() {
    assert!(parse_strings(&Ctx::new(), &Value::Nil).unwrap().is_empty());
}

#[test]
fn strings_reject_unsupported_shapes() {
    let ctx = Ctx::new();
    let err = parse_strings(&ctx, &Value::from(42i64)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Unsupported { .. }));

    let nested = Value::List(vec![Value::from("ok"), Value::Map(vec![])]);
    let err = parse_strings(&ctx, &nested).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Element { index: 1, .. }));
}

// =============================================================================
// Default wrappers
// =============================================================================

#[test]
fn array_defaults() {
    let ctx = Ctx::new();
    assert_eq!(
        parse_int_array_default(&ctx, &Value::from("oops"), vec![1, 2]),
        vec![1, 2]
    );
    assert_eq!(
        parse_strings_default(&ctx, &Value::from(true), vec!["d".to_string()]),
        vec!["d"]
    );
    assert_eq!(
        parse_strings_default(&ctx, &Value::from("ok"), vec![]),
        vec!["ok"]
    );
}
