//! Scalar coercion functions and their default wrappers.
//!
//! Every function resolves its input through the same layered strategy:
//! direct variant match, then the textual grammar for string values, then
//! the single-string capability, then the generic stringify fallback over
//! the closed scalar set. Nil and compound values fail fast with an
//! unsupported-type error instead of being formatted and re-parsed.

use crate::Result;
use crate::error::{Ctx, Error};
use crate::value::Value;

pub(crate) const BOOL: &str = "bool";
pub(crate) const INT: &str = "int32";
pub(crate) const INT64: &str = "int64";
pub(crate) const FLOAT64: &str = "float64";
pub(crate) const STRING: &str = "string";

/// Coerces a value to `bool`.
///
/// The textual grammar accepts exactly case-insensitive `true` / `false`;
/// there is no truthy/falsy coercion, so `"1"`, `"0"` and `"yes"` are all
/// errors.
///
/// # Errors
///
/// Returns an error if the value is not a boolean, a valid boolean literal,
/// or a scalar whose rendering is a valid boolean literal.
pub fn parse_bool(ctx: &Ctx, value: &Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => bool_text(ctx, s),
        Value::Text(t) => bool_text(ctx, &t.to_text()),
        other => match other.render_scalar() {
            Some(text) => bool_text(ctx, &text),
            None => Err(Error::unsupported(ctx, BOOL, other.kind())),
        },
    }
}

/// Coerces a value to `bool`, returning `default` on any error.
#[must_use]
pub fn parse_bool_default(ctx: &Ctx, value: &Value, default: bool) -> bool {
    parse_bool(ctx, value).unwrap_or(default)
}

/// Coerces a value to `i32`.
///
/// Floats are rounded to the nearest integer (ties away from zero), never
/// truncated. Wider integers and rounded floats must fit the `i32` range.
///
/// # Errors
///
/// Returns an error if the value cannot produce an `i32`: no resolution
/// path applies, the textual grammar fails, or the number is out of range.
pub fn parse_int(ctx: &Ctx, value: &Value) -> Result<i32> {
    match value {
        Value::Int32(n) => Ok(*n),
        Value::Int(n) => {
            i32::try_from(*n).map_err(|_| Error::out_of_range(ctx, INT, n.to_string()))
        }
        Value::Float32(x) => round_to_i32(ctx, f64::from(*x)),
        Value::Float(x) => round_to_i32(ctx, *x),
        Value::String(s) => int_text(ctx, s),
        Value::Text(t) => int_text(ctx, &t.to_text()),
        other => match other.render_scalar() {
            Some(text) => int_text(ctx, &text),
            None => Err(Error::unsupported(ctx, INT, other.kind())),
        },
    }
}

/// Coerces a value to `i32`, returning `default` on any error.
#[must_use]
pub fn parse_int_default(ctx: &Ctx, value: &Value, default: i32) -> i32 {
    parse_int(ctx, value).unwrap_or(default)
}

/// Coerces a value to `i64`.
///
/// Floats are rounded to the nearest integer (ties away from zero), never
/// truncated.
///
/// # Errors
///
/// Returns an error if the value cannot produce an `i64`: no resolution
/// path applies, the textual grammar fails, or the number is out of range.
pub fn parse_int64(ctx: &Ctx, value: &Value) -> Result<i64> {
    match value {
        Value::Int(n) => Ok(*n),
        Value::Int32(n) => Ok(i64::from(*n)),
        Value::Float32(x) => round_to_i64(ctx, f64::from(*x)),
        Value::Float(x) => round_to_i64(ctx, *x),
        Value::String(s) => int64_text(ctx, s),
        Value::Text(t) => int64_text(ctx, &t.to_text()),
        other => match other.render_scalar() {
            Some(text) => int64_text(ctx, &text),
            None => Err(Error::unsupported(ctx, INT64, other.kind())),
        },
    }
}

/// Coerces a value to `i64`, returning `default` on any error.
#[must_use]
pub fn parse_int64_default(ctx: &Ctx, value: &Value, default: i64) -> i64 {
    parse_int64(ctx, value).unwrap_or(default)
}

/// Coerces a value to `f64`.
///
/// Integers widen without error; strings use the standard decimal and
/// exponential grammar.
///
/// # Errors
///
/// Returns an error if the value cannot produce an `f64`.
#[allow(clippy::cast_precision_loss)]
pub fn parse_float64(ctx: &Ctx, value: &Value) -> Result<f64> {
    match value {
        Value::Float(x) => Ok(*x),
        Value::Float32(x) => Ok(f64::from(*x)),
        Value::Int32(n) => Ok(f64::from(*n)),
        // Widening large i64 loses precision, same as the usual numeric
        // promotion rule.
        Value::Int(n) => Ok(*n as f64),
        Value::String(s) => float_text(ctx, s),
        Value::Text(t) => float_text(ctx, &t.to_text()),
        other => match other.render_scalar() {
            Some(text) => float_text(ctx, &text),
            None => Err(Error::unsupported(ctx, FLOAT64, other.kind())),
        },
    }
}

/// Coerces a value to `f64`, returning `default` on any error.
#[must_use]
pub fn parse_float64_default(ctx: &Ctx, value: &Value, default: f64) -> f64 {
    parse_float64(ctx, value).unwrap_or(default)
}

/// Coerces a value to `String`.
///
/// Succeeds only for genuinely textual values: a string, or a value whose
/// type exposes the single-string capability. Numbers, booleans, nil and
/// compound values are rejected outright, never serialized.
///
/// # Errors
///
/// Returns an unsupported-type error for any non-textual value.
pub fn parse_string(ctx: &Ctx, value: &Value) -> Result<String> {
    value
        .as_text()
        .ok_or_else(|| Error::unsupported(ctx, STRING, value.kind()))
}

/// Coerces a value to `String`, returning `default` on any error.
#[must_use]
pub fn parse_string_default(ctx: &Ctx, value: &Value, default: impl Into<String>) -> String {
    parse_string(ctx, value).unwrap_or_else(|_| default.into())
}

fn bool_text(ctx: &Ctx, text: &str) -> Result<bool> {
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(Error::invalid_text(ctx, BOOL, text))
    }
}

fn int_text(ctx: &Ctx, text: &str) -> Result<i32> {
    text.parse::<i32>()
        .map_err(|_| Error::invalid_text(ctx, INT, text))
}

fn int64_text(ctx: &Ctx, text: &str) -> Result<i64> {
    text.parse::<i64>()
        .map_err(|_| Error::invalid_text(ctx, INT64, text))
}

fn float_text(ctx: &Ctx, text: &str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|_| Error::invalid_text(ctx, FLOAT64, text))
}

// f64::round is the shared rounding primitive: round to nearest, ties away
// from zero. Range checks happen after rounding so 2147483647.4 still fits.
#[allow(clippy::cast_possible_truncation)]
fn round_to_i32(ctx: &Ctx, x: f64) -> Result<i32> {
    let rounded = x.round();
    if rounded.is_finite()
        && rounded >= f64::from(i32::MIN)
        && rounded <= f64::from(i32::MAX)
    {
        Ok(rounded as i32)
    } else {
        Err(Error::out_of_range(ctx, INT, x.to_string()))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn round_to_i64(ctx: &Ctx, x: f64) -> Result<i64> {
    let rounded = x.round();
    // i64::MAX is not exactly representable as f64; the exclusive upper
    // bound 2^63 is.
    if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
        Ok(rounded as i64)
    } else {
        Err(Error::out_of_range(ctx, INT64, x.to_string()))
    }
}
