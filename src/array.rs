//! Collection coercions: heterogeneous sequences into homogeneous vectors.
//!
//! Every conversion is all-or-nothing: the first element failure aborts the
//! call with an error naming the offending index, and no partial vector
//! escapes. Order and length are preserved; nothing is deduplicated.

use crate::Result;
use crate::coerce::{self, parse_int, parse_int64};
use crate::error::{Ctx, Error};
use crate::value::Value;

const INT_LIST: &str = "[]int32";
const INT64_LIST: &str = "[]int64";
const STRING_LIST: &str = "[]string";

/// Coerces a value to a vector of `i32`.
///
/// Accepts any sequence; each element goes through [`parse_int`], so mixed
/// lists of integers, floats and numeric strings all convert.
///
/// # Errors
///
/// Returns an unsupported-type error for non-sequence input, or an
/// element-wise error naming the first failing index.
pub fn parse_int_array(ctx: &Ctx, value: &Value) -> Result<Vec<i32>> {
    match value {
        Value::List(items) => from_elements(ctx, items, parse_int),
        other => Err(Error::unsupported(ctx, INT_LIST, other.kind())),
    }
}

/// Coerces a value to a vector of `i32`, returning `default` on any error.
#[must_use]
pub fn parse_int_array_default(ctx: &Ctx, value: &Value, default: Vec<i32>) -> Vec<i32> {
    parse_int_array(ctx, value).unwrap_or(default)
}

/// Coerces a value to a vector of `i64`.
///
/// # Errors
///
/// Returns an unsupported-type error for non-sequence input, or an
/// element-wise error naming the first failing index.
pub fn parse_int64_array(ctx: &Ctx, value: &Value) -> Result<Vec<i64>> {
    match value {
        Value::List(items) => from_elements(ctx, items, parse_int64),
        other => Err(Error::unsupported(ctx, INT64_LIST, other.kind())),
    }
}

/// Coerces a value to a vector of `i64`, returning `default` on any error.
#[must_use]
pub fn parse_int64_array_default(ctx: &Ctx, value: &Value, default: Vec<i64>) -> Vec<i64> {
    parse_int64_array(ctx, value).unwrap_or(default)
}

/// Coerces a value to a vector of `String`.
///
/// Resolution order:
/// 1. Nil converts to an empty vector.
/// 2. The multi-string capability wins outright: its output is used
///    verbatim, with no per-element work, even for values that also look
///    like sequences.
/// 3. A single textual scalar stands in for a one-element sequence.
/// 4. A sequence whose elements all satisfy the single-string probe
///    converts through that capability.
/// 5. Any other sequence converts element-wise through the scalar
///    rendering hook, so numeric and boolean elements become their
///    canonical text.
///
/// # Errors
///
/// Returns an unsupported-type error when no resolution path recognizes the
/// value's shape, or an element-wise error naming the first element with no
/// text form.
pub fn parse_strings(ctx: &Ctx, value: &Value) -> Result<Vec<String>> {
    if let Some(texts) = value.as_text_list() {
        return Ok(texts);
    }
    if let Some(text) = value.as_text() {
        return Ok(vec![text]);
    }
    match value {
        Value::Nil => Ok(Vec::new()),
        Value::List(items) if value.is_text_list() => from_elements(ctx, items, |ctx, item| {
            item.as_text()
                .ok_or_else(|| Error::unsupported(ctx, coerce::STRING, item.kind()))
        }),
        Value::List(items) => from_elements(ctx, items, |ctx, item| {
            item.render_scalar()
                .ok_or_else(|| Error::unsupported(ctx, coerce::STRING, item.kind()))
        }),
        other => Err(Error::unsupported(ctx, STRING_LIST, other.kind())),
    }
}

/// Coerces a value to a vector of `String`, returning `default` on any
/// error.
#[must_use]
pub fn parse_strings_default(ctx: &Ctx, value: &Value, default: Vec<String>) -> Vec<String> {
    parse_strings(ctx, value).unwrap_or(default)
}

// Shared element-wise driver: first failure aborts with the index attached.
fn from_elements<T>(
    ctx: &Ctx,
    items: &[Value],
    convert: impl Fn(&Ctx, &Value) -> Result<T>,
) -> Result<Vec<T>> {
    let mut result = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let converted =
            convert(ctx, item).map_err(|cause| Error::element(ctx, index, cause))?;
        result.push(converted);
    }
    Ok(result)
}
