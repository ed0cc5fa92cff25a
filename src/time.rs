//! Time coercion: loosely typed values into calendar timestamps.

use chrono::format::{Parsed, StrftimeItems, parse};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::Result;
use crate::error::{Ctx, Error};
use crate::value::Value;

const TIME: &str = "time";

/// Coerces a value to a [`NaiveDateTime`] using a strftime `format`.
///
/// The value is first rendered through the scalar text hook, so strings,
/// numbers and single-string capability values are all acceptable inputs.
/// Fields the format does not mention default to the zero date and
/// midnight: a year-only format like `%Y` yields January 1st of that year
/// at 00:00:00, and a time-only format yields that time on 1970-01-01.
///
/// # Errors
///
/// Returns an unsupported-type error for nil or compound input, or a
/// time-parse error carrying the rejected text, the format, and the
/// underlying parser message.
pub fn parse_time(ctx: &Ctx, value: &Value, format: &str) -> Result<NaiveDateTime> {
    let Some(text) = value.render_scalar() else {
        return Err(Error::unsupported(ctx, TIME, value.kind()));
    };

    let mut parsed = Parsed::new();
    parse(&mut parsed, &text, StrftimeItems::new(format))
        .map_err(|e| Error::invalid_time(ctx, text.clone(), format, e.to_string()))?;

    // Two-digit years split the century at 69, same as strptime.
    let year = parsed
        .year()
        .or_else(|| {
            parsed
                .year_mod_100()
                .map(|y| if y >= 69 { 1900 + y } else { 2000 + y })
        })
        .unwrap_or(1970);
    let month = parsed.month().unwrap_or(1);
    let day = parsed.day().unwrap_or(1);
    let hour = match (parsed.hour_div_12(), parsed.hour_mod_12()) {
        (Some(div), Some(rem)) => div * 12 + rem,
        _ => 0,
    };
    let minute = parsed.minute().unwrap_or(0);
    let second = parsed.second().unwrap_or(0);
    let nanosecond = parsed.nanosecond().unwrap_or(0);

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        Error::invalid_time(ctx, text.clone(), format, "out-of-range date components")
    })?;
    let time = NaiveTime::from_hms_nano_opt(hour, minute, second, nanosecond).ok_or_else(
        || Error::invalid_time(ctx, text.clone(), format, "out-of-range time components"),
    )?;
    Ok(date.and_time(time))
}

/// Coerces a value to a [`NaiveDateTime`], returning `default` on any
/// error.
#[must_use]
pub fn parse_time_default(
    ctx: &Ctx,
    value: &Value,
    format: &str,
    default: NaiveDateTime,
) -> NaiveDateTime {
    parse_time(ctx, value, format).unwrap_or(default)
}
