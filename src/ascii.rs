//! ASCII transliteration convenience on top of string coercion.

use deunicode::deunicode;

use crate::Result;
use crate::coerce::parse_string;
use crate::error::Ctx;
use crate::value::Value;

/// Coerces a value to a string and strips diacritics, yielding plain ASCII.
///
/// Transliteration itself is delegated to [`deunicode`]; this function only
/// adds the coercion boundary in front of it.
///
/// # Errors
///
/// Returns an error if the value is not coercible to a string.
pub fn parse_ascii(ctx: &Ctx, value: &Value) -> Result<String> {
    let text = parse_string(ctx, value)?;
    Ok(deunicode(&text))
}
