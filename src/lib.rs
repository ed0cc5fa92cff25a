//! Coercion of loosely typed runtime values into strongly typed scalars
//! and collections.
//!
//! This crate provides:
//! - [`Value`] - The loosely typed input value (a closed sum over every
//!   supported input shape)
//! - [`ToText`] / [`ToTextList`] - Capability traits for values that can
//!   render themselves as one string or as an ordered list of strings
//! - [`parse_bool`], [`parse_int`], [`parse_int64`], [`parse_float64`],
//!   [`parse_string`] - Scalar coercions with layered fallback resolution
//! - [`parse_int_array`], [`parse_int64_array`], [`parse_strings`] -
//!   All-or-nothing collection coercions
//! - `parse_*_default` - Total variants that substitute a caller-supplied
//!   fallback instead of failing
//! - [`Error`] / [`Ctx`] - Typed errors carrying caller-supplied annotation
//!
//! Every function is pure, synchronous, and free of shared state; concurrent
//! callers need no coordination.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod array;
pub mod ascii;
pub mod coerce;
pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod kind;
pub mod text;
pub mod time;
pub mod value;

pub use array::{
    parse_int64_array, parse_int64_array_default, parse_int_array, parse_int_array_default,
    parse_strings, parse_strings_default,
};
pub use ascii::parse_ascii;
pub use coerce::{
    parse_bool, parse_bool_default, parse_float64, parse_float64_default, parse_int, parse_int64,
    parse_int64_default, parse_int_default, parse_string, parse_string_default,
};
pub use error::{Ctx, Error, ErrorKind};
pub use kind::Kind;
pub use text::{ToText, ToTextList};
pub use time::{parse_time, parse_time_default};
pub use value::Value;

/// Convenient result alias for coercion operations.
pub type Result<T> = std::result::Result<T, Error>;
