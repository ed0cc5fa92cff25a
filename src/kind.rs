//! Runtime kind descriptors for error reporting.

use std::fmt;

/// Names the concrete shape of a [`Value`](crate::Value).
///
/// Used in error messages so a rejected value is reported by kind rather
/// than by its (possibly large) contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The nil value.
    Nil,
    /// Boolean.
    Bool,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float,
    /// String.
    String,
    /// Single-string capability value.
    Text,
    /// Multi-string capability value.
    TextList,
    /// Ordered sequence.
    List,
    /// Key/value mapping.
    Map,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int32 => "int32",
            Self::Int => "int64",
            Self::Float32 => "float32",
            Self::Float => "float64",
            Self::String => "string",
            Self::Text => "text",
            Self::TextList => "text-list",
            Self::List => "list",
            Self::Map => "map",
        };
        write!(f, "{name}")
    }
}
