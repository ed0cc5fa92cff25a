//! The loosely typed input value for all coercions.

use std::fmt;
use std::sync::Arc;

use crate::kind::Kind;
use crate::text::{ToText, ToTextList};

/// A loosely typed runtime value.
///
/// This is the closed sum over every input shape the coercion engine
/// understands: the machine scalar widths, strings, ordered sequences,
/// mappings, and opaque caller-defined values that participate through the
/// [`ToText`] / [`ToTextList`] capabilities.
///
/// Values are transient: they are built at the coercion boundary, consumed
/// by one call, and never mutated.
#[derive(Clone)]
pub enum Value {
    /// The nil value (absence).
    Nil,
    /// Boolean value.
    Bool(bool),
    /// 32-bit signed integer.
    Int32(i32),
    /// 64-bit signed integer.
    Int(i64),
    /// 32-bit floating point.
    Float32(f32),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(Arc<str>),
    /// Caller-defined value exposing the single-string capability.
    Text(Arc<dyn ToText>),
    /// Caller-defined value exposing the multi-string capability.
    TextList(Arc<dyn ToTextList>),
    /// Ordered, possibly heterogeneous sequence.
    List(Vec<Value>),
    /// Key/value mapping. Never coercible to a scalar.
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Nil,
            Self::Bool(_) => Kind::Bool,
            Self::Int32(_) => Kind::Int32,
            Self::Int(_) => Kind::Int,
            Self::Float32(_) => Kind::Float32,
            Self::Float(_) => Kind::Float,
            Self::String(_) => Kind::String,
            Self::Text(_) => Kind::Text,
            Self::TextList(_) => Kind::TextList,
            Self::List(_) => Kind::List,
            Self::Map(_) => Kind::Map,
        }
    }

    /// Returns true if this value is nil.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Single-string capability probe.
    ///
    /// Succeeds only for genuinely textual values: a string, or a value
    /// whose type exposes the [`ToText`] capability. Numbers and booleans
    /// deliberately do not qualify; their rendering is the separate
    /// stringify fallback, [`Value::render_scalar`].
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.to_string()),
            Self::Text(t) => Some(t.to_text()),
            _ => None,
        }
    }

    /// Multi-string capability probe.
    ///
    /// Succeeds only for values whose type exposes the [`ToTextList`]
    /// capability. Checked before any sequence handling so the capability
    /// owner, not the engine, authors the serialization.
    #[must_use]
    pub fn as_text_list(&self) -> Option<Vec<String>> {
        match self {
            Self::TextList(t) => Some(t.to_text_list()),
            _ => None,
        }
    }

    /// Returns true if this is a sequence whose elements all satisfy the
    /// single-string probe.
    #[must_use]
    pub fn is_text_list(&self) -> bool {
        match self {
            Self::List(items) => items
                .iter()
                .all(|v| matches!(v, Self::String(_) | Self::Text(_))),
            _ => false,
        }
    }

    /// Canonical scalar text rendering, the stringify-fallback hook.
    ///
    /// Defined for the closed scalar set only: booleans, the integer and
    /// float widths, strings, and single-string capability values. Nil and
    /// compound shapes return `None` so structurally invalid inputs fail
    /// fast instead of being formatted and re-parsed.
    #[must_use]
    pub fn render_scalar(&self) -> Option<String> {
        match self {
            Self::Bool(b) => Some(b.to_string()),
            Self::Int32(n) => Some(n.to_string()),
            Self::Int(n) => Some(n.to_string()),
            Self::Float32(x) => Some(x.to_string()),
            Self::Float(x) => Some(x.to_string()),
            Self::String(s) => Some(s.to_string()),
            Self::Text(t) => Some(t.to_text()),
            Self::Nil | Self::TextList(_) | Self::List(_) | Self::Map(_) => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

// Capability values compare by their rendered output; floats compare by
// bits so Eq stays reflexive for NaN.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int32(a), Self::Int32(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float32(a), Self::Float32(b)) => a.to_bits() == b.to_bits(),
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a.to_text() == b.to_text(),
            (Self::TextList(a), Self::TextList(b)) => a.to_text_list() == b.to_text_list(),
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int32(n) => write!(f, "{n}i32"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float32(x) => write!(f, "{x}f32"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Text(t) => write!(f, "Text({:?})", t.to_text()),
            Self::TextList(t) => write!(f, "TextList({:?})", t.to_text_list()),
            Self::List(items) => f.debug_list().entries(items).finish(),
            Self::Map(pairs) => {
                f.debug_map().entries(pairs.iter().map(|(k, v)| (k, v))).finish()
            }
        }
    }
}

// Display renders strings unquoted; it is the human-readable form, not a
// parseable serialization of compound values.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int32(n) => write!(f, "{n}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float32(x) => write!(f, "{x}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Text(t) => write!(f, "{}", t.to_text()),
            Self::TextList(t) => {
                write!(f, "[")?;
                for (i, item) in t.to_text_list().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(pairs) => {
                write!(f, "{{")?;
                for (i, (k, v)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int32(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Self::Float32(x)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}
