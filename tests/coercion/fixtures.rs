//! Caller-defined capability types used across the suite.
//!
//! These stand in for types declared outside the engine: a string-like enum
//! with a single-string rendering, and a composite that owns its own
//! multi-string serialization.

use std::sync::Arc;

use coax::{ToText, ToTextList, Value};

/// A caller-defined enum with a canonical single-string form.
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl ToText for Direction {
    fn to_text(&self) -> String {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
        .to_string()
    }
}

/// A caller-defined composite that serializes itself as a list of strings.
pub struct Route(pub Vec<Direction>);

impl ToTextList for Route {
    fn to_text_list(&self) -> Vec<String> {
        self.0.iter().map(ToText::to_text).collect()
    }
}

/// Wraps a capability value for use as coercion input.
pub fn text(value: impl ToText + 'static) -> Value {
    Value::Text(Arc::new(value))
}

/// Wraps a multi-string capability value for use as coercion input.
pub fn text_list(value: impl ToTextList + 'static) -> Value {
    Value::TextList(Arc::new(value))
}
