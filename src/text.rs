//! Capability traits for values that can render themselves as text.
//!
//! These are the two narrow contracts the coercion engine probes at runtime:
//! a value that yields exactly one string, and a value that yields an
//! ordered list of strings. Caller-defined types declared outside this
//! crate participate in coercion by implementing one of them.

/// Capability: yields exactly one string representation.
///
/// The multi-string capability [`ToTextList`] is distinct and takes
/// precedence for collection coercion; a type may implement both.
pub trait ToText: Send + Sync {
    /// Renders this value as a single string.
    fn to_text(&self) -> String;
}

/// Capability: yields an ordered list of strings directly.
///
/// When a value implements this, collection coercion uses its output
/// verbatim instead of reconstructing the list element by element, so the
/// implementing type owns its canonical serialization.
pub trait ToTextList: Send + Sync {
    /// Renders this value as an ordered list of strings.
    fn to_text_list(&self) -> Vec<String>;
}

impl ToText for String {
    fn to_text(&self) -> String {
        self.clone()
    }
}

impl ToText for &'static str {
    fn to_text(&self) -> String {
        (*self).to_string()
    }
}

impl ToTextList for Vec<String> {
    fn to_text_list(&self) -> Vec<String> {
        self.clone()
    }
}
