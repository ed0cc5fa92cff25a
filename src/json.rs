//! JSON boundary: decoded documents as coercion input.
//!
//! Enabled with the `json` feature. A deserialized [`serde_json::Value`]
//! maps directly onto [`Value`], so document fields can be fed to the
//! coercion functions without an intermediate translation layer.

use std::sync::Arc;

use crate::value::Value;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Nil,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => {
                // Integers keep their width; everything else (including
                // u64 beyond i64::MAX) degrades to float, as serde_json
                // itself does for lossy reads.
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else {
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Self::String(Arc::from(s.as_str())),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (Self::String(Arc::from(k.as_str())), Self::from(v)))
                    .collect(),
            ),
        }
    }
}
