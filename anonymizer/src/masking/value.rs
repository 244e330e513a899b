//! Replacement values produced by rule evaluation.

use std::fmt;

use serde_json::Value as JsonValue;

/// Value substituted for a masked field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MaskedValue {
    /// Text replacement.
    Text(String),
    /// Integer replacement (from `random.randint`).
    Integer(i64),
    /// Explicit absence. Never the string `"null"`.
    Null,
}

impl MaskedValue {
    /// Text form for text-only carriers (CSV cells, XML element text).
    ///
    /// `Null` has no text.
    pub fn into_text(self) -> Option<String> {
        match self {
            MaskedValue::Text(text) => Some(text),
            MaskedValue::Integer(value) => Some(value.to_string()),
            MaskedValue::Null => None,
        }
    }

    /// Returns `true` for [`MaskedValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, MaskedValue::Null)
    }
}

impl From<MaskedValue> for JsonValue {
    fn from(value: MaskedValue) -> Self {
        match value {
            MaskedValue::Text(text) => JsonValue::String(text),
            MaskedValue::Integer(value) => JsonValue::from(value),
            MaskedValue::Null => JsonValue::Null,
        }
    }
}

impl From<String> for MaskedValue {
    fn from(text: String) -> Self {
        MaskedValue::Text(text)
    }
}

impl From<&str> for MaskedValue {
    fn from(text: &str) -> Self {
        MaskedValue::Text(text.to_string())
    }
}

impl fmt::Display for MaskedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskedValue::Text(text) => f.write_str(text),
            MaskedValue::Integer(value) => write!(f, "{value}"),
            MaskedValue::Null => Ok(()),
        }
    }
}
