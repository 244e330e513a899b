//! JSON documents. Key order is preserved end to end.

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value as JsonValue};

use crate::error::{Error, Result};

const FORMAT: &str = "json";

/// Parses a JSON document.
pub fn decode(text: &str) -> Result<JsonValue> {
    serde_json::from_str(text).map_err(|err| Error::format(FORMAT, err))
}

/// Pretty-prints with four-space indentation.
pub fn encode(value: &JsonValue) -> Result<String> {
    let mut serializer = Serializer::with_formatter(Vec::new(), PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut serializer)
        .map_err(|err| Error::format(FORMAT, err))?;
    String::from_utf8(serializer.into_inner()).map_err(|err| Error::format(FORMAT, err))
}
