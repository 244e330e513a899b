//! Loading rule configuration.
//!
//! A configuration file is a JSON object mapping field names (or XML tags) to
//! rule strings:
//!
//! ```json
//! {
//!     "name": "fake.name",
//!     "age": "random.randint(18, 65)",
//!     "ssn": "regex:^\\d{3}-\\d{2}-\\d{4}$"
//! }
//! ```
//!
//! Any problem with the file is an [`Error::Config`], raised before masking
//! starts. Rules that merely fail to parse are not configuration errors; they
//! surface per field at masking time.

use std::{fs, path::Path};

use serde_json::Value as JsonValue;

use crate::{
    error::{Error, Result},
    masking::{RawRules, RuleTable},
};

/// Reads and validates the rule file at `path`.
pub fn load_rules(path: impl AsRef<Path>) -> Result<RawRules> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|err| Error::config(path, format!("cannot read file: {err}")))?;
    parse_rules(&text, path)
}

/// Reads the rule file at `path` and builds its [`RuleTable`].
pub fn load_rule_table(path: impl AsRef<Path>) -> Result<RuleTable> {
    load_rules(path).map(RuleTable::from)
}

/// Validates configuration text. `origin` is only used in error messages.
pub fn parse_rules(text: &str, origin: impl AsRef<Path>) -> Result<RawRules> {
    let origin = origin.as_ref();
    let value: JsonValue = serde_json::from_str(text)
        .map_err(|err| Error::config(origin, format!("invalid JSON: {err}")))?;
    let JsonValue::Object(entries) = value else {
        return Err(Error::config(origin, "expected a JSON object of field rules"));
    };
    entries
        .into_iter()
        .map(|(field, rule)| match rule {
            JsonValue::String(rule) => Ok((field, rule)),
            other => Err(Error::config(
                origin,
                format!("rule for `{field}` must be a string, found {other}"),
            )),
        })
        .collect()
}
