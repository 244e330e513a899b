//! Rule evaluation: turns a [`Rule`] into a [`MaskedValue`].
//!
//! Evaluation is stateless. The only state touched is the synthetic source's
//! generator, which the caller owns.

use crate::{
    classification::classify,
    error::MaskingError,
    masking::{rule::Rule, value::MaskedValue},
    synthetic::{FakeField, SyntheticSource},
};

/// Substituted for `regex:` rules whose pattern is not recognised.
pub const UNKNOWN_PATTERN_PLACEHOLDER: &str = "[MASKED_VALUE]";

/// Substituted for fields whose rule failed to evaluate.
pub const MASKING_ERROR_MARKER: &str = "[MASKING_ERROR]";

/// Evaluates `rule` against `source`.
///
/// Unknown regex patterns are not an error: they yield
/// [`UNKNOWN_PATTERN_PLACEHOLDER`].
pub fn evaluate<S>(rule: &Rule, source: &mut S) -> Result<MaskedValue, MaskingError>
where
    S: SyntheticSource + ?Sized,
{
    match rule {
        Rule::Literal(value) => Ok(MaskedValue::Text(value.clone())),
        Rule::Null => Ok(MaskedValue::Null),
        Rule::SyntheticField(name) => generate_named(name, source).map(MaskedValue::Text),
        Rule::RandomInt { min, max } => {
            if min > max {
                return Err(MaskingError::Range {
                    min: *min,
                    max: *max,
                });
            }
            Ok(MaskedValue::Integer(source.random_int(*min, *max)))
        }
        Rule::RegexClass(pattern) => Ok(classify(pattern).fake_field().map_or_else(
            || MaskedValue::Text(UNKNOWN_PATTERN_PLACEHOLDER.to_string()),
            |field| MaskedValue::Text(source.generate(field)),
        )),
        Rule::Invalid(raw) => Err(MaskingError::InvalidRule { raw: raw.clone() }),
    }
}

/// Built-in fields first, then the source's extension point.
fn generate_named<S>(name: &str, source: &mut S) -> Result<String, MaskingError>
where
    S: SyntheticSource + ?Sized,
{
    match name.parse::<FakeField>() {
        Ok(field) => Ok(source.generate(field)),
        Err(err) => source.generate_named(name).ok_or(err),
    }
}
