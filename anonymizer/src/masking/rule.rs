//! Parsed masking rules.
//!
//! A rule string is dispatched on its prefix, first match wins:
//!
//! | Raw text | Rule |
//! |----------|------|
//! | `null` | [`Rule::Null`] |
//! | `fake.<name>` | [`Rule::SyntheticField`] |
//! | `random.randint(<min>, <max>)` | [`Rule::RandomInt`] |
//! | any other `random.` text | [`Rule::Invalid`] |
//! | `regex:<pattern>` | [`Rule::RegexClass`] |
//! | anything else | [`Rule::Literal`] |
//!
//! `random.` rules are parsed, never evaluated as code: `randint` with two
//! integer bounds is the only accepted shape.

use std::{fmt, str::FromStr};

const FAKE_PREFIX: &str = "fake.";
const RANDOM_PREFIX: &str = "random.";
const REGEX_PREFIX: &str = "regex:";
const NULL_RULE: &str = "null";

/// One masking directive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Replace with this exact text.
    Literal(String),
    /// Replace with a synthetic value of the named field.
    SyntheticField(String),
    /// Replace with a uniform integer in `min..=max`.
    RandomInt {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
    /// Replace with an explicit null.
    Null,
    /// Replace with a synthetic value of the category the pattern describes.
    RegexClass(String),
    /// The rule text has no valid interpretation.
    Invalid(String),
}

impl Rule {
    /// Parses a raw rule string. Total and side-effect free.
    pub fn parse(raw: &str) -> Rule {
        if raw == NULL_RULE {
            Rule::Null
        } else if let Some(name) = raw.strip_prefix(FAKE_PREFIX) {
            Rule::SyntheticField(name.to_string())
        } else if let Some(call) = raw.strip_prefix(RANDOM_PREFIX) {
            parse_randint(call).map_or_else(
                || Rule::Invalid(raw.to_string()),
                |(min, max)| Rule::RandomInt { min, max },
            )
        } else if let Some(pattern) = raw.strip_prefix(REGEX_PREFIX) {
            Rule::RegexClass(pattern.to_string())
        } else {
            Rule::Literal(raw.to_string())
        }
    }

    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Rule::Literal(_) => "literal",
            Rule::SyntheticField(_) => "fake",
            Rule::RandomInt { .. } => "randint",
            Rule::Null => "null",
            Rule::RegexClass(_) => "regex",
            Rule::Invalid(_) => "invalid",
        }
    }

    /// Returns `true` for [`Rule::Invalid`].
    pub fn is_invalid(&self) -> bool {
        matches!(self, Rule::Invalid(_))
    }
}

impl FromStr for Rule {
    type Err = std::convert::Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Rule::parse(raw))
    }
}

/// Renders the rule back into its configuration syntax.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Literal(value) | Rule::Invalid(value) => f.write_str(value),
            Rule::SyntheticField(name) => write!(f, "{FAKE_PREFIX}{name}"),
            Rule::RandomInt { min, max } => write!(f, "{RANDOM_PREFIX}randint({min}, {max})"),
            Rule::Null => f.write_str(NULL_RULE),
            Rule::RegexClass(pattern) => write!(f, "{REGEX_PREFIX}{pattern}"),
        }
    }
}

/// Accepts `randint(<int>, <int>)` with optional whitespace around tokens.
fn parse_randint(call: &str) -> Option<(i64, i64)> {
    let args = call
        .trim_end()
        .strip_prefix("randint")?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?;
    let (min, max) = args.split_once(',')?;
    let min = min.trim().parse().ok()?;
    let max = max.trim().parse().ok()?;
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::Rule;

    #[test]
    fn null_is_exact() {
        assert_eq!(Rule::parse("null"), Rule::Null);
        assert_eq!(Rule::parse("NULL"), Rule::Literal("NULL".into()));
        assert_eq!(Rule::parse("null "), Rule::Literal("null ".into()));
    }

    #[test]
    fn fake_prefix_keeps_remainder() {
        assert_eq!(Rule::parse("fake.name"), Rule::SyntheticField("name".into()));
        assert_eq!(Rule::parse("fake."), Rule::SyntheticField(String::new()));
        assert_eq!(
            Rule::parse("fake.phone_number"),
            Rule::SyntheticField("phone_number".into())
        );
    }

    #[test]
    fn randint_accepts_whitespace_and_negatives() {
        assert_eq!(
            Rule::parse("random.randint(18,65)"),
            Rule::RandomInt { min: 18, max: 65 }
        );
        assert_eq!(
            Rule::parse("random.randint(1000, 9999)"),
            Rule::RandomInt {
                min: 1000,
                max: 9999
            }
        );
        assert_eq!(
            Rule::parse("random.randint ( -5 , 5 )"),
            Rule::RandomInt { min: -5, max: 5 }
        );
        // Reversed bounds parse; they fail at evaluation.
        assert_eq!(
            Rule::parse("random.randint(9, 1)"),
            Rule::RandomInt { min: 9, max: 1 }
        );
    }

    #[test]
    fn other_random_shapes_are_invalid() {
        for raw in [
            "random.bogus(1,2,3)",
            "random.randint(1,2,3)",
            "random.randint(1)",
            "random.randint(a, b)",
            "random.randint(1.5, 2)",
            "random.randint(1, 2); __import__('os')",
            "random.choice([1, 2])",
            "random.",
        ] {
            assert_eq!(Rule::parse(raw), Rule::Invalid(raw.into()), "{raw}");
        }
    }

    #[test]
    fn regex_prefix_keeps_pattern_verbatim() {
        assert_eq!(
            Rule::parse(r"regex:^\d{3}-\d{2}-\d{4}$"),
            Rule::RegexClass(r"^\d{3}-\d{2}-\d{4}$".into())
        );
    }

    #[test]
    fn unprefixed_text_is_literal() {
        assert_eq!(Rule::parse("REDACTED"), Rule::Literal("REDACTED".into()));
        assert_eq!(Rule::parse(""), Rule::Literal(String::new()));
        // Prefix match is case-sensitive.
        assert_eq!(Rule::parse("Fake.name"), Rule::Literal("Fake.name".into()));
    }

    #[test]
    fn parsing_is_repeatable() {
        for raw in ["null", "fake.email", "random.randint(1, 2)", "regex:x", "lit"] {
            assert_eq!(Rule::parse(raw), Rule::parse(raw));
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for raw in ["null", "fake.email", "random.randint(1, 2)", "regex:^x$", "lit"] {
            let rule = Rule::parse(raw);
            assert_eq!(Rule::parse(&rule.to_string()), rule);
        }
    }
}
