//! The rule table: field name or tag to parsed rule.

use std::collections::BTreeMap;

use crate::masking::rule::Rule;

/// Raw configuration: field name or tag to rule string.
pub type RawRules = BTreeMap<String, String>;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Entry {
    raw: String,
    rule: Rule,
}

/// Read-only mapping from field name (or XML tag) to [`Rule`].
///
/// Keys match exactly and case-sensitively. Every entry is parsed once when the
/// table is built; lookups hand out shared references to the parsed rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleTable {
    entries: BTreeMap<String, Entry>,
}

impl RuleTable {
    /// Builds a table from raw configuration.
    pub fn build<I, K, V>(raw: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = raw
            .into_iter()
            .map(|(key, raw)| {
                let raw = raw.into();
                let rule = Rule::parse(&raw);
                (key.into(), Entry { raw, rule })
            })
            .collect();
        Self { entries }
    }

    /// Rule configured for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&Rule> {
        self.entries.get(field).map(|entry| &entry.rule)
    }

    /// Original rule text configured for `field`.
    pub fn raw(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(|entry| entry.raw.as_str())
    }

    /// Returns `true` when `field` has a rule.
    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    /// Number of configured fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no field has a rule.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fields whose rule text failed to parse, with that text.
    pub fn invalid_rules(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.rule.is_invalid())
            .map(|(field, entry)| (field.as_str(), entry.raw.as_str()))
    }

    /// Iterates `(field, rule)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> + '_ {
        self.entries
            .iter()
            .map(|(field, entry)| (field.as_str(), &entry.rule))
    }
}

impl From<RawRules> for RuleTable {
    fn from(raw: RawRules) -> Self {
        Self::build(raw)
    }
}

impl<K, V> FromIterator<(K, V)> for RuleTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::build(iter)
    }
}
