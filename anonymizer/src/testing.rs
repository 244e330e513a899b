//! Deterministic source for unit tests.

use std::collections::HashMap;

use crate::synthetic::{FakeField, SyntheticSource};

/// Produces `<field:n>` where `n` counts calls, and records every request.
#[derive(Debug, Default)]
pub(crate) struct StubSource {
    calls: Vec<String>,
    named: HashMap<String, String>,
}

impl StubSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_named(mut self, name: &str, value: &str) -> Self {
        self.named.insert(name.to_string(), value.to_string());
        self
    }

    pub(crate) fn calls(&self) -> &[String] {
        &self.calls
    }
}

impl SyntheticSource for StubSource {
    fn generate(&mut self, field: FakeField) -> String {
        self.calls.push(field.as_str().to_string());
        format!("<{field}:{}>", self.calls.len())
    }

    fn generate_named(&mut self, name: &str) -> Option<String> {
        let value = self.named.get(name).cloned()?;
        self.calls.push(name.to_string());
        Some(value)
    }

    fn random_int(&mut self, min: i64, _max: i64) -> i64 {
        min
    }
}
