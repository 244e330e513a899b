//! `slog::Value` implementations for engine types.
//!
//! These let rules, categories and run counts appear as structured values in
//! log records, e.g. `debug!(logger, "rule loaded"; "rule" => &rule)`. They
//! never emit field contents: a rule is logged in its configuration syntax and
//! counts as numbers.

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{
    classification::Category,
    masking::{MaskStats, Rule},
    synthetic::FakeField,
};

impl SlogValue for Rule {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_arguments(key, &format_args!("{self}"))
    }
}

impl SlogValue for Category {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, self.as_str())
    }
}

impl SlogValue for FakeField {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, self.as_str())
    }
}

impl SlogValue for MaskStats {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_arguments(
            key,
            &format_args!("masked={} failed={}", self.masked, self.failed),
        )
    }
}
