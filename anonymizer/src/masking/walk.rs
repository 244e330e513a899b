//! Traversal: finds maskable fields in records and substitutes their values.
//!
//! Three modes share one rule table and one evaluation path:
//!
//! - **mapping**: top-level keys of a flat record. Nested values are not
//!   descended into.
//! - **sequence**: mapping mode applied to each record in order.
//! - **tree**: depth-first pre-order over an element tree. For each child
//!   whose tag has a rule the child's text is replaced, then the walk
//!   descends into that child whether or not it was just masked.
//!
//! Output always has the shape of the input. Fields without a rule keep their
//! value and type. A rule that fails to evaluate puts
//! [`MASKING_ERROR_MARKER`] in that field, is logged, and does not stop the run.

use serde_json::{Map, Value as JsonValue};
use slog::{debug, o, trace, warn, Discard, Logger};

use crate::{
    element::Element,
    error::{Error, Result},
    masking::{
        evaluate::{evaluate, MASKING_ERROR_MARKER},
        table::RuleTable,
        value::MaskedValue,
    },
    synthetic::{FakeSource, SyntheticSource},
};

/// A flat record: field name to value, in input order.
pub type Record = Map<String, JsonValue>;

/// Default bound on element tree depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Traversal limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskOptions {
    /// Deepest element tree accepted by [`Masker::mask_tree`]; the root is at
    /// depth 1.
    pub max_depth: usize,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Field counts accumulated by a [`Masker`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct MaskStats {
    /// Fields replaced by a value their rule produced.
    pub masked: usize,
    /// Fields replaced by [`MASKING_ERROR_MARKER`].
    pub failed: usize,
}

/// Applies a [`RuleTable`] to records.
///
/// A masker owns its synthetic source, so it is confined to one thread. To mask
/// in parallel, give each worker its own masker over a clone of the table.
pub struct Masker<S = FakeSource> {
    rules: RuleTable,
    source: S,
    options: MaskOptions,
    logger: Logger,
    stats: MaskStats,
}

impl Masker<FakeSource> {
    /// Masker with an entropy-seeded [`FakeSource`].
    #[must_use]
    pub fn new(rules: RuleTable) -> Self {
        Self::with_source(rules, FakeSource::new())
    }
}

impl<S> Masker<S>
where
    S: SyntheticSource,
{
    /// Masker drawing synthetic values from `source`.
    ///
    /// Diagnostics are discarded until a logger is supplied with
    /// [`Masker::with_logger`].
    pub fn with_source(rules: RuleTable, source: S) -> Self {
        Self {
            rules,
            source,
            options: MaskOptions::default(),
            logger: Logger::root(Discard, o!()),
            stats: MaskStats::default(),
        }
    }

    /// Sends diagnostics to `logger`.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Replaces the traversal limits.
    #[must_use]
    pub fn with_options(mut self, options: MaskOptions) -> Self {
        self.options = options;
        self
    }

    /// The rule table in use.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Counts since construction.
    pub fn stats(&self) -> MaskStats {
        self.stats
    }

    /// Gives back the synthetic source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Replacement for `field`, or `None` when the table has no rule for it.
    ///
    /// Evaluation failures are logged and yield [`MASKING_ERROR_MARKER`].
    pub fn mask_field(&mut self, field: &str) -> Option<MaskedValue> {
        let rule = self.rules.get(field)?;
        match evaluate(rule, &mut self.source) {
            Ok(value) => {
                self.stats.masked += 1;
                trace!(self.logger, "masked field"; "field" => field, "rule" => rule);
                Some(value)
            }
            Err(err) => {
                self.stats.failed += 1;
                warn!(self.logger, "masking rule failed";
                    "field" => field,
                    "rule" => self.rules.raw(field).unwrap_or_default(),
                    "error" => %err);
                Some(MaskedValue::Text(MASKING_ERROR_MARKER.to_string()))
            }
        }
    }

    /// Mapping mode: masks the top-level fields of `record`.
    pub fn mask_mapping(&mut self, record: Record) -> Record {
        record
            .into_iter()
            .map(|(field, value)| match self.mask_field(&field) {
                Some(masked) => (field, JsonValue::from(masked)),
                None => (field, value),
            })
            .collect()
    }

    /// Sequence mode: masks each record independently, keeping order.
    pub fn mask_sequence(&mut self, records: Vec<Record>) -> Vec<Record> {
        let count = records.len();
        let masked = records
            .into_iter()
            .map(|record| self.mask_mapping(record))
            .collect();
        debug!(self.logger, "masked record sequence"; "records" => count);
        masked
    }

    /// Masks a decoded JSON document.
    ///
    /// An object is masked in mapping mode and an array in sequence mode, where
    /// non-object elements pass through. Scalars are returned unchanged.
    pub fn mask_json(&mut self, value: JsonValue) -> JsonValue {
        match value {
            JsonValue::Object(record) => JsonValue::Object(self.mask_mapping(record)),
            JsonValue::Array(items) => {
                let count = items.len();
                let masked = items
                    .into_iter()
                    .map(|item| match item {
                        JsonValue::Object(record) => JsonValue::Object(self.mask_mapping(record)),
                        other => other,
                    })
                    .collect();
                debug!(self.logger, "masked record sequence"; "records" => count);
                JsonValue::Array(masked)
            }
            scalar => scalar,
        }
    }

    /// Tree mode: consumes `root` and returns it with matching children's
    /// text replaced.
    ///
    /// The root's own tag is never looked up. Attributes are untouched.
    pub fn mask_tree(&mut self, mut root: Element) -> Result<Element> {
        self.mask_children(&mut root, 1)?;
        Ok(root)
    }

    fn mask_children(&mut self, element: &mut Element, depth: usize) -> Result<()> {
        if depth > self.options.max_depth {
            return Err(Error::DepthLimit {
                limit: self.options.max_depth,
            });
        }
        for child in &mut element.children {
            if let Some(masked) = self.mask_field(&child.tag) {
                child.text = masked.into_text();
            }
            self.mask_children(child, depth + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use slog::{o, Drain, Logger};
    use std::sync::{Arc, Mutex};

    use super::{MaskOptions, Masker, Record};
    use crate::{
        element::Element,
        error::Error,
        masking::{evaluate::MASKING_ERROR_MARKER, table::RuleTable, value::MaskedValue},
        testing::StubSource,
    };

    fn record(value: serde_json::Value) -> Record {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    fn masker(rules: &[(&str, &str)]) -> Masker<StubSource> {
        Masker::with_source(RuleTable::build(rules.iter().copied()), StubSource::new())
    }

    /// Collects emitted log lines.
    struct Capture(Arc<Mutex<Vec<String>>>);

    impl Drain for Capture {
        type Ok = ();
        type Err = slog::Never;

        fn log(
            &self,
            record: &slog::Record<'_>,
            _values: &slog::OwnedKVList,
        ) -> Result<(), slog::Never> {
            self.0
                .lock()
                .unwrap()
                .push(format!("{}: {}", record.level().as_short_str(), record.msg()));
            Ok(())
        }
    }

    #[test]
    fn mapping_masks_only_configured_fields() {
        let mut masker = masker(&[("name", "fake.name"), ("age", "random.randint(18, 65)")]);
        let input = record(json!({
            "name": "John Doe",
            "email": "john@example.com",
            "age": 30,
            "active": true
        }));
        let output = masker.mask_mapping(input);
        assert_eq!(
            serde_json::Value::Object(output),
            json!({
                "name": "<name:1>",
                "email": "john@example.com",
                "age": 18,
                "active": true
            })
        );
        assert_eq!(masker.stats().masked, 2);
    }

    #[test]
    fn mapping_preserves_key_order() {
        let mut masker = masker(&[("b", "null")]);
        let input = record(json!({"z": 1, "b": "x", "a": [1, 2]}));
        let keys: Vec<String> = masker.mask_mapping(input).keys().cloned().collect();
        assert_eq!(keys, ["z", "b", "a"]);
    }

    #[test]
    fn mapping_does_not_descend() {
        let mut masker = masker(&[("name", "fake.name")]);
        let input = record(json!({"owner": {"name": "Jane"}, "tags": [{"name": "x"}]}));
        let output = masker.mask_mapping(input.clone());
        assert_eq!(output, input);
    }

    #[test]
    fn null_rule_yields_json_null() {
        let mut masker = masker(&[("ssn", "null")]);
        let output = masker.mask_mapping(record(json!({"ssn": "123-45-6789"})));
        assert_eq!(output["ssn"], serde_json::Value::Null);
    }

    #[test]
    fn failing_rule_marks_field_and_siblings_still_mask() {
        let drain = Capture(Arc::new(Mutex::new(Vec::new())));
        let messages = Arc::clone(&drain.0);
        let logger = Logger::root(drain.fuse(), o!());
        let mut masker = masker(&[
            ("age", "random.bogus(1,2,3)"),
            ("name", "fake.name"),
            ("shoe", "fake.shoe_size"),
            ("range", "random.randint(5, 1)"),
        ])
        .with_logger(logger);
        let output = masker.mask_mapping(record(json!({
            "age": 30,
            "name": "John",
            "shoe": 44,
            "range": 3,
            "city": "Paris"
        })));
        assert_eq!(output["age"], json!(MASKING_ERROR_MARKER));
        assert_eq!(output["shoe"], json!(MASKING_ERROR_MARKER));
        assert_eq!(output["range"], json!(MASKING_ERROR_MARKER));
        assert_eq!(output["name"], json!("<name:1>"));
        assert_eq!(output["city"], json!("Paris"));
        assert_eq!(masker.stats().failed, 3);
        assert_eq!(masker.stats().masked, 1);
        assert_eq!(messages.lock().unwrap().len(), 3);
    }

    #[test]
    fn sequence_masks_rows_independently() {
        let mut masker = masker(&[("ssn", r"regex:^\d{3}-\d{2}-\d{4}$")]);
        let rows = vec![
            record(json!({"id": "1", "ssn": "123-45-6789"})),
            record(json!({"id": "2", "ssn": "987-65-4321"})),
        ];
        let output = masker.mask_sequence(rows);
        assert_eq!(output.len(), 2);
        assert_eq!(output[0]["id"], json!("1"));
        assert_eq!(output[0]["ssn"], json!("<ssn:1>"));
        assert_eq!(output[1]["id"], json!("2"));
        assert_eq!(output[1]["ssn"], json!("<ssn:2>"));
    }

    #[test]
    fn json_dispatches_on_document_shape() {
        let mut masker = masker(&[("email", "fake.email")]);
        let output = masker.mask_json(json!([
            {"email": "a@x.com"},
            "not a record",
            {"other": 1}
        ]));
        assert_eq!(
            output,
            json!([{"email": "<email:1>"}, "not a record", {"other": 1}])
        );
        assert_eq!(masker.mask_json(json!(42)), json!(42));
    }

    #[test]
    fn tree_masks_matching_children() {
        let mut masker = masker(&[("name", "fake.name")]);
        let root = Element::new("root").with_child(
            Element::new("person")
                .with_child(Element::new("name").with_text("John Doe"))
                .with_child(Element::new("email").with_text("j@x.com")),
        );
        let masked = masker.mask_tree(root.clone()).unwrap();
        let person = masked.find("person").unwrap();
        assert_eq!(person.find_text("name"), Some("<name:1>"));
        assert_eq!(person.find_text("email"), Some("j@x.com"));
        assert_eq!(masked.tags(), root.tags());
    }

    #[test]
    fn tree_descends_into_masked_elements() {
        // `name` appears at two depths; the outer one is masked and the walk
        // still reaches the inner one.
        let mut masker = masker(&[("name", "fake.name"), ("id", "fake.uuid4")]);
        let root = Element::new("root").with_child(
            Element::new("name")
                .with_text("outer")
                .with_child(Element::new("name").with_text("inner"))
                .with_child(Element::new("id").with_text("42")),
        );
        let masked = masker.mask_tree(root).unwrap();
        let outer = &masked.children[0];
        assert_eq!(outer.text.as_deref(), Some("<name:1>"));
        assert_eq!(outer.children[0].text.as_deref(), Some("<name:2>"));
        assert_eq!(outer.children[1].text.as_deref(), Some("<uuid4:3>"));
        assert_eq!(masker.into_source().calls(), ["name", "name", "uuid4"]);
    }

    #[test]
    fn tree_never_masks_the_root() {
        let mut masker = masker(&[("root", "fake.name")]);
        let masked = masker
            .mask_tree(Element::new("root").with_text("keep"))
            .unwrap();
        assert_eq!(masked.text.as_deref(), Some("keep"));
    }

    #[test]
    fn tree_null_clears_text_and_keeps_attributes() {
        let mut masker = masker(&[("ssn", "null")]);
        let root = Element::new("root")
            .with_child(Element::new("ssn").with_attribute("kind", "us").with_text("1"));
        let masked = masker.mask_tree(root).unwrap();
        assert_eq!(masked.children[0].text, None);
        assert_eq!(
            masked.children[0].attributes,
            [("kind".to_string(), "us".to_string())]
        );
    }

    #[test]
    fn tree_depth_is_bounded() {
        let deep = Element::new("a").with_child(Element::new("b").with_child(Element::new("c")));
        let limited = |max_depth| masker(&[]).with_options(MaskOptions { max_depth });

        assert!(matches!(
            limited(2).mask_tree(deep.clone()),
            Err(Error::DepthLimit { limit: 2 })
        ));
        assert_eq!(limited(3).mask_tree(deep.clone()).unwrap(), deep);
    }

    #[test]
    fn mask_field_reports_missing_rules() {
        let mut masker = masker(&[("a", "literal")]);
        assert_eq!(masker.mask_field("a"), Some(MaskedValue::Text("literal".into())));
        assert_eq!(masker.mask_field("b"), None);
    }
}
