//! Diagnostics emitted through a caller-supplied `slog::Logger`.
//!
//! These tests verify that:
//! - failed rules are reported at warning level with the field, the rule text
//!   and the reason
//! - successful masking never logs field contents
//! - engine types serialise as structured values

use std::{
    collections::HashMap,
    fmt::Arguments,
    sync::{Arc, Mutex},
};

use anonymizer::{Category, FakeSource, MaskStats, Masker, Rule, RuleTable};
use serde_json::json;
use slog::{info, o, Drain, Level, Logger, OwnedKVList, Record, KV};

#[derive(Debug, Clone)]
struct Captured {
    level: Level,
    msg: String,
    kv: HashMap<String, String>,
}

/// Collects each record with its key-value pairs rendered as strings.
#[derive(Clone, Default)]
struct CapturingDrain(Arc<Mutex<Vec<Captured>>>);

impl CapturingDrain {
    fn records(&self) -> Vec<Captured> {
        self.0.lock().unwrap().clone()
    }
}

struct KvCollector(HashMap<String, String>);

impl slog::Serializer for KvCollector {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.0.insert(key.into(), val.to_string());
        Ok(())
    }
}

impl Drain for CapturingDrain {
    type Ok = ();
    type Err = slog::Never;

    fn log(&self, record: &Record<'_>, values: &OwnedKVList) -> Result<(), slog::Never> {
        let mut collector = KvCollector(HashMap::new());
        record.kv().serialize(record, &mut collector).unwrap();
        values.serialize(record, &mut collector).unwrap();
        self.0.lock().unwrap().push(Captured {
            level: record.level(),
            msg: record.msg().to_string(),
            kv: collector.0,
        });
        Ok(())
    }
}

fn logged_masker(rules: &[(&str, &str)]) -> (Masker, CapturingDrain) {
    let drain = CapturingDrain::default();
    let logger = Logger::root(drain.clone().fuse(), o!("component" => "test"));
    let masker = Masker::with_source(RuleTable::build(rules.iter().copied()), FakeSource::seeded(3))
        .with_logger(logger);
    (masker, drain)
}

#[test]
fn test_failed_rule_is_a_warning_with_context() {
    let (mut masker, drain) = logged_masker(&[("age", "random.choice([1, 2])")]);
    masker.mask_json(json!({"age": 30}));

    let warnings: Vec<_> = drain
        .records()
        .into_iter()
        .filter(|record| record.level == Level::Warning)
        .collect();
    assert_eq!(warnings.len(), 1);
    let warning = &warnings[0];
    assert_eq!(warning.msg, "masking rule failed");
    assert_eq!(warning.kv["field"], "age");
    assert_eq!(warning.kv["rule"], "random.choice([1, 2])");
    assert!(!warning.kv["error"].is_empty());
    assert_eq!(warning.kv["component"], "test");
}

#[test]
fn test_unsupported_field_names_the_field() {
    let (mut masker, drain) = logged_masker(&[("shoe", "fake.shoe_size")]);
    masker.mask_json(json!({"shoe": 44}));

    let records = drain.records();
    let warning = records
        .iter()
        .find(|record| record.level == Level::Warning)
        .unwrap();
    assert!(warning.kv["error"].contains("shoe_size"), "{warning:?}");
}

#[test]
fn test_field_contents_never_logged() {
    let (mut masker, drain) = logged_masker(&[("ssn", "fake.ssn"), ("bad", "fake.nope")]);
    masker.mask_json(json!([
        {"ssn": "123-45-6789", "bad": "top secret"},
        {"ssn": "987-65-4321"}
    ]));

    for record in drain.records() {
        let rendered = format!("{} {:?}", record.msg, record.kv);
        assert!(!rendered.contains("123-45-6789"), "{rendered}");
        assert!(!rendered.contains("987-65-4321"), "{rendered}");
        assert!(!rendered.contains("top secret"), "{rendered}");
    }
}

#[test]
fn test_engine_types_as_structured_values() {
    let drain = CapturingDrain::default();
    let logger = Logger::root(drain.clone().fuse(), o!());
    let rule = Rule::parse("random.randint( 1 ,  9 )");
    let stats = MaskStats {
        masked: 4,
        failed: 1,
    };
    info!(logger, "summary";
        "rule" => &rule,
        "category" => Category::CreditCard,
        "stats" => stats);

    let records = drain.records();
    let kv = &records[0].kv;
    assert_eq!(kv["rule"], "random.randint(1, 9)");
    assert_eq!(kv["category"], "credit_card");
    assert_eq!(kv["stats"], "masked=4 failed=1");
}
