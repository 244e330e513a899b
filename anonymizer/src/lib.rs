//! Rule-driven masking of sensitive fields in structured records.
//!
//! This crate separates:
//! - **Rules**: what to put in a field (`fake.name`, `random.randint(18, 65)`,
//!   `null`, `regex:<pattern>`, or a literal).
//! - **Classification**: which kind of PII a declared `regex:` pattern describes.
//! - **Traversal**: where the fields are, in flat records, record sequences and
//!   element trees.
//!
//! A [`RuleTable`] maps field names (or XML tags) to rules. A [`Masker`] applies
//! it, drawing fake values from a [`SyntheticSource`]:
//!
//! ```rust
//! use anonymizer::{Masker, RuleTable, FakeSource};
//! use serde_json::json;
//!
//! let rules = RuleTable::build([("name", "fake.name"), ("ssn", "null")]);
//! let mut masker = Masker::with_source(rules, FakeSource::seeded(7));
//!
//! let masked = masker.mask_json(json!({"name": "John Doe", "ssn": "123-45-6789", "id": 7}));
//! assert_ne!(masked["name"], "John Doe");
//! assert!(masked["ssn"].is_null());
//! assert_eq!(masked["id"], 7);
//! ```
//!
//! Key rules:
//! - Fields without a rule pass through unchanged, type included.
//! - Output has the same keys, tags, order and nesting as the input.
//! - A rule that cannot be evaluated puts [`MASKING_ERROR_MARKER`] in its field,
//!   is logged, and never aborts the run.
//! - `random.` rules are parsed, not executed. Only `randint(min, max)` is accepted.
//!
//! What this crate does:
//! - parses rules and evaluates them against a synthetic data source
//! - walks JSON records, CSV rows and XML trees
//! - decodes and encodes those formats behind the `formats` feature
//! - loads rule tables from JSON configuration files
//!
//! What it does not do:
//! - install a global logger (pass a `slog::Logger` to [`Masker::with_logger`])
//! - inspect field values to decide what is sensitive

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod classification;
pub mod config;
mod element;
mod error;
#[cfg(feature = "formats")]
pub mod formats;
mod masking;
mod slog;
mod synthetic;
#[cfg(test)]
mod testing;

// Re-exports
pub use classification::{classify, Category};
pub use element::Element;
pub use error::{Error, MaskingError, Result};
#[cfg(feature = "formats")]
pub use formats::{Document, Format, ParseFormatError};
pub use masking::{
    evaluate, MaskOptions, MaskStats, MaskedValue, Masker, RawRules, Record, Rule, RuleTable,
    DEFAULT_MAX_DEPTH, MASKING_ERROR_MARKER, UNKNOWN_PATTERN_PLACEHOLDER,
};
pub use synthetic::{FakeField, FakeSource, SyntheticSource};
