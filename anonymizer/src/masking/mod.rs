//! The masking engine.
//!
//! - **`rule`**: parsing raw rule strings (`Rule`)
//! - **`table`**: the field-to-rule lookup built from configuration (`RuleTable`)
//! - **`value`**: what a rule evaluates to (`MaskedValue`)
//! - **`evaluate`**: turning a rule into a value (`evaluate`)
//! - **`walk`**: locating fields in records and trees (`Masker`)
//!
//! Pattern classification lives in `crate::classification`; fake value
//! generation in `crate::synthetic`.

mod evaluate;
mod rule;
mod table;
mod value;
mod walk;

pub use evaluate::{evaluate, MASKING_ERROR_MARKER, UNKNOWN_PATTERN_PLACEHOLDER};
pub use rule::Rule;
pub use table::{RawRules, RuleTable};
pub use value::MaskedValue;
pub use walk::{MaskOptions, MaskStats, Masker, Record, DEFAULT_MAX_DEPTH};
