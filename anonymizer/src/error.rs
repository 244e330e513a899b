//! Error types.
//!
//! Two tiers, matching how failures propagate through a run:
//!
//! - [`MaskingError`]: one field could not be masked. Caught at the field
//!   boundary and replaced by [`MASKING_ERROR_MARKER`](crate::MASKING_ERROR_MARKER);
//!   the rest of the run continues.
//! - [`Error`]: the run itself cannot proceed (bad configuration, undecodable
//!   input, a tree deeper than the configured bound). Nothing is written.

use std::{io, path::PathBuf};

/// A failure to produce a replacement value for a single field.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MaskingError {
    /// The rule string did not match any recognised shape.
    #[error("invalid masking rule `{raw}`")]
    InvalidRule {
        /// The rule text as configured.
        raw: String,
    },
    /// `fake.<name>` named a field the synthetic source cannot produce.
    #[error("unsupported synthetic field `{name}`")]
    UnsupportedField {
        /// The requested field name.
        name: String,
    },
    /// `random.randint(min, max)` with `min > max`.
    #[error("empty integer range [{min}, {max}]")]
    Range {
        /// Lower bound as configured.
        min: i64,
        /// Upper bound as configured.
        max: i64,
    },
}

/// A failure that aborts the whole run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The rule configuration is missing or malformed.
    #[error("invalid configuration {path}: {reason}")]
    Config {
        /// Configuration file path.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },
    /// The input document could not be decoded, or the output could not be encoded.
    #[error("malformed {format} document: {reason}")]
    Format {
        /// Format name (`json`, `csv`, `xml`).
        format: &'static str,
        /// Decoder or encoder message.
        reason: String,
    },
    /// No format was given and none could be inferred from the file name.
    #[error("cannot infer a document format from {path} (expected .json, .csv or .xml)")]
    UnknownFormat {
        /// The input path.
        path: PathBuf,
    },
    /// An element tree nested deeper than [`MaskOptions::max_depth`](crate::MaskOptions).
    #[error("element tree exceeds the maximum depth of {limit}")]
    DepthLimit {
        /// The configured bound.
        limit: usize,
    },
    /// Reading or writing a file failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn format(format: &'static str, reason: impl ToString) -> Self {
        Self::Format {
            format,
            reason: reason.to_string(),
        }
    }
}

/// Result alias for run-level operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::{Error, MaskingError};

    #[test]
    fn masking_errors_render_their_payload() {
        let err = MaskingError::InvalidRule {
            raw: "random.bogus(1,2,3)".into(),
        };
        assert_eq!(err.to_string(), "invalid masking rule `random.bogus(1,2,3)`");

        let err = MaskingError::Range { min: 9, max: 1 };
        assert_eq!(err.to_string(), "empty integer range [9, 1]");
    }

    #[test]
    fn format_error_names_the_format() {
        let err = Error::format("xml", "unexpected end of input");
        assert_eq!(
            err.to_string(),
            "malformed xml document: unexpected end of input"
        );
    }
}
