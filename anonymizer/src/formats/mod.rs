//! Decoders and encoders for the supported document formats.
//!
//! These sit at the boundary of the engine: text in, [`Document`] out, and back.
//! Decoding failures are [`Error::Format`] and abort the run before anything is
//! masked.

pub mod csv;
pub mod json;
pub mod xml;

use std::{fmt, fs, path::Path, str::FromStr};

use serde_json::Value as JsonValue;

use crate::{
    element::Element,
    error::{Error, Result},
    masking::{Masker, Record},
    synthetic::SyntheticSource,
};

/// Supported document formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// A JSON object (one record) or array (a sequence of records).
    Json,
    /// Comma-separated rows under a header line.
    Csv,
    /// An XML element tree.
    Xml,
}

/// Returned when a format name is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unsupported format `{0}` (expected json, csv or xml)")]
pub struct ParseFormatError(String);

impl Format {
    /// Lowercase format name.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Csv => "csv",
            Format::Xml => "xml",
        }
    }

    /// Infers the format from a file extension, ignoring case.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Format> {
        let extension = path.as_ref().extension()?.to_str()?;
        extension.to_ascii_lowercase().parse().ok()
    }
}

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "json" => Ok(Format::Json),
            "csv" => Ok(Format::Csv),
            "xml" => Ok(Format::Xml),
            other => Err(ParseFormatError(other.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded input document.
#[derive(Clone, Debug, PartialEq)]
pub enum Document {
    /// Any JSON value.
    Json(JsonValue),
    /// CSV rows keyed by header.
    Csv(Vec<Record>),
    /// XML root element.
    Xml(Element),
}

impl Document {
    /// Format this document was decoded from.
    pub fn format(&self) -> Format {
        match self {
            Document::Json(_) => Format::Json,
            Document::Csv(_) => Format::Csv,
            Document::Xml(_) => Format::Xml,
        }
    }
}

/// Decodes `text` as `format`.
pub fn decode(format: Format, text: &str) -> Result<Document> {
    match format {
        Format::Json => json::decode(text).map(Document::Json),
        Format::Csv => csv::decode(text).map(Document::Csv),
        Format::Xml => xml::decode(text).map(Document::Xml),
    }
}

/// Encodes `document` in its own format.
pub fn encode(document: &Document) -> Result<String> {
    match document {
        Document::Json(value) => json::encode(value),
        Document::Csv(rows) => csv::encode(rows),
        Document::Xml(root) => xml::encode(root),
    }
}

/// Reads the file at `path` and decodes it.
///
/// Without an explicit `format`, it is inferred from the file extension.
pub fn read_document(path: impl AsRef<Path>, format: Option<Format>) -> Result<Document> {
    let path = path.as_ref();
    let format = format
        .or_else(|| Format::from_path(path))
        .ok_or_else(|| Error::UnknownFormat {
            path: path.to_path_buf(),
        })?;
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode(format, &text)
}

/// Encodes `document` and writes it to `path`.
///
/// The document is fully encoded before the file is created, so a failed
/// encode leaves nothing behind.
pub fn write_document(path: impl AsRef<Path>, document: &Document) -> Result<()> {
    let path = path.as_ref();
    let text = encode(document)?;
    fs::write(path, text).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl<S> Masker<S>
where
    S: SyntheticSource,
{
    /// Masks a decoded document with the mode that fits its shape.
    pub fn mask_document(&mut self, document: Document) -> Result<Document> {
        Ok(match document {
            Document::Json(value) => Document::Json(self.mask_json(value)),
            Document::Csv(rows) => Document::Csv(self.mask_sequence(rows)),
            Document::Xml(root) => Document::Xml(self.mask_tree(root)?),
        })
    }
}
