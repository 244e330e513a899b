//! CSV documents: a header row followed by records.
//!
//! Every cell decodes to a JSON string. On the way out, strings are written
//! as-is, `null` as an empty cell, and other values in their JSON form.

use ::csv::{ReaderBuilder, Writer};
use serde_json::Value as JsonValue;

use crate::{
    error::{Error, Result},
    masking::Record,
};

const FORMAT: &str = "csv";

/// Parses rows keyed by the header line. Ragged rows are rejected.
pub fn decode(text: &str) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new().from_reader(text.as_bytes());
    let headers = reader
        .headers()
        .map_err(|err| Error::format(FORMAT, err))?
        .clone();
    reader
        .records()
        .map(|row| {
            let row = row.map_err(|err| Error::format(FORMAT, err))?;
            Ok(headers
                .iter()
                .zip(row.iter())
                .map(|(header, cell)| (header.to_string(), JsonValue::String(cell.to_string())))
                .collect())
        })
        .collect()
}

/// Writes `rows` with the first row's keys as the header.
///
/// Keys missing from a later row become empty cells. No rows, no output.
pub fn encode(rows: &[Record]) -> Result<String> {
    let Some(first) = rows.first() else {
        return Ok(String::new());
    };
    let headers: Vec<&str> = first.keys().map(String::as_str).collect();

    let mut writer = Writer::from_writer(Vec::new());
    writer
        .write_record(&headers)
        .map_err(|err| Error::format(FORMAT, err))?;
    for row in rows {
        let cells = headers
            .iter()
            .map(|header| row.get(*header).map(cell_text).unwrap_or_default());
        writer
            .write_record(cells)
            .map_err(|err| Error::format(FORMAT, err))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| Error::format(FORMAT, err))?;
    String::from_utf8(bytes).map_err(|err| Error::format(FORMAT, err))
}

fn cell_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(text) => text.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}
