// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Input format detection and parsing.
//!
//! This module turns user-supplied CSV or JSON text into raw records. It
//! performs no validation: every value is carried through untyped and the
//! domain validator decides what is acceptable.

use csv::StringRecord;
use serde_json::{Map, Value};
use workforce_domain::schema::field_spec;
use workforce_domain::{RawRecord, RawValue};

use crate::error::ApiError;

/// The key holding the record array in multi-record JSON input.
const TEAMS_KEY: &str = "teams";

/// A recognized input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Comma separated values with a header line.
    Csv,
    /// A JSON object, either a single record or `{"teams": [...]}`.
    Json,
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Detects the format of the given input text.
///
/// Trimmed input that starts with `{` and ends with `}` is JSON. Otherwise,
/// input that contains both a comma and a newline is CSV.
///
/// # Arguments
///
/// * `input` - The raw input text
///
/// # Returns
///
/// The detected format, or `None` if the input is neither.
#[must_use]
pub fn detect_format(input: &str) -> Option<InputFormat> {
    let trimmed: &str = input.trim();
    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        Some(InputFormat::Json)
    } else if trimmed.contains(',') && trimmed.contains('\n') {
        Some(InputFormat::Csv)
    } else {
        None
    }
}

/// Detects the input format and parses the input into raw records.
///
/// # Arguments
///
/// * `input` - The raw input text
///
/// # Returns
///
/// The detected format and the raw records in input order.
///
/// # Errors
///
/// Returns an error if the format is not recognized or the text cannot be
/// parsed in the detected format.
pub fn parse_input(input: &str) -> Result<(InputFormat, Vec<RawRecord>), ApiError> {
    let format: InputFormat = detect_format(input).ok_or(ApiError::UnrecognizedFormat)?;
    let records: Vec<RawRecord> = match format {
        InputFormat::Json => parse_json(input.trim())?,
        InputFormat::Csv => parse_csv(input.trim())?,
    };
    Ok((format, records))
}

/// Parses JSON input into raw records.
///
/// An object with a `teams` key must hold an array of objects. Any other
/// object is treated as a single record.
///
/// # Errors
///
/// Returns `ApiError::InvalidJson` if the text is not valid JSON or does not
/// have one of the accepted shapes.
pub fn parse_json(input: &str) -> Result<Vec<RawRecord>, ApiError> {
    let value: Value = serde_json::from_str(input).map_err(|e| ApiError::InvalidJson {
        reason: e.to_string(),
    })?;

    let Value::Object(object) = value else {
        return Err(ApiError::InvalidJson {
            reason: String::from("top-level value is not an object"),
        });
    };

    match object.get(TEAMS_KEY) {
        None => Ok(vec![object_to_record(&object)]),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(idx, item)| match item {
                Value::Object(team) => Ok(object_to_record(team)),
                _ => Err(ApiError::InvalidJson {
                    reason: format!("team {} is not an object", idx + 1),
                }),
            })
            .collect(),
        Some(_) => Err(ApiError::InvalidJson {
            reason: format!("'{TEAMS_KEY}' is not an array"),
        }),
    }
}

/// Parses CSV input into raw records.
///
/// The first line is the header. Headers are normalized (trimmed,
/// lowercased, spaces replaced with underscores) and every cell is kept as
/// trimmed text. Rows shorter than the header simply lack the trailing
/// fields; cells beyond the header are ignored.
///
/// # Errors
///
/// Returns `ApiError::InvalidCsvFormat` if the reader fails.
pub fn parse_csv(input: &str) -> Result<Vec<RawRecord>, ApiError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ApiError::InvalidCsvFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .iter()
        .map(normalize_header)
        .collect();

    let mut records: Vec<RawRecord> = Vec::new();
    for result in reader.records() {
        let row: StringRecord = result.map_err(|e| ApiError::InvalidCsvFormat {
            reason: e.to_string(),
        })?;

        let record: RawRecord = headers
            .iter()
            .zip(row.iter())
            .map(|(header, cell)| (header.clone(), RawValue::text(cell)))
            .collect();
        records.push(record);
    }

    Ok(records)
}

/// Iterates over the names of fields in `record` that the schema does not define.
pub fn unrecognized_fields(record: &RawRecord) -> impl Iterator<Item = &str> {
    record
        .iter()
        .map(|(name, _)| name)
        .filter(|name| field_spec(name).is_none())
}

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Converts a JSON object into a raw record, preserving every key.
fn object_to_record(object: &Map<String, Value>) -> RawRecord {
    object
        .iter()
        .map(|(key, value)| (key.clone(), json_to_raw(value)))
        .collect()
}

/// Converts a JSON value into a raw value.
fn json_to_raw(value: &Value) -> RawValue {
    match value {
        Value::String(text) => RawValue::Text(text.clone()),
        Value::Number(number) => number
            .as_f64()
            .map_or_else(|| RawValue::Other(number.to_string()), RawValue::Number),
        other => RawValue::Other(other.to_string()),
    }
}
