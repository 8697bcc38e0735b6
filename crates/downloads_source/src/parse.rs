use downloads_core::RawRecord;
use downloads_logging::{downloads_error, downloads_warn};
use serde_json::Value;

use crate::SourceError;

/// Parse a JSON array of records. Array entries that are not objects are
/// dropped with a warning.
pub fn parse_records(text: &str) -> Result<Vec<RawRecord>, SourceError> {
    let value: Value = serde_json::from_str(text)?;
    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(SourceError::NotAnArray {
                found: kind_of(&other),
            })
        }
    };

    let total = entries.len();
    let records: Vec<RawRecord> = entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::Object(record) => Some(record),
            _ => None,
        })
        .collect();
    if records.len() < total {
        downloads_warn!(
            "Skipped {} non-object entries in downloads data",
            total - records.len()
        );
    }
    Ok(records)
}

/// Like [`parse_records`], but a malformed payload degrades to an empty
/// collection after logging.
pub fn parse_records_lenient(text: &str, origin: &str) -> Vec<RawRecord> {
    match parse_records(text) {
        Ok(records) => records,
        Err(err) => {
            downloads_error!("Failed to parse downloads data from {}: {}", origin, err);
            Vec::new()
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
