use crate::error::{CatalogError, Result, ValidationError};
use crate::models::TipEntry;
use serde_json::Value;

const REQUIRED_FIELDS: [&str; 4] = ["ordinal", "title", "explanation", "sample"];

/// Decode a JSON array of entry records
///
/// A record without one of the four fields is a validation failure naming the
/// record (1-based) and the field; wrong types and broken syntax are parse
/// errors.
pub fn parse_json(text: &str) -> Result<Vec<TipEntry>> {
    let records: Vec<Value> =
        serde_json::from_str(text).map_err(|e| CatalogError::Parse(e.to_string()))?;

    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| decode_record(idx + 1, record))
        .collect()
}

fn decode_record(position: usize, record: Value) -> Result<TipEntry> {
    let fields = record
        .as_object()
        .ok_or_else(|| CatalogError::Parse(format!("record {} is not an object", position)))?;

    if let Some(field) = REQUIRED_FIELDS.into_iter().find(|f| !fields.contains_key(*f)) {
        return Err(ValidationError::MissingField { position, field }.into());
    }

    serde_json::from_value(record)
        .map_err(|e| CatalogError::Parse(format!("record {}: {}", position, e)))
}
