//! JSON dataset loader
//!
//! Reads a JSON array of flat objects into a [`RecordStore`]. This is
//! external glue around the core: the metric engine itself performs no I/O.
//!
//! Value mapping:
//! - JSON integers become [`AttributeValue::Int`]
//! - JSON strings become [`AttributeValue::Text`]
//! - JSON null becomes [`AttributeValue::Null`]
//! - floats, booleans, arrays, and objects are rejected as `InvalidInput`
//!   rather than silently coerced
//!
//! The schema is the sorted union of keys across all objects; a key missing
//! from an object loads as null.

use crate::domain::errors::ReidError;
use crate::domain::record::{Record, RecordStore};
use crate::domain::result::Result;
use crate::domain::value::AttributeValue;
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

/// Loads a record store from a JSON file
///
/// # Errors
///
/// Returns [`ReidError::Dataset`] when the file cannot be read or is not an
/// array of objects, and [`ReidError::InvalidInput`] for unsupported value
/// types.
pub fn load_json_file(path: impl AsRef<Path>) -> Result<RecordStore> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ReidError::Dataset(format!("failed to read dataset {}: {e}", path.display()))
    })?;
    let store = parse_json(&contents)?;
    info!(
        path = %path.display(),
        records = store.len(),
        attributes = store.attributes().len(),
        "Dataset loaded"
    );
    Ok(store)
}

/// Parses a JSON string into a record store
///
/// # Errors
///
/// See [`load_json_file`].
pub fn parse_json(contents: &str) -> Result<RecordStore> {
    let value: Value = serde_json::from_str(contents)
        .map_err(|e| ReidError::Dataset(format!("dataset is not valid JSON: {e}")))?;

    let rows = match value {
        Value::Array(rows) => rows,
        other => {
            return Err(ReidError::Dataset(format!(
                "dataset must be a JSON array of objects, got {}",
                json_type_name(&other)
            )))
        }
    };

    let mut objects = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        match row {
            Value::Object(map) => objects.push(map),
            other => {
                return Err(ReidError::Dataset(format!(
                    "record {index} must be a JSON object, got {}",
                    json_type_name(&other)
                )))
            }
        }
    }

    let attributes: Vec<String> = objects
        .iter()
        .flat_map(|map| map.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    if attributes.is_empty() && !objects.is_empty() {
        return Err(ReidError::Dataset(
            "dataset records have no attributes".to_string(),
        ));
    }

    let mut records = Vec::with_capacity(objects.len());
    for (index, map) in objects.iter().enumerate() {
        let mut values = Vec::with_capacity(attributes.len());
        for attribute in &attributes {
            let value = match map.get(attribute) {
                None | Some(Value::Null) => AttributeValue::Null,
                Some(Value::String(s)) => AttributeValue::Text(s.clone()),
                Some(Value::Number(n)) => n.as_i64().map(AttributeValue::Int).ok_or_else(|| {
                    ReidError::InvalidInput(format!(
                        "record {index}, attribute '{attribute}': non-integer number {n} is not supported"
                    ))
                })?,
                Some(other) => {
                    return Err(ReidError::InvalidInput(format!(
                        "record {index}, attribute '{attribute}': {} values are not supported",
                        json_type_name(other)
                    )))
                }
            };
            values.push(value);
        }
        records.push(Record::new(values));
    }

    RecordStore::new(attributes, records)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
