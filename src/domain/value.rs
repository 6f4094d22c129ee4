//! Scalar attribute values
//!
//! Every cell in the record store is an [`AttributeValue`]: an integer, a
//! piece of text, or null. Values are ordered and hashable so they can serve
//! as equivalence-class key components and as deterministic sort keys for
//! reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar value of one attribute in one record
///
/// Null is a first-class value: a missing quasi-identifier still forms a
/// distinct, valid group key component and is never dropped silently.
///
/// The `Ord` derive orders integers before text before null, which only
/// matters for deterministic report ordering, not for any metric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Integer value (ages, counts, codes)
    Int(i64),

    /// Text value (ZIP codes, genders, diagnoses)
    Text(String),

    /// Missing value
    Null,
}

impl AttributeValue {
    /// Short type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Int(_) => "integer",
            AttributeValue::Text(_) => "text",
            AttributeValue::Null => "null",
        }
    }

    /// Returns true if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Int(v) => write!(f, "{v}"),
            AttributeValue::Text(s) => write!(f, "{s}"),
            AttributeValue::Null => write!(f, "<null>"),
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}
