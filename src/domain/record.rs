//! Immutable record store
//!
//! The [`RecordStore`] is the in-memory table every analysis runs against:
//! ordered attribute names plus equal-width rows of scalar values. It is
//! created once per assessment from an external loader and never mutated, so
//! repeated scenario runs against the same store are guaranteed to see
//! identical data.

use crate::domain::errors::ReidError;
use crate::domain::result::Result;
use crate::domain::value::AttributeValue;
use serde::{Deserialize, Serialize};

/// One row of the dataset
///
/// A record stores its values positionally; the owning [`RecordStore`] maps
/// attribute names to positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    values: Vec<AttributeValue>,
}

impl Record {
    /// Creates a record from its values
    pub fn new(values: Vec<AttributeValue>) -> Self {
        Self { values }
    }

    /// Value at a column position
    pub fn value(&self, index: usize) -> &AttributeValue {
        &self.values[index]
    }

    /// Number of values in this record
    pub fn width(&self) -> usize {
        self.values.len()
    }
}

/// Immutable, in-memory table of records
///
/// Construction validates that every row has exactly one value per attribute.
/// Attribute lookups fail fast with [`ReidError::InvalidInput`] when a name
/// is absent from the schema, so a mistyped quasi-identifier or sensitive
/// attribute surfaces before any metric is computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordStore {
    attributes: Vec<String>,
    records: Vec<Record>,
}

impl RecordStore {
    /// Creates a record store from attribute names and rows
    ///
    /// A store with no records may also have no attributes (a dataset whose
    /// schema cannot be inferred, such as an empty JSON array); a store with
    /// records must declare at least one attribute.
    ///
    /// # Errors
    ///
    /// Returns [`ReidError::InvalidInput`] if attribute names are duplicated,
    /// if records are present without attributes, or if any row's width
    /// differs from the attribute count.
    pub fn new(attributes: Vec<String>, records: Vec<Record>) -> Result<Self> {
        if attributes.is_empty() && !records.is_empty() {
            return Err(ReidError::InvalidInput(
                "records require at least one attribute".to_string(),
            ));
        }
        for (i, name) in attributes.iter().enumerate() {
            if attributes[..i].contains(name) {
                return Err(ReidError::InvalidInput(format!(
                    "duplicate attribute name: {name}"
                )));
            }
        }
        for (row, record) in records.iter().enumerate() {
            if record.width() != attributes.len() {
                return Err(ReidError::InvalidInput(format!(
                    "record {row} has {} values, expected {}",
                    record.width(),
                    attributes.len()
                )));
            }
        }
        Ok(Self {
            attributes,
            records,
        })
    }

    /// Attribute names in schema order
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Column position of an attribute
    ///
    /// # Errors
    ///
    /// Returns [`ReidError::InvalidInput`] if the attribute is not part of
    /// the schema.
    pub fn attribute_index(&self, name: &str) -> Result<usize> {
        self.attributes
            .iter()
            .position(|a| a == name)
            .ok_or_else(|| {
                ReidError::InvalidInput(format!(
                    "attribute '{name}' not found in dataset (available: {})",
                    self.attributes.join(", ")
                ))
            })
    }

    /// Rows in load order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All values of one attribute, in row order
    ///
    /// # Errors
    ///
    /// Returns [`ReidError::InvalidInput`] if the attribute is unknown.
    pub fn column(&self, name: &str) -> Result<Vec<AttributeValue>> {
        let index = self.attribute_index(name)?;
        Ok(self
            .records
            .iter()
            .map(|r| r.value(index).clone())
            .collect())
    }
}
