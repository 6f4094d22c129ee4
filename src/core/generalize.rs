//! Generalization functions
//!
//! A generalization is a pure, deterministic coarsening of one attribute
//! value, applied record-locally (it never consults other records). Coarser
//! quasi-identifier values merge equivalence classes and thereby raise
//! k-anonymity and l-diversity.
//!
//! Two concrete transforms are provided alongside the raw passthrough:
//! - **Numeric banding**: an integer maps to the band containing it, rendered
//!   as a `"lower-upper"` label (e.g. age 28 with width 10 becomes `"20-29"`).
//! - **Prefix masking**: a string keeps its first `length` characters and the
//!   remainder is replaced by a fixed mask (e.g. ZIP `"35294"` with length 3
//!   and mask `"**"` becomes `"352**"`).
//!
//! Applying a transform to a value of the wrong type is an
//! [`ReidError::InvalidInput`]; values are never coerced silently. Null
//! passes through every generalization unchanged: the partitioner treats
//! null as a distinct, valid key component, and a column with missing
//! values must remain analyzable.

use crate::domain::errors::ReidError;
use crate::domain::result::Result;
use crate::domain::value::AttributeValue;
use serde::{Deserialize, Serialize};
use std::fmt;

fn default_mask() -> String {
    "**".to_string()
}

/// A deterministic coarsening transform for one attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Generalization {
    /// Use the raw value unchanged
    Raw,

    /// Map an integer to its band of the given width
    Band {
        /// Band width, must be at least 1
        width: u64,
    },

    /// Keep the first `length` characters and append a fixed mask
    Prefix {
        /// Number of leading characters to keep
        length: usize,

        /// Mask suffix appended after the kept prefix
        #[serde(default = "default_mask")]
        mask: String,
    },
}

impl Generalization {
    /// Applies the generalization to a single raw value
    ///
    /// Null values pass through unchanged for every variant.
    ///
    /// # Errors
    ///
    /// Returns [`ReidError::InvalidInput`] if the value's type is outside
    /// the transform's domain (banding on text, masking on an integer) or
    /// if a band width of 0 was configured.
    pub fn apply(&self, value: &AttributeValue) -> Result<AttributeValue> {
        if value.is_null() {
            return Ok(AttributeValue::Null);
        }
        match self {
            Generalization::Raw => Ok(value.clone()),
            Generalization::Band { width } => match value {
                AttributeValue::Int(v) => {
                    if *width == 0 {
                        return Err(ReidError::InvalidInput(format!(
                            "invalid band width: {width}"
                        )));
                    }
                    // Band endpoints can exceed i64 at the extremes of the
                    // domain (i64::MIN already floors past i64::MIN, and the
                    // top band's upper edge passes i64::MAX), so the label
                    // arithmetic runs in i128.
                    let width = i128::from(*width);
                    let lower = i128::from(*v).div_euclid(width) * width;
                    let upper = lower + width - 1;
                    Ok(AttributeValue::Text(format!("{lower}-{upper}")))
                }
                other => Err(ReidError::InvalidInput(format!(
                    "numeric banding applied to {} value '{other}'",
                    other.type_name()
                ))),
            },
            Generalization::Prefix { length, mask } => match value {
                AttributeValue::Text(s) => {
                    let prefix: String = s.chars().take(*length).collect();
                    Ok(AttributeValue::Text(format!("{prefix}{mask}")))
                }
                other => Err(ReidError::InvalidInput(format!(
                    "prefix masking applied to {} value '{other}'",
                    other.type_name()
                ))),
            },
        }
    }

    /// Validates the configured parameters
    ///
    /// # Errors
    ///
    /// Returns an error message if the parameters make the transform
    /// degenerate (band width 0).
    pub fn validate(&self) -> std::result::Result<(), String> {
        match self {
            Generalization::Band { width: 0 } => Err("band width must be at least 1".to_string()),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Generalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generalization::Raw => write!(f, "raw"),
            Generalization::Band { width } => write!(f, "band(width={width})"),
            Generalization::Prefix { length, mask } => {
                write!(f, "prefix(length={length}, mask=\"{mask}\")")
            }
        }
    }
}

impl Default for Generalization {
    fn default() -> Self {
        Generalization::Raw
    }
}
