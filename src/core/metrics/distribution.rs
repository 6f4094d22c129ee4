//! Sensitive-attribute frequency distributions
//!
//! A [`Distribution`] maps each distinct sensitive value to its relative
//! frequency within a set of records. It is computed globally (whole store)
//! and locally (per equivalence class); t-closeness compares the two via
//! total variation distance.

use crate::domain::value::AttributeValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Relative frequencies of sensitive values within a record set
///
/// Frequencies sum to 1 for a non-empty record set; the distribution over an
/// empty set is the empty mapping.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Distribution {
    frequencies: BTreeMap<AttributeValue, f64>,
}

impl Distribution {
    /// Computes the distribution of a multiset of sensitive values
    pub fn from_values(values: &[AttributeValue]) -> Self {
        let mut counts: BTreeMap<AttributeValue, usize> = BTreeMap::new();
        for value in values {
            *counts.entry(value.clone()).or_insert(0) += 1;
        }
        let total = values.len() as f64;
        let frequencies = counts
            .into_iter()
            .map(|(value, count)| (value, count as f64 / total))
            .collect();
        Self { frequencies }
    }

    /// Relative frequency of a value, 0.0 when unsupported
    pub fn frequency(&self, value: &AttributeValue) -> f64 {
        self.frequencies.get(value).copied().unwrap_or(0.0)
    }

    /// Number of distinct supported values
    pub fn support_size(&self) -> usize {
        self.frequencies.len()
    }

    /// Returns true when the distribution is over an empty record set
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Iterator over (value, frequency) pairs in value order
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeValue, f64)> {
        self.frequencies.iter().map(|(v, f)| (v, *f))
    }
}

/// Total variation distance between two distributions
///
/// `0.5 * Σ |p(v) − q(v)|` folded over the union of both supports, with an
/// absent value counted as frequency 0. Ranges over [0, 1]; 0 means the
/// distributions are identical.
pub fn total_variation_distance(p: &Distribution, q: &Distribution) -> f64 {
    let union: std::collections::BTreeSet<&AttributeValue> = p
        .frequencies
        .keys()
        .chain(q.frequencies.keys())
        .collect();
    let sum: f64 = union
        .into_iter()
        .map(|value| (p.frequency(value) - q.frequency(value)).abs())
        .sum();
    0.5 * sum
}
