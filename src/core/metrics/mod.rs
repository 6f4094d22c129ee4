//! Privacy metric calculators
//!
//! Each calculator consumes the equivalence-class partition produced by
//! [`crate::core::partition`] and reduces it to one scalar:
//!
//! - [`k_anonymity`] - minimum class size
//! - [`l_diversity`] - minimum distinct sensitive values per class
//! - [`t_closeness`] - maximum class-to-global distribution distance
//!
//! All three tolerate singleton classes and return the documented degenerate
//! values (k=0, l=0, t=0.0) for an empty partition. The calculators are pure
//! reductions over independent per-class computations.

pub mod distribution;
pub mod k_anonymity;
pub mod l_diversity;
pub mod t_closeness;

pub use distribution::{total_variation_distance, Distribution};
pub use k_anonymity::k_anonymity;
pub use l_diversity::l_diversity;
pub use t_closeness::t_closeness;

use crate::core::partition::EquivalenceClass;
use serde::{Deserialize, Serialize};

/// The three privacy metrics for one (dataset, QI-set) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    /// Minimum equivalence-class size
    pub k: usize,

    /// Minimum distinct sensitive values within any class
    pub l: usize,

    /// Maximum total variation distance from the global distribution
    pub t: f64,
}

impl MetricResult {
    /// Computes all three metrics over a partition
    ///
    /// `global` is the sensitive-attribute distribution of the whole record
    /// store, not of any single class.
    pub fn compute(classes: &[EquivalenceClass], global: &Distribution) -> Self {
        Self {
            k: k_anonymity(classes),
            l: l_diversity(classes),
            t: t_closeness(classes, global),
        }
    }
}
