//! l-diversity calculator
//!
//! l is the minimum number of distinct sensitive values within any
//! equivalence class. It guards against classes that are large but
//! homogeneous in the sensitive attribute: k-anonymity alone is satisfied by
//! a class of 50 records that all share one diagnosis. An empty partition
//! has l = 0; a singleton class trivially has l = 1.

use crate::core::partition::EquivalenceClass;

/// Minimum distinct-sensitive-value count across the partition, 0 when empty
pub fn l_diversity(classes: &[EquivalenceClass]) -> usize {
    classes
        .iter()
        .map(EquivalenceClass::distinct_sensitive_count)
        .min()
        .unwrap_or(0)
}
