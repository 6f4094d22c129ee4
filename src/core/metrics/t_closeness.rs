//! t-closeness calculator
//!
//! t is the maximum total variation distance between any class's local
//! sensitive-value distribution and the global distribution of the whole
//! dataset. It guards against classes that are diverse but skewed: a class
//! can satisfy l-diversity while still leaking that its members are far
//! likelier than average to carry one diagnosis. An empty partition has
//! t = 0.0.
//!
//! A singleton class's local distribution is a point mass, which typically
//! maximizes its distance from the global distribution unless that value
//! already dominates globally.

use crate::core::metrics::distribution::{total_variation_distance, Distribution};
use crate::core::partition::EquivalenceClass;

/// Maximum class-to-global total variation distance, 0.0 when empty
pub fn t_closeness(classes: &[EquivalenceClass], global: &Distribution) -> f64 {
    classes
        .iter()
        .map(|class| {
            let local = Distribution::from_values(&class.sensitive_values);
            total_variation_distance(&local, global)
        })
        .fold(0.0, f64::max)
}
