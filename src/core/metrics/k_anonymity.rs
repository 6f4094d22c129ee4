//! k-anonymity calculator
//!
//! k is the minimum equivalence-class size across the partition: the lower
//! bound on how many records are indistinguishable by quasi-identifier. An
//! empty partition has k = 0 by definition.

use crate::core::partition::EquivalenceClass;

/// Minimum class size across the partition, 0 when empty
pub fn k_anonymity(classes: &[EquivalenceClass]) -> usize {
    classes.iter().map(EquivalenceClass::size).min().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::partition::ClassKey;
    use crate::domain::value::AttributeValue;

    fn class(key: &str, sizes: usize) -> EquivalenceClass {
        EquivalenceClass {
            key: ClassKey(vec![AttributeValue::from(key)]),
            members: (0..sizes).collect(),
            sensitive_values: vec![AttributeValue::from("Asthma"); sizes],
        }
    }

    #[test]
    fn test_k_is_minimum_class_size() {
        let classes = vec![class("a", 3), class("b", 1), class("c", 5)];
        assert_eq!(k_anonymity(&classes), 1);
    }

    #[test]
    fn test_k_of_empty_partition_is_zero() {
        assert_eq!(k_anonymity(&[]), 0);
    }

    #[test]
    fn test_k_tolerates_singleton_classes() {
        assert_eq!(k_anonymity(&[class("a", 1)]), 1);
    }

    #[test]
    fn test_k_uniform_partition() {
        let classes = vec![class("a", 3), class("b", 3)];
        assert_eq!(k_anonymity(&classes), 3);
    }
}
