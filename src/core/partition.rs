//! Equivalence class partitioner
//!
//! Partitions the record store by the tuple of (possibly generalized)
//! quasi-identifier values. Every record lands in exactly one class, classes
//! are disjoint, and the union of class members is the whole store. Grouping
//! is by exact tuple equality; null is a distinct, valid key component and
//! is never dropped silently.
//!
//! Partitioning is a pure function of (store, QI set, generalizations) with
//! no hidden state, so the scenario comparator can re-invoke it freely.

use crate::core::generalize::Generalization;
use crate::domain::errors::ReidError;
use crate::domain::record::RecordStore;
use crate::domain::result::Result;
use crate::domain::value::AttributeValue;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// One quasi-identifier attribute together with its generalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QiAttribute {
    /// Attribute name in the record store schema
    pub attribute: String,

    /// Coarsening applied before grouping
    #[serde(default)]
    pub generalization: Generalization,
}

impl QiAttribute {
    /// Raw quasi-identifier with no generalization
    pub fn raw(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            generalization: Generalization::Raw,
        }
    }

    /// Quasi-identifier with an explicit generalization
    pub fn generalized(attribute: impl Into<String>, generalization: Generalization) -> Self {
        Self {
            attribute: attribute.into(),
            generalization,
        }
    }
}

impl fmt::Display for QiAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.generalization {
            Generalization::Raw => write!(f, "{}", self.attribute),
            _ => write!(f, "{}[{}]", self.attribute, self.generalization),
        }
    }
}

/// The ordered tuple of generalized QI values identifying one class
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClassKey(pub Vec<AttributeValue>);

impl fmt::Display for ClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|v| v.to_string()).collect();
        write!(f, "({})", parts.join(", "))
    }
}

/// A set of records sharing an identical generalized QI tuple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquivalenceClass {
    /// The shared QI-value key
    pub key: ClassKey,

    /// Row indices of the member records, in load order
    pub members: Vec<usize>,

    /// Multiset of sensitive-attribute values among the members
    pub sensitive_values: Vec<AttributeValue>,
}

impl EquivalenceClass {
    /// Number of member records
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Number of distinct sensitive-attribute values among the members
    pub fn distinct_sensitive_count(&self) -> usize {
        self.sensitive_values
            .iter()
            .collect::<BTreeSet<_>>()
            .len()
    }
}

/// Partitions the store into equivalence classes
///
/// Each record's key is the tuple of its QI values after generalization, in
/// the caller-supplied QI order. Classes come back sorted by key so reports
/// are reproducible run to run.
///
/// An empty store yields an empty partition; that is not an error.
///
/// # Errors
///
/// Returns [`ReidError::InvalidInput`] if the QI set is empty, if any QI or
/// the sensitive attribute is absent from the schema, or if a generalization
/// is applied to a value outside its domain.
pub fn partition(
    store: &RecordStore,
    quasi_identifiers: &[QiAttribute],
    sensitive_attribute: &str,
) -> Result<Vec<EquivalenceClass>> {
    if quasi_identifiers.is_empty() {
        return Err(ReidError::InvalidInput(
            "at least one quasi-identifier attribute is required".to_string(),
        ));
    }

    // An empty store has nothing to group and possibly no schema to resolve
    // names against.
    if store.is_empty() {
        return Ok(Vec::new());
    }

    // Resolve all attribute positions up front so a bad name fails before
    // any grouping work happens.
    let qi_indices: Vec<usize> = quasi_identifiers
        .iter()
        .map(|qi| store.attribute_index(&qi.attribute))
        .collect::<Result<_>>()?;
    let sa_index = store.attribute_index(sensitive_attribute)?;

    let mut groups: BTreeMap<ClassKey, EquivalenceClass> = BTreeMap::new();
    for (row, record) in store.records().iter().enumerate() {
        let mut key = Vec::with_capacity(quasi_identifiers.len());
        for (qi, &index) in quasi_identifiers.iter().zip(&qi_indices) {
            key.push(qi.generalization.apply(record.value(index))?);
        }
        let key = ClassKey(key);
        let class = groups.entry(key.clone()).or_insert_with(|| EquivalenceClass {
            key,
            members: Vec::new(),
            sensitive_values: Vec::new(),
        });
        class.members.push(row);
        class.sensitive_values.push(record.value(sa_index).clone());
    }

    Ok(groups.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Record;

    fn reference_store() -> RecordStore {
        RecordStore::new(
            vec![
                "Age".to_string(),
                "ZIP".to_string(),
                "Gender".to_string(),
                "Diagnosis".to_string(),
            ],
            vec![
                Record::new(vec![28.into(), "35294".into(), "F".into(), "Asthma".into()]),
                Record::new(vec![29.into(), "35294".into(), "M".into(), "Diabetes".into()]),
                Record::new(vec![29.into(), "35295".into(), "F".into(), "Asthma".into()]),
                Record::new(vec![40.into(), "35294".into(), "M".into(), "Cancer".into()]),
                Record::new(vec![40.into(), "35295".into(), "F".into(), "Cancer".into()]),
                Record::new(vec![41.into(), "35295".into(), "M".into(), "Diabetes".into()]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_raw_qi_yields_singleton_classes() {
        let store = reference_store();
        let qi = vec![
            QiAttribute::raw("Age"),
            QiAttribute::raw("ZIP"),
            QiAttribute::raw("Gender"),
        ];
        let classes = partition(&store, &qi, "Diagnosis").unwrap();
        assert_eq!(classes.len(), 6);
        assert!(classes.iter().all(|c| c.size() == 1));
    }

    #[test]
    fn test_partition_invariant() {
        let store = reference_store();
        let qi = vec![QiAttribute::raw("ZIP")];
        let classes = partition(&store, &qi, "Diagnosis").unwrap();

        let total: usize = classes.iter().map(|c| c.size()).sum();
        assert_eq!(total, store.len());

        let keys: BTreeSet<_> = classes.iter().map(|c| c.key.clone()).collect();
        assert_eq!(keys.len(), classes.len());

        let mut members: Vec<usize> = classes.iter().flat_map(|c| c.members.clone()).collect();
        members.sort_unstable();
        assert_eq!(members, (0..store.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_generalized_qi_merges_classes() {
        let store = reference_store();
        let qi = vec![
            QiAttribute::generalized("Age", Generalization::Band { width: 10 }),
            QiAttribute::generalized(
                "ZIP",
                Generalization::Prefix {
                    length: 3,
                    mask: "**".to_string(),
                },
            ),
        ];
        let classes = partition(&store, &qi, "Diagnosis").unwrap();
        assert_eq!(classes.len(), 2);
        assert!(classes.iter().all(|c| c.size() == 3));

        let keys: Vec<String> = classes.iter().map(|c| c.key.to_string()).collect();
        assert_eq!(keys, vec!["(20-29, 352**)", "(40-49, 352**)"]);
    }

    #[test]
    fn test_null_is_a_distinct_key_component() {
        let store = RecordStore::new(
            vec!["ZIP".to_string(), "Diagnosis".to_string()],
            vec![
                Record::new(vec![AttributeValue::Null, "Asthma".into()]),
                Record::new(vec![AttributeValue::Null, "Cancer".into()]),
                Record::new(vec!["35294".into(), "Asthma".into()]),
            ],
        )
        .unwrap();
        let classes = partition(&store, &[QiAttribute::raw("ZIP")], "Diagnosis").unwrap();
        assert_eq!(classes.len(), 2);

        let null_class = classes
            .iter()
            .find(|c| c.key.0 == vec![AttributeValue::Null])
            .expect("null key class");
        assert_eq!(null_class.size(), 2);
    }

    #[test]
    fn test_empty_store_yields_empty_partition() {
        let store = RecordStore::new(
            vec!["Age".to_string(), "Diagnosis".to_string()],
            vec![],
        )
        .unwrap();
        let classes = partition(&store, &[QiAttribute::raw("Age")], "Diagnosis").unwrap();
        assert!(classes.is_empty());
    }

    #[test]
    fn test_schemaless_empty_store_yields_empty_partition() {
        let store = RecordStore::new(vec![], vec![]).unwrap();
        let classes = partition(&store, &[QiAttribute::raw("Age")], "Diagnosis").unwrap();
        assert!(classes.is_empty());
    }

    #[test]
    fn test_empty_qi_set_rejected() {
        let store = reference_store();
        let err = partition(&store, &[], "Diagnosis").unwrap_err();
        assert!(matches!(err, ReidError::InvalidInput(_)));
    }

    #[test]
    fn test_unknown_qi_attribute_rejected() {
        let store = reference_store();
        let err = partition(&store, &[QiAttribute::raw("Postcode")], "Diagnosis").unwrap_err();
        assert!(err.to_string().contains("Postcode"));
    }

    #[test]
    fn test_unknown_sensitive_attribute_rejected() {
        let store = reference_store();
        let err = partition(&store, &[QiAttribute::raw("Age")], "Condition").unwrap_err();
        assert!(err.to_string().contains("Condition"));
    }

    #[test]
    fn test_distinct_sensitive_count() {
        let store = reference_store();
        let qi = vec![QiAttribute::generalized(
            "Age",
            Generalization::Band { width: 10 },
        )];
        let classes = partition(&store, &qi, "Diagnosis").unwrap();
        // "20-29" holds {Asthma, Diabetes, Asthma}, "40-49" {Cancer, Cancer, Diabetes}
        assert!(classes.iter().all(|c| c.distinct_sensitive_count() == 2));
    }

    #[test]
    fn test_type_mismatch_surfaces_from_partition() {
        let store = reference_store();
        let qi = vec![QiAttribute::generalized(
            "ZIP",
            Generalization::Band { width: 10 },
        )];
        let err = partition(&store, &qi, "Diagnosis").unwrap_err();
        assert!(matches!(err, ReidError::InvalidInput(_)));
    }
}
