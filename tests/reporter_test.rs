//! Violation reporter tests against the reference dataset

use reidrisk::core::metrics::{Distribution, MetricResult};
use reidrisk::core::partition::{partition, QiAttribute};
use reidrisk::core::report::{Thresholds, ViolationReport};
use reidrisk::core::Generalization;
use reidrisk::domain::{Record, RecordStore};

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

fn report_for(
    store: &RecordStore,
    qi: &[QiAttribute],
    thresholds: Thresholds,
) -> ViolationReport {
    let classes = partition(store, qi, "Diagnosis").unwrap();
    let global = Distribution::from_values(&store.column("Diagnosis").unwrap());
    let metrics = MetricResult::compute(&classes, &global);
    ViolationReport::evaluate(&classes, &global, &metrics, &thresholds)
}

#[test]
fn test_scenario_a_every_class_violates_k_and_l() {
    let store = reference_store();
    let qi = vec![
        QiAttribute::raw("Age"),
        QiAttribute::raw("ZIP"),
        QiAttribute::raw("Gender"),
    ];
    let report = report_for(
        &store,
        &qi,
        Thresholds {
            k_min: 2,
            l_min: 2,
            t_max: 1.0,
        },
    );

    assert!(!report.k.passed);
    assert!(!report.l.passed);
    // All six singleton classes appear in both violation lists.
    assert_eq!(report.k.violations.len(), 6);
    assert_eq!(report.l.violations.len(), 6);
    assert!(report.k.violations.iter().all(|v| v.observed == 1));
    assert!(report.l.violations.iter().all(|v| v.observed == 1));
}

#[test]
fn test_scenario_c_t_threshold_boundary() {
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

    // t = 1/3 passes a 0.34 ceiling...
    let passing = report_for(
        &store,
        &qi,
        Thresholds {
            k_min: 3,
            l_min: 2,
            t_max: 0.34,
        },
    );
    assert!(passing.all_passed());
    assert_eq!(passing.violation_count(), 0);

    // ...and fails a 0.30 ceiling, with both classes responsible.
    let failing = report_for(
        &store,
        &qi,
        Thresholds {
            k_min: 3,
            l_min: 2,
            t_max: 0.30,
        },
    );
    assert!(!failing.t.passed);
    assert!(failing.k.passed);
    assert!(failing.l.passed);
    assert_eq!(failing.t.violations.len(), 2);
}

#[test]
fn test_violation_keys_identify_classes() {
    let store = reference_store();
    let qi = vec![QiAttribute::generalized(
        "Age",
        Generalization::Band { width: 10 },
    )];
    let report = report_for(
        &store,
        &qi,
        Thresholds {
            k_min: 4,
            l_min: 1,
            t_max: 1.0,
        },
    );
    let keys: Vec<&str> = report
        .k
        .violations
        .iter()
        .map(|v| v.class_key.as_str())
        .collect();
    assert_eq!(keys, vec!["(20-29)", "(40-49)"]);
}

#[test]
fn test_empty_dataset_never_violates() {
    let store = RecordStore::new(
        vec!["Age".to_string(), "Diagnosis".to_string()],
        vec![],
    )
    .unwrap();
    let report = report_for(
        &store,
        &[QiAttribute::raw("Age")],
        Thresholds {
            k_min: 10,
            l_min: 10,
            t_max: 0.0,
        },
    );
    assert!(report.empty_partition);
    assert!(report.all_passed());
    assert_eq!(report.violation_count(), 0);
}

#[test]
fn test_report_does_not_mutate_inputs() {
    let store = reference_store();
    let qi = vec![QiAttribute::raw("Age")];
    let classes = partition(&store, &qi, "Diagnosis").unwrap();
    let global = Distribution::from_values(&store.column("Diagnosis").unwrap());
    let metrics = MetricResult::compute(&classes, &global);
    let before = classes.clone();

    let thresholds = Thresholds {
        k_min: 2,
        l_min: 2,
        t_max: 0.1,
    };
    let _ = ViolationReport::evaluate(&classes, &global, &metrics, &thresholds);
    assert_eq!(classes, before);
}
