//! Violation reporter
//!
//! Applies caller-supplied thresholds to computed metrics and lists, per
//! failing metric, every equivalence class individually responsible. The
//! reporter has no side effects: it reads the partition and produces a
//! serializable report that downstream renderers consume unchanged.
//!
//! Empty-partition policy: an empty dataset never violates. All three
//! checks pass with zero violating classes, since there is nothing to
//! protect. Callers that need the opposite reading can inspect
//! [`ViolationReport::empty_partition`].

use crate::core::metrics::{total_variation_distance, Distribution, MetricResult};
use crate::core::partition::EquivalenceClass;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Thresholds for one scenario: `(k_min, l_min, t_max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Minimum acceptable k-anonymity
    pub k_min: usize,

    /// Minimum acceptable l-diversity
    pub l_min: usize,

    /// Maximum acceptable t-closeness distance
    pub t_max: f64,
}

impl Thresholds {
    /// Validates the threshold values
    ///
    /// # Errors
    ///
    /// Returns an error message if `t_max` is outside [0, 1] or not finite.
    pub fn validate(&self) -> Result<(), String> {
        if !self.t_max.is_finite() || !(0.0..=1.0).contains(&self.t_max) {
            return Err(format!(
                "t_max must be within [0.0, 1.0], got {}",
                self.t_max
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Thresholds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "k_min={}, l_min={}, t_max={}",
            self.k_min, self.l_min, self.t_max
        )
    }
}

/// One equivalence class failing one metric's threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassViolation<T> {
    /// Rendered QI-value key of the offending class
    pub class_key: String,

    /// The metric value observed for that class
    pub observed: T,
}

/// Pass/fail outcome of one metric against its threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCheck<T> {
    /// The dataset-level metric value
    pub observed: T,

    /// The configured threshold
    pub threshold: T,

    /// Whether the metric satisfies the threshold
    pub passed: bool,

    /// Classes individually responsible for the failure, sorted by key
    pub violations: Vec<ClassViolation<T>>,
}

/// Threshold evaluation of one scenario's metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolationReport {
    /// k-anonymity check: passes when `k >= k_min`
    pub k: MetricCheck<usize>,

    /// l-diversity check: passes when `l >= l_min`
    pub l: MetricCheck<usize>,

    /// t-closeness check: passes when `t <= t_max`
    pub t: MetricCheck<f64>,

    /// True when the partition held no classes (empty dataset)
    pub empty_partition: bool,
}

impl ViolationReport {
    /// Evaluates metrics against thresholds over a partition
    ///
    /// For each failing metric, every class whose own value breaks the
    /// threshold is listed with its key and observed value. Classes come out
    /// in partition order, which the partitioner already sorts by key.
    pub fn evaluate(
        classes: &[EquivalenceClass],
        global: &Distribution,
        metrics: &MetricResult,
        thresholds: &Thresholds,
    ) -> Self {
        let empty_partition = classes.is_empty();

        let k_violations: Vec<ClassViolation<usize>> = classes
            .iter()
            .filter(|c| c.size() < thresholds.k_min)
            .map(|c| ClassViolation {
                class_key: c.key.to_string(),
                observed: c.size(),
            })
            .collect();

        let l_violations: Vec<ClassViolation<usize>> = classes
            .iter()
            .filter(|c| c.distinct_sensitive_count() < thresholds.l_min)
            .map(|c| ClassViolation {
                class_key: c.key.to_string(),
                observed: c.distinct_sensitive_count(),
            })
            .collect();

        let t_violations: Vec<ClassViolation<f64>> = classes
            .iter()
            .filter_map(|c| {
                let local = Distribution::from_values(&c.sensitive_values);
                let distance = total_variation_distance(&local, global);
                (distance > thresholds.t_max).then(|| ClassViolation {
                    class_key: c.key.to_string(),
                    observed: distance,
                })
            })
            .collect();

        // An empty dataset never violates: nothing to protect.
        Self {
            k: MetricCheck {
                observed: metrics.k,
                threshold: thresholds.k_min,
                passed: empty_partition || metrics.k >= thresholds.k_min,
                violations: k_violations,
            },
            l: MetricCheck {
                observed: metrics.l,
                threshold: thresholds.l_min,
                passed: empty_partition || metrics.l >= thresholds.l_min,
                violations: l_violations,
            },
            t: MetricCheck {
                observed: metrics.t,
                threshold: thresholds.t_max,
                passed: empty_partition || metrics.t <= thresholds.t_max,
                violations: t_violations,
            },
            empty_partition,
        }
    }

    /// True when every metric satisfies its threshold
    pub fn all_passed(&self) -> bool {
        self.k.passed && self.l.passed && self.t.passed
    }

    /// Total number of per-class violations across all three metrics
    pub fn violation_count(&self) -> usize {
        self.k.violations.len() + self.l.violations.len() + self.t.violations.len()
    }
}
