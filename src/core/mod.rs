//! Privacy-metric engine
//!
//! The algorithmic core: generalization functions, the equivalence-class
//! partitioner, the three metric calculators, the violation reporter, and
//! the scenario comparator. Everything here is a pure, synchronous batch
//! computation over the read-only record store: no I/O, no hidden state.

pub mod generalize;
pub mod metrics;
pub mod partition;
pub mod report;
pub mod scenario;

pub use generalize::Generalization;
pub use metrics::{Distribution, MetricResult};
pub use partition::{partition, ClassKey, EquivalenceClass, QiAttribute};
pub use report::{Thresholds, ViolationReport};
pub use scenario::{compare_scenarios, run_scenario, ScenarioComparison, ScenarioSpec};
