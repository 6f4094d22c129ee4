//! Scenario comparator
//!
//! Runs the full pipeline (partition -> metrics -> report) for an ordered
//! list of scenario configurations against the same read-only record store
//! and juxtaposes the results. Scenarios are independent pure functions of
//! their own inputs: a failing scenario is reported individually and never
//! aborts its siblings unless the caller asks for fail-fast behavior.

use crate::core::metrics::{Distribution, MetricResult};
use crate::core::partition::{partition, QiAttribute};
use crate::core::report::{Thresholds, ViolationReport};
use crate::domain::errors::ReidError;
use crate::domain::record::RecordStore;
use crate::domain::result::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// One scenario: a QI set with generalizations and its thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    /// Scenario name used in reports and logs
    pub name: String,

    /// Ordered quasi-identifier attributes with their generalizations
    pub quasi_identifiers: Vec<QiAttribute>,

    /// Thresholds this scenario is judged against
    pub thresholds: Thresholds,
}

impl ScenarioSpec {
    /// Human-readable QI set description, e.g. `Age[band(width=10)], ZIP`
    pub fn qi_description(&self) -> String {
        self.quasi_identifiers
            .iter()
            .map(|qi| qi.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Completed evaluation of one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// Scenario name
    pub name: String,

    /// QI set used, rendered for reports
    pub quasi_identifiers: String,

    /// Number of equivalence classes in the partition
    pub class_count: usize,

    /// The three privacy metrics
    pub metrics: MetricResult,

    /// Threshold evaluation with per-class violations
    pub report: ViolationReport,
}

/// Result of one scenario within a comparison
///
/// Failures are isolated per scenario so one bad configuration (say, a
/// mistyped attribute name) still lets sibling scenarios complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ScenarioResult {
    /// The scenario ran to completion
    Completed(ScenarioOutcome),

    /// The scenario failed; the error is terminal for this scenario only
    Failed { name: String, error: String },
}

impl ScenarioResult {
    /// Scenario name regardless of outcome
    pub fn name(&self) -> &str {
        match self {
            ScenarioResult::Completed(outcome) => &outcome.name,
            ScenarioResult::Failed { name, .. } => name,
        }
    }

    /// True when the scenario completed and all metric checks passed
    pub fn passed(&self) -> bool {
        match self {
            ScenarioResult::Completed(outcome) => outcome.report.all_passed(),
            ScenarioResult::Failed { .. } => false,
        }
    }
}

/// Juxtaposed results of all scenarios against one dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    /// Number of records in the assessed dataset
    pub record_count: usize,

    /// When the comparison was produced
    pub generated_at: DateTime<Utc>,

    /// Per-scenario results in caller-supplied order
    pub scenarios: Vec<ScenarioResult>,
}

impl ScenarioComparison {
    /// True when every scenario completed and passed its thresholds
    pub fn all_passed(&self) -> bool {
        self.scenarios.iter().all(ScenarioResult::passed)
    }

    /// Format the comparison for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("             RE-IDENTIFICATION RISK ASSESSMENT                 \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');
        output.push_str(&format!("  Records assessed: {}\n", self.record_count));
        output.push_str(&format!("  Scenarios:        {}\n", self.scenarios.len()));
        output.push('\n');

        for result in &self.scenarios {
            output.push_str("───────────────────────────────────────────────────────────────\n");
            match result {
                ScenarioResult::Completed(outcome) => {
                    let verdict = if outcome.report.all_passed() {
                        "PASS"
                    } else {
                        "FAIL"
                    };
                    output.push_str(&format!("  Scenario: {}  [{verdict}]\n", outcome.name));
                    output.push_str(&format!("    QI set:  {}\n", outcome.quasi_identifiers));
                    output.push_str(&format!("    Classes: {}\n", outcome.class_count));
                    output.push_str(&format!(
                        "    k-anonymity: {:<6} (k_min {})  {}\n",
                        outcome.metrics.k,
                        outcome.report.k.threshold,
                        if outcome.report.k.passed { "✅" } else { "❌" }
                    ));
                    output.push_str(&format!(
                        "    l-diversity: {:<6} (l_min {})  {}\n",
                        outcome.metrics.l,
                        outcome.report.l.threshold,
                        if outcome.report.l.passed { "✅" } else { "❌" }
                    ));
                    output.push_str(&format!(
                        "    t-closeness: {:<6.3} (t_max {})  {}\n",
                        outcome.metrics.t,
                        outcome.report.t.threshold,
                        if outcome.report.t.passed { "✅" } else { "❌" }
                    ));
                    if outcome.report.empty_partition {
                        output.push_str(
                            "    (empty dataset: thresholds trivially satisfied)\n",
                        );
                    }
                    Self::push_violations(&mut output, "k", &outcome.report.k.violations);
                    Self::push_violations(&mut output, "l", &outcome.report.l.violations);
                    let t_rendered: Vec<(String, String)> = outcome
                        .report
                        .t
                        .violations
                        .iter()
                        .map(|v| (v.class_key.clone(), format!("{:.3}", v.observed)))
                        .collect();
                    Self::push_rendered_violations(&mut output, "t", &t_rendered);
                }
                ScenarioResult::Failed { name, error } => {
                    output.push_str(&format!("  Scenario: {name}  [ERROR]\n"));
                    output.push_str(&format!("    {error}\n"));
                }
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output
    }

    fn push_violations(output: &mut String, metric: &str, violations: &[crate::core::report::ClassViolation<usize>]) {
        let rendered: Vec<(String, String)> = violations
            .iter()
            .map(|v| (v.class_key.clone(), v.observed.to_string()))
            .collect();
        Self::push_rendered_violations(output, metric, &rendered);
    }

    fn push_rendered_violations(output: &mut String, metric: &str, violations: &[(String, String)]) {
        if violations.is_empty() {
            return;
        }
        output.push_str(&format!("    {metric}-violating classes:\n"));
        for (key, observed) in violations {
            output.push_str(&format!("      • {key} ({metric}={observed})\n"));
        }
    }

    /// Format the comparison as JSON for downstream renderers
    pub fn format_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the JSON report to a file
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self
            .format_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }
}

/// Runs one scenario: partition -> metrics -> report
///
/// # Errors
///
/// Returns [`ReidError::InvalidInput`] for an empty QI set, unknown
/// attribute names, or generalization domain mismatches.
pub fn run_scenario(
    store: &RecordStore,
    sensitive_attribute: &str,
    spec: &ScenarioSpec,
) -> Result<ScenarioOutcome> {
    debug!(scenario = %spec.name, qi = %spec.qi_description(), "Running scenario");

    let classes = partition(store, &spec.quasi_identifiers, sensitive_attribute)?;
    let global = if store.is_empty() {
        Distribution::default()
    } else {
        Distribution::from_values(&store.column(sensitive_attribute)?)
    };
    let metrics = MetricResult::compute(&classes, &global);
    let report = ViolationReport::evaluate(&classes, &global, &metrics, &spec.thresholds);

    info!(
        scenario = %spec.name,
        k = metrics.k,
        l = metrics.l,
        t = metrics.t,
        classes = classes.len(),
        passed = report.all_passed(),
        "Scenario evaluated"
    );

    Ok(ScenarioOutcome {
        name: spec.name.clone(),
        quasi_identifiers: spec.qi_description(),
        class_count: classes.len(),
        metrics,
        report,
    })
}

/// Runs every scenario against the same read-only store
///
/// With `fail_fast` set, the first scenario error aborts the whole
/// comparison; otherwise each failure is recorded as a
/// [`ScenarioResult::Failed`] entry and siblings keep running.
///
/// # Errors
///
/// Only with `fail_fast`: the first per-scenario error, wrapped as
/// [`ReidError::Scenario`].
pub fn compare_scenarios(
    store: &RecordStore,
    sensitive_attribute: &str,
    specs: &[ScenarioSpec],
    fail_fast: bool,
) -> Result<ScenarioComparison> {
    let mut scenarios = Vec::with_capacity(specs.len());
    for spec in specs {
        match run_scenario(store, sensitive_attribute, spec) {
            Ok(outcome) => scenarios.push(ScenarioResult::Completed(outcome)),
            Err(err) => {
                warn!(scenario = %spec.name, error = %err, "Scenario failed");
                if fail_fast {
                    return Err(ReidError::scenario(&spec.name, &err));
                }
                scenarios.push(ScenarioResult::Failed {
                    name: spec.name.clone(),
                    error: err.to_string(),
                });
            }
        }
    }

    Ok(ScenarioComparison {
        record_count: store.len(),
        generated_at: Utc::now(),
        scenarios,
    })
}
