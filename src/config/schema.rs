//! Configuration schema types
//!
//! This module defines the configuration structure for reidrisk. The root
//! structure maps one-to-one onto the TOML file.

use crate::core::report::Thresholds;
use crate::core::scenario::ScenarioSpec;
use crate::core::partition::QiAttribute;
use serde::{Deserialize, Serialize};

fn default_log_level() -> String {
    "info".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

fn default_log_path() -> String {
    "./logs".to_string()
}

/// Main reidrisk configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentConfig {
    /// Application-level settings
    pub application: ApplicationConfig,

    /// Dataset source and sensitive attribute
    pub dataset: DatasetConfig,

    /// Scenarios to evaluate, in order
    #[serde(rename = "scenario")]
    pub scenarios: Vec<ScenarioConfig>,

    /// Comparison behavior
    #[serde(default)]
    pub comparison: ComparisonConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AssessmentConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.dataset.validate()?;

        if self.scenarios.is_empty() {
            return Err("at least one [[scenario]] is required".to_string());
        }
        for (i, scenario) in self.scenarios.iter().enumerate() {
            scenario
                .validate()
                .map_err(|e| format!("scenario {} ('{}'): {e}", i + 1, scenario.name))?;
        }

        let mut names: Vec<&str> = self.scenarios.iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        if names.len() != self.scenarios.len() {
            return Err("scenario names must be unique".to_string());
        }

        self.logging.validate()?;
        Ok(())
    }

    /// Converts the configured scenarios into core scenario specs
    pub fn scenario_specs(&self) -> Vec<ScenarioSpec> {
        self.scenarios.iter().map(ScenarioConfig::to_spec).collect()
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name used in logs
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("application.name must not be empty".to_string());
        }
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(format!("invalid log level: {other}")),
        }
    }
}

/// Dataset source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the JSON dataset file
    pub path: String,

    /// Name of the sensitive attribute (e.g. "Diagnosis")
    pub sensitive_attribute: String,
}

impl DatasetConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.trim().is_empty() {
            return Err("dataset.path must not be empty".to_string());
        }
        if self.sensitive_attribute.trim().is_empty() {
            return Err("dataset.sensitive_attribute must not be empty".to_string());
        }
        Ok(())
    }
}

/// One scenario block in the TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Scenario name used in reports
    pub name: String,

    /// Quasi-identifier attributes with their generalizations
    #[serde(rename = "quasi_identifier")]
    pub quasi_identifiers: Vec<QiAttribute>,

    /// Thresholds for this scenario
    pub thresholds: Thresholds,
}

impl ScenarioConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("scenario name must not be empty".to_string());
        }
        if self.quasi_identifiers.is_empty() {
            return Err("at least one [[scenario.quasi_identifier]] is required".to_string());
        }
        for qi in &self.quasi_identifiers {
            if qi.attribute.trim().is_empty() {
                return Err("quasi_identifier.attribute must not be empty".to_string());
            }
            qi.generalization.validate()?;
        }
        self.thresholds.validate()?;
        Ok(())
    }

    /// Converts into the core scenario spec
    pub fn to_spec(&self) -> ScenarioSpec {
        ScenarioSpec {
            name: self.name.clone(),
            quasi_identifiers: self.quasi_identifiers.clone(),
            thresholds: self.thresholds,
        }
    }
}

/// Comparison behavior
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Abort on the first scenario error instead of isolating it
    #[serde(default)]
    pub fail_fast: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable rotating file logging alongside console output
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy: "daily" or "hourly"
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        match self.local_rotation.as_str() {
            "daily" | "hourly" => Ok(()),
            other => Err(format!("invalid log rotation: {other}")),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}
