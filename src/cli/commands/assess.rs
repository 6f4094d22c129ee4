//! Assess command implementation
//!
//! Loads the configured dataset, runs every scenario through the metric
//! engine, and prints the comparison report.

use crate::adapters::dataset::load_json_file;
use crate::config::load_config;
use crate::core::scenario::compare_scenarios;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the assess command
#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Override the dataset path from the configuration file
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// Write the JSON report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the report as JSON instead of the console format
    #[arg(long)]
    pub json: bool,

    /// Abort on the first scenario error instead of isolating it
    #[arg(long)]
    pub fail_fast: bool,
}

impl AssessArgs {
    /// Execute the assess command
    ///
    /// Exit codes: 0 when every scenario passes, 1 when any scenario fails
    /// or violates its thresholds, 2 on configuration errors.
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let dataset_path = self
            .dataset
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.dataset.path));
        tracing::info!(
            dataset = %dataset_path.display(),
            scenarios = config.scenarios.len(),
            "Starting risk assessment"
        );

        let store = load_json_file(&dataset_path)?;
        let specs = config.scenario_specs();
        let fail_fast = self.fail_fast || config.comparison.fail_fast;

        let comparison = compare_scenarios(
            &store,
            &config.dataset.sensitive_attribute,
            &specs,
            fail_fast,
        )?;

        if self.json {
            println!("{}", comparison.format_json()?);
        } else {
            print!("{}", comparison.format_console());
        }

        if let Some(ref output) = self.output {
            comparison.write_to_file(output)?;
            tracing::info!(path = %output.display(), "Report written");
        }

        Ok(if comparison.all_passed() { 0 } else { 1 })
    }
}
