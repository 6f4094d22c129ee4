//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the reidrisk configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates internally; a returned config is a valid one
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Application: {}", config.application.name);
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dataset: {}", config.dataset.path);
        println!(
            "  Sensitive Attribute: {}",
            config.dataset.sensitive_attribute
        );
        println!("  Fail Fast: {}", config.comparison.fail_fast);
        println!("  Scenarios: {}", config.scenarios.len());
        for scenario in &config.scenarios {
            println!(
                "    - {} (QI: {}; {})",
                scenario.name,
                scenario.to_spec().qi_description(),
                scenario.thresholds
            );
        }
        println!();
        Ok(0)
    }
}
