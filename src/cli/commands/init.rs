//! Init command implementation
//!
//! Writes a starter configuration file with the reference scenarios so a
//! new assessment can be edited into place rather than written from scratch.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the configuration file
    #[arg(short, long, default_value = "reidrisk.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

const STARTER_CONFIG: &str = r#"# reidrisk configuration
#
# Assesses re-identification risk of a tabular dataset by computing
# k-anonymity, l-diversity, and t-closeness per scenario.

[application]
name = "reidrisk"
log_level = "info"

[dataset]
# JSON array of flat objects; integers, strings, and nulls are supported.
path = "patients.json"
sensitive_attribute = "Diagnosis"

[comparison]
# Abort on the first scenario error instead of reporting it individually.
fail_fast = false

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"

# Raw quasi-identifiers: every distinct (Age, ZIP, Gender) tuple is its own
# equivalence class.
[[scenario]]
name = "raw"

[[scenario.quasi_identifier]]
attribute = "Age"

[[scenario.quasi_identifier]]
attribute = "ZIP"

[[scenario.quasi_identifier]]
attribute = "Gender"

[scenario.thresholds]
k_min = 2
l_min = 2
t_max = 0.5

# Generalized quasi-identifiers: ages banded to decades, ZIPs truncated to
# a 3-character prefix.
[[scenario]]
name = "generalized"

[[scenario.quasi_identifier]]
attribute = "Age"
generalization = { kind = "band", width = 10 }

[[scenario.quasi_identifier]]
attribute = "ZIP"
generalization = { kind = "prefix", length = 3, mask = "**" }

[scenario.thresholds]
k_min = 2
l_min = 2
t_max = 0.34
"#;

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        if self.output.exists() && !self.force {
            eprintln!(
                "❌ {} already exists (use --force to overwrite)",
                self.output.display()
            );
            return Ok(2);
        }

        std::fs::write(&self.output, STARTER_CONFIG)?;
        println!("✅ Wrote starter configuration to {}", self.output.display());
        println!("   Edit the dataset path and scenarios, then run: reidrisk assess");
        Ok(0)
    }
}
