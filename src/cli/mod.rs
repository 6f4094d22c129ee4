//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for reidrisk using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// reidrisk - Re-identification Risk Assessment
#[derive(Parser, Debug)]
#[command(name = "reidrisk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "reidrisk.toml", env = "REIDRISK_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "REIDRISK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the configured scenarios against the dataset and report violations
    Assess(commands::assess::AssessArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_assess() {
        let cli = Cli::parse_from(["reidrisk", "assess"]);
        assert_eq!(cli.config, "reidrisk.toml");
        assert!(matches!(cli.command, Commands::Assess(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["reidrisk", "--config", "custom.toml", "assess"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["reidrisk", "--log-level", "debug", "assess"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_assess_flags() {
        let cli = Cli::parse_from(["reidrisk", "assess", "--json", "--fail-fast"]);
        match cli.command {
            Commands::Assess(args) => {
                assert!(args.json);
                assert!(args.fail_fast);
            }
            _ => panic!("expected assess command"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["reidrisk", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["reidrisk", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
