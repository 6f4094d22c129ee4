//! Configuration management
//!
//! TOML-backed configuration with `${VAR}` substitution and `REIDRISK_*`
//! environment overrides.

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, AssessmentConfig, ComparisonConfig, DatasetConfig, LoggingConfig,
    ScenarioConfig,
};
