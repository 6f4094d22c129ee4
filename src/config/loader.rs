//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::AssessmentConfig;
use crate::domain::errors::ReidError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into AssessmentConfig
/// 4. Applies environment variable overrides (REIDRISK_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use reidrisk::config::load_config;
///
/// let config = load_config("reidrisk.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AssessmentConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ReidError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ReidError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: AssessmentConfig = toml::from_str(&contents)
        .map_err(|e| ReidError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        ReidError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ReidError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the REIDRISK_* prefix
///
/// Environment variables follow the pattern: REIDRISK_<SECTION>_<KEY>
/// For example: REIDRISK_DATASET_PATH, REIDRISK_COMPARISON_FAIL_FAST
fn apply_env_overrides(config: &mut AssessmentConfig) {
    if let Ok(val) = std::env::var("REIDRISK_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("REIDRISK_DATASET_PATH") {
        config.dataset.path = val;
    }
    if let Ok(val) = std::env::var("REIDRISK_DATASET_SENSITIVE_ATTRIBUTE") {
        config.dataset.sensitive_attribute = val;
    }
    if let Ok(val) = std::env::var("REIDRISK_COMPARISON_FAIL_FAST") {
        config.comparison.fail_fast = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("REIDRISK_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("REIDRISK_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
