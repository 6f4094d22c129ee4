//! Domain error types
//!
//! This module defines the error hierarchy for reidrisk. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main reidrisk error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ReidError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A value outside a generalization's domain, or an attribute name
    /// absent from the dataset schema
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Dataset loading errors
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// A single scenario failed during comparison
    #[error("Scenario '{name}' failed: {message}")]
    Scenario { name: String, message: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl ReidError {
    /// Wraps an error as a per-scenario failure
    pub fn scenario(name: impl Into<String>, source: &ReidError) -> Self {
        ReidError::Scenario {
            name: name.into(),
            message: source.to_string(),
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ReidError {
    fn from(err: std::io::Error) -> Self {
        ReidError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ReidError {
    fn from(err: serde_json::Error) -> Self {
        ReidError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ReidError {
    fn from(err: toml::de::Error) -> Self {
        ReidError::Configuration(format!("TOML parse error: {err}"))
    }
}
