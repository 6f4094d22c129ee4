//! Result type alias for reidrisk
//!
//! This module provides a convenient Result type alias that uses ReidError
//! as the error type.

use super::errors::ReidError;

/// Result type alias for reidrisk operations
///
/// This is a convenience type alias that uses `ReidError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use reidrisk::domain::result::Result;
/// use reidrisk::domain::errors::ReidError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ReidError::InvalidInput("bad value".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ReidError>;
