//! Dataset loading adapters
//!
//! External glue that turns on-disk tabular data into the immutable
//! [`crate::domain::RecordStore`] the core consumes.

pub mod json;

pub use json::{load_json_file, parse_json};
