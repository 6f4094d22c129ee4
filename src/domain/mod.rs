//! Core domain types
//!
//! This module contains the domain model shared by every layer: scalar
//! attribute values, the immutable record store, and the error hierarchy.

pub mod errors;
pub mod record;
pub mod result;
pub mod value;

pub use errors::ReidError;
pub use record::{Record, RecordStore};
pub use result::Result;
pub use value::AttributeValue;
