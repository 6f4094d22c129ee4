//! External integrations
//!
//! Adapters own all I/O so the core stays a pure in-memory computation.

pub mod dataset;
