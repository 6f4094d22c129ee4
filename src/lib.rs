// reidrisk - Re-identification Risk Assessment
// Copyright (c) 2025 Reidrisk Contributors
// Licensed under the MIT License

//! # reidrisk - Re-identification Risk Assessment
//!
//! reidrisk assesses the re-identification risk of a quasi-identified tabular
//! dataset before release. It computes three privacy metrics (k-anonymity,
//! l-diversity, and t-closeness) over caller-chosen generalization
//! strategies and reports which equivalence classes violate configured
//! thresholds.
//!
//! ## Overview
//!
//! The pipeline for one scenario:
//! - **Partition** the record store into equivalence classes by the tuple of
//!   (possibly generalized) quasi-identifier values
//! - **Calculate** k (minimum class size), l (minimum distinct sensitive
//!   values per class), and t (maximum class-to-global distribution distance)
//! - **Report** pass/fail per metric with the individually responsible
//!   classes
//!
//! The scenario comparator runs this pipeline for multiple configurations
//! against the same read-only store and juxtaposes the results, e.g. exact
//! age versus age-banded, or full ZIP versus truncated ZIP.
//!
//! ## Architecture
//!
//! reidrisk follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The privacy-metric engine (generalization, partitioning,
//!   metrics, reporting, scenario comparison)
//! - [`adapters`] - External integrations (dataset loading)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use reidrisk::core::{compare_scenarios, Generalization, QiAttribute};
//! use reidrisk::core::{ScenarioSpec, Thresholds};
//! use reidrisk::domain::{Record, RecordStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = RecordStore::new(
//!     vec!["Age".into(), "ZIP".into(), "Diagnosis".into()],
//!     vec![
//!         Record::new(vec![28.into(), "35294".into(), "Asthma".into()]),
//!         Record::new(vec![29.into(), "35295".into(), "Diabetes".into()]),
//!     ],
//! )?;
//!
//! let scenario = ScenarioSpec {
//!     name: "banded".into(),
//!     quasi_identifiers: vec![
//!         QiAttribute::generalized("Age", Generalization::Band { width: 10 }),
//!         QiAttribute::generalized("ZIP", Generalization::Prefix {
//!             length: 3,
//!             mask: "**".into(),
//!         }),
//!     ],
//!     thresholds: Thresholds { k_min: 2, l_min: 2, t_max: 0.34 },
//! };
//!
//! let comparison = compare_scenarios(&store, "Diagnosis", &[scenario], false)?;
//! println!("{}", comparison.format_console());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! reidrisk uses the [`domain::ReidError`] type for all errors:
//!
//! ```rust,no_run
//! use reidrisk::domain::ReidError;
//!
//! fn example() -> Result<(), ReidError> {
//!     let config = reidrisk::config::load_config("reidrisk.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! reidrisk uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting assessment");
//! warn!(scenario = "raw", "Scenario failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
