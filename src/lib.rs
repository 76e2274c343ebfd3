//! # u-reliability
//!
//! Reliability engineering indicators from maintenance and failure event
//! logs: MTBF, MTTR, availability, Weibull life analysis, preventive
//! maintenance optimization, reliability growth and rolling trends.
//!
//! The crate is a pure computation core. It receives already-typed event
//! records and returns typed results; parsing source spreadsheets,
//! rendering charts and exporting reports belong to the caller.
//!
//! ## Modules
//!
//! - [`record`] — Event and maintenance task records
//! - [`filter`] — Read-only selection by asset, failure mode and stoppage type
//! - [`frequency`] — Maintenance frequency normalization and annual workload
//! - [`metrics`] — Time between failures, MTBF, MTTR, availability
//! - [`weibull`] — Median rank regression, reliability functions, TBF histogram
//! - [`maintenance`] — Age-replacement PM interval and cost-rate curve
//! - [`growth`] — Crow-AMSAA reliability growth
//! - [`trend`] — Rolling MTBF/MTTR
//! - [`analysis`] — All of the above over one record subset
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every result is recomputed from immutable input
//! - **Explicit degeneracy**: too little data yields
//!   [`Estimate::InsufficientData`](estimate::Estimate), never a zero that
//!   looks like a fit
//! - **Research-backed**: algorithms reference the reliability literature

pub mod analysis;
pub mod config;
pub mod error;
pub mod estimate;
pub mod filter;
pub mod frequency;
pub mod growth;
pub mod maintenance;
pub mod metrics;
mod ols;
pub mod record;
pub mod trend;
pub mod weibull;

pub use error::ReliabilityError;
pub use estimate::{Estimate, InsufficientData};
