//! Point-in-time reliability metrics.
//!
//! # Functions
//!
//! - [`time_between_failures`] — inter-arrival times from filtered records
//! - [`calculate_metrics`] — MTBF, MTTR, availability, uptime and downtime
//!
//! # References
//!
//! - IEC 60050-192 (2015). *International Electrotechnical Vocabulary,
//!   Part 192: Dependability*.

mod calculator;
mod tbf;

pub use calculator::{calculate_metrics, ReliabilityMetrics};
pub use tbf::time_between_failures;
pub(crate) use tbf::chronological_failures;
