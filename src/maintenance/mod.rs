//! Preventive maintenance optimization.
//!
//! # Modules
//!
//! - [`MaintenanceCosts`] / [`CostPair`] — itemized and collapsed cost inputs
//! - [`calculate_optimal_pm`] — age-replacement interval with its cost-rate curve
//!
//! # References
//!
//! - Barlow, R.E. & Proschan, F. (1965). *Mathematical Theory of Reliability*.
//! - Jardine, A.K.S. & Tsang, A.H.C. (2013). *Maintenance, Replacement, and
//!   Reliability*, 2nd ed., CRC Press.

mod cost;
mod pm;

pub use cost::{CostPair, MaintenanceCosts};
pub use pm::{
    calculate_optimal_pm, cost_curve, cost_rate, expected_cycle_length, CostCurveSettings, CostPoint,
    NoOptimum, PmOptimum, PmRecommendation,
};
