//! Errors for caller-supplied configuration and cost parameters.
//!
//! Data-driven degeneracy is never an error here; see
//! [`Estimate`](crate::estimate::Estimate).

/// Rejected analysis parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReliabilityError {
    #[error("{field} must be a finite non-negative value, got {value}")]
    InvalidCost { field: &'static str, value: f64 },

    #[error("rolling window must be at least 1")]
    ZeroWindow,

    #[error("histogram needs at least 1 bin")]
    ZeroBins,

    #[error("cost curve needs at least 2 points, got {0}")]
    TooFewCurvePoints(usize),

    #[error("numerical integration needs at least 1 step")]
    ZeroIntegrationSteps,

    #[error("cost curve range must satisfy 0 < start < end, got [{start}, {end}]")]
    InvalidCurveRange { start: f64, end: f64 },

    #[error("{field} must lie in the open interval (0, 1), got {value}")]
    InvalidFraction { field: &'static str, value: f64 },

    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidTolerance { field: &'static str, value: f64 },
}
