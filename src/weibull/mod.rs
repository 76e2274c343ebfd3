//! Weibull parameter estimation and reliability analysis.
//!
//! Fits a two-parameter Weibull distribution to time-between-failures data
//! by median rank regression (MRR) and evaluates its reliability functions.
//!
//! # Modules
//!
//! - [`weibull_mrr`] — Median Rank Regression via Bernard's approximation
//! - [`WeibullModel`] — R(t), f(t), hazard rate and B-life from fitted parameters
//! - [`weibull_histogram`] — empirical TBF histogram with the fitted density overlaid
//!
//! # References
//!
//! - Abernethy, R.B. (2006). *The New Weibull Handbook*, 5th ed.
//! - Dodson, B. (2006). *The Weibull Analysis Handbook*, 2nd ed.

mod histogram;
mod mrr;
mod reliability;

pub use histogram::{weibull_histogram, HistogramBin, DEFAULT_HISTOGRAM_BINS};
pub use mrr::{weibull_mrr, ProbabilityPoint, WeibullFit, MIN_WEIBULL_SAMPLES};
pub use reliability::{CurvePoint, FailureRegime, WeibullModel};
