//! Median Rank Regression (MRR) for Weibull parameter estimation.
//!
//! Fits Weibull parameters using least-squares regression on the
//! linearized Weibull probability plot.

use serde::Serialize;

use crate::estimate::{Estimate, InsufficientData};
use crate::ols::fit_line;

/// Minimum number of failure times for a fit.
pub const MIN_WEIBULL_SAMPLES: usize = 3;

/// One point of the Weibull probability plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProbabilityPoint {
    /// `ln(t)`.
    pub x: f64,
    /// `ln(-ln(1 - F))` with `F` the median rank.
    pub y: f64,
}

/// Result of Weibull MRR fitting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeibullFit {
    /// Shape parameter (beta).
    pub shape: f64,
    /// Scale parameter (eta).
    pub scale: f64,
    /// Coefficient of determination (R-squared) measuring goodness of fit.
    pub r_squared: f64,
    /// Probability-plot points in ascending order of failure time.
    pub points: Vec<ProbabilityPoint>,
}

/// Fit a Weibull distribution using Median Rank Regression.
///
/// The linearized Weibull CDF is:
///
/// ```text
/// ln(-ln(1 - F(t))) = beta * ln(t) - beta * ln(eta)
/// ```
///
/// Plotting y = ln(-ln(1 - F_i)) vs x = ln(t_i) gives a line with
/// slope beta and intercept -beta * ln(eta).
///
/// Median ranks are computed using Bernard's approximation:
///
/// ```text
/// F_i = (i - 0.3) / (n + 0.4)
/// ```
///
/// # Algorithm
/// 1. Sort failure times ascending
/// 2. Compute median ranks F_i for each rank
/// 3. Transform: x_i = ln(t_i), y_i = ln(-ln(1 - F_i))
/// 4. Fit line y = a + b*x using ordinary least squares
/// 5. beta = b, eta = exp(-a/b)
///
/// # Returns
/// - `TooFewSamples` with fewer than 3 values
/// - `InvalidSample` if any value is non-positive or non-finite
/// - `DegenerateRegression` if all values are identical or the slope is
///   not positive
///
/// # Examples
///
/// ```
/// use u_reliability::weibull::weibull_mrr;
/// let data = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0];
/// let fit = weibull_mrr(&data).computed().unwrap();
/// assert!(fit.shape > 0.0);
/// assert!(fit.scale > 0.0);
/// assert!(fit.r_squared > 0.9);
/// assert_eq!(fit.points.len(), data.len());
/// ```
///
/// # Reference
/// Abernethy (2006), *The New Weibull Handbook*, 5th ed.
pub fn weibull_mrr(failure_times: &[f64]) -> Estimate<WeibullFit> {
    let n = failure_times.len();
    if n < MIN_WEIBULL_SAMPLES {
        return Estimate::too_few(MIN_WEIBULL_SAMPLES, n);
    }

    if !failure_times.iter().all(|&t| t.is_finite() && t > 0.0) {
        return InsufficientData::InvalidSample.into();
    }

    let mut sorted = failure_times.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let n_f = n as f64;
    let points: Vec<ProbabilityPoint> = sorted
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            let rank = (i as f64 + 1.0 - 0.3) / (n_f + 0.4);
            ProbabilityPoint {
                x: t.ln(),
                y: (-(1.0 - rank).ln()).ln(),
            }
        })
        .collect();

    let x: Vec<f64> = points.iter().map(|p| p.x).collect();
    let y: Vec<f64> = points.iter().map(|p| p.y).collect();

    let Some(line) = fit_line(&x, &y) else {
        tracing::debug!(n, "weibull regression is degenerate");
        return InsufficientData::DegenerateRegression.into();
    };

    let beta = line.slope;
    if !beta.is_finite() || beta <= 0.0 {
        return InsufficientData::DegenerateRegression.into();
    }

    let eta = (-line.intercept / beta).exp();
    if !eta.is_finite() || eta <= 0.0 {
        return InsufficientData::DegenerateRegression.into();
    }

    Estimate::Computed(WeibullFit {
        shape: beta,
        scale: eta,
        r_squared: line.r_squared,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mrr_reference_values() {
        let data = [10.0, 20.0, 30.0, 40.0, 50.0];
        let fit = weibull_mrr(&data).computed().expect("MRR should succeed");
        assert!((fit.shape - 1.6241578097944904).abs() < 1e-9, "shape = {}", fit.shape);
        assert!((fit.scale - 35.24502471153682).abs() < 1e-9, "scale = {}", fit.scale);
        assert!((fit.r_squared - 0.9897778566353944).abs() < 1e-9, "R^2 = {}", fit.r_squared);
    }

    #[test]
    fn test_mrr_points() {
        let data = [30.0, 10.0, 20.0];
        let fit = weibull_mrr(&data).computed().expect("MRR should succeed");
        assert_eq!(fit.points.len(), 3);
        assert!((fit.points[0].x - 10.0_f64.ln()).abs() < 1e-12);
        let f1: f64 = 0.7 / 3.4;
        assert!((fit.points[0].y - (-(1.0 - f1).ln()).ln()).abs() < 1e-12);
        assert!(fit.points.windows(2).all(|w| w[0].x < w[1].x && w[0].y < w[1].y));
    }

    #[test]
    fn test_mrr_uniform_spacing() {
        let data = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0];
        let result = weibull_mrr(&data).computed().expect("MRR should succeed");

        assert!(
            result.shape > 1.0 && result.shape < 5.0,
            "shape = {}, expected in [1.0, 5.0]",
            result.shape
        );
        assert!(
            result.scale > 40.0 && result.scale < 100.0,
            "scale = {}, expected in [40, 100]",
            result.scale
        );
        assert!(result.r_squared > 0.9, "R^2 = {}", result.r_squared);
    }

    #[test]
    fn test_mrr_insufficient_data() {
        assert_eq!(
            weibull_mrr(&[]).reason(),
            Some(InsufficientData::TooFewSamples { required: 3, available: 0 })
        );
        assert_eq!(
            weibull_mrr(&[10.0, 20.0]).reason(),
            Some(InsufficientData::TooFewSamples { required: 3, available: 2 })
        );
    }

    #[test]
    fn test_mrr_invalid_data() {
        for data in [
            [0.0, 10.0, 20.0],
            [-5.0, 10.0, 20.0],
            [f64::NAN, 10.0, 20.0],
            [f64::INFINITY, 10.0, 20.0],
        ] {
            assert_eq!(weibull_mrr(&data).reason(), Some(InsufficientData::InvalidSample));
        }
    }

    #[test]
    fn test_mrr_recovers_known_parameters() {
        // Exact quantiles of Weibull(beta=2.0, eta=500.0) at the Bernard ranks.
        let n = 40;
        let data: Vec<f64> = (1..=n)
            .map(|i| {
                let f = (i as f64 - 0.3) / (n as f64 + 0.4);
                500.0 * (-(1.0 - f).ln()).powf(0.5)
            })
            .collect();

        let fit = weibull_mrr(&data).computed().expect("MRR should succeed");
        assert!((fit.shape - 2.0).abs() < 1e-9, "shape = {}", fit.shape);
        assert!((fit.scale - 500.0).abs() < 1e-6, "scale = {}", fit.scale);
        assert!(fit.r_squared > 0.999_999, "R^2 = {}", fit.r_squared);
    }

    #[test]
    fn test_mrr_near_weibull_sample() {
        // Mid-point plotting positions: close to, not exactly on, the line.
        let data: Vec<f64> = (1..=30)
            .map(|i| {
                let f = (i as f64 - 0.5) / 30.0;
                120.0 * (-(1.0 - f).ln()).powf(1.0 / 3.0)
            })
            .collect();
        let fit = weibull_mrr(&data).computed().expect("MRR should succeed");
        assert!((fit.shape - 3.0).abs() < 0.3, "shape = {}", fit.shape);
        assert!((fit.scale - 120.0).abs() < 6.0, "scale = {}", fit.scale);
        assert!(fit.r_squared > 0.98, "R^2 = {}", fit.r_squared);
    }

    #[test]
    fn test_mrr_unsorted_input() {
        let r1 = weibull_mrr(&[10.0, 20.0, 30.0, 40.0, 50.0]).computed().expect("fit");
        let r2 = weibull_mrr(&[50.0, 10.0, 40.0, 20.0, 30.0]).computed().expect("fit");
        assert!((r1.shape - r2.shape).abs() < 1e-10);
        assert!((r1.scale - r2.scale).abs() < 1e-10);
    }

    #[test]
    fn test_mrr_identical_values() {
        let data = [10.0, 10.0, 10.0, 10.0, 10.0];
        assert_eq!(
            weibull_mrr(&data).reason(),
            Some(InsufficientData::DegenerateRegression)
        );
    }
}
