//! Reliability growth tracking with the Crow-AMSAA (NHPP power-law) model.
//!
//! # Model
//!
//! Cumulative failures up to operating time t follow
//!
//! ```text
//! N(t) = lambda * t^beta
//! ```
//!
//! so `ln N = ln lambda + beta * ln t` is a straight line on log-log axes.
//! The parameters are estimated by least squares on that line, with t
//! measured from the first recorded failure.
//!
//! - beta < 1: failures arrive more slowly over time (improving)
//! - beta = 1: homogeneous Poisson process (stable)
//! - beta > 1: failures arrive faster over time (deteriorating)
//!
//! # Reference
//!
//! Crow, L.H. (1974). "Reliability Analysis for Complex, Repairable Systems",
//! in *Reliability and Biometry*, SIAM, pp. 379-410.

use std::borrow::Borrow;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::estimate::{Estimate, InsufficientData};
use crate::metrics::chronological_failures;
use crate::ols::fit_line;
use crate::record::{hours_between, EventRecord};

/// Minimum number of points with positive cumulative time.
pub const MIN_GROWTH_POINTS: usize = 3;

/// Direction of reliability change implied by beta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GrowthTrend {
    Improving,
    Stable,
    Deteriorating,
}

/// Fitted power law `N(t) = lambda * t^beta`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerLaw {
    /// Growth (shape) parameter.
    pub beta: f64,
    /// Intensity (scale) parameter.
    pub lambda: f64,
    /// R-squared of the log-log regression.
    pub r_squared: f64,
}

impl PowerLaw {
    /// Expected cumulative failures by time `t`.
    pub fn expected_failures(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        self.lambda * t.powf(self.beta)
    }

    /// Failure intensity `dN/dt = lambda * beta * t^(beta - 1)`.
    pub fn intensity(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        self.lambda * self.beta * t.powf(self.beta - 1.0)
    }

    /// Instantaneous MTBF, the reciprocal of the intensity at `t`.
    ///
    /// Infinite when the intensity is 0.
    pub fn instantaneous_mtbf(&self, t: f64) -> f64 {
        let rate = self.intensity(t);
        if rate > 0.0 {
            1.0 / rate
        } else {
            f64::INFINITY
        }
    }

    /// Classifies beta; `tolerance` is the half-width of the stable band
    /// around 1.0.
    pub fn trend(&self, tolerance: f64) -> GrowthTrend {
        if (self.beta - 1.0).abs() <= tolerance {
            GrowthTrend::Stable
        } else if self.beta < 1.0 {
            GrowthTrend::Improving
        } else {
            GrowthTrend::Deteriorating
        }
    }
}

/// One failure on the cumulative plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthPoint {
    /// Hours since the first failure.
    pub cumulative_hours: f64,
    /// Failures so far, including this one.
    pub cumulative_failures: usize,
    pub date: NaiveDateTime,
}

/// Crow-AMSAA fit over a record subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthModel {
    pub power_law: PowerLaw,
    /// Every failure in chronological order, the first one at time 0.
    pub points: Vec<GrowthPoint>,
}

/// Fits the power law to cumulative times since the first failure.
///
/// `cumulative_hours[k]` is the time of failure `k + 1`; times that are not
/// positive (the first failure itself, simultaneous failures) are left out
/// of the regression, but still count toward the cumulative failures of
/// later points. Input must be non-decreasing.
///
/// # Returns
/// - `TooFewSamples` if fewer than 3 positive times remain
/// - `InvalidSample` for non-finite times
/// - `DegenerateRegression` if every positive time is identical
///
/// # Examples
///
/// ```
/// use u_reliability::growth::fit_power_law;
///
/// // N(t) = 0.5 * t^0.8 exactly, failure 1 at t = 0.
/// let times: Vec<f64> = (1..=8)
///     .map(|k| if k == 1 { 0.0 } else { (k as f64 / 0.5).powf(1.0 / 0.8) })
///     .collect();
/// let law = fit_power_law(&times).computed().unwrap();
/// assert!((law.beta - 0.8).abs() < 1e-9);
/// assert!((law.lambda - 0.5).abs() < 1e-9);
/// ```
pub fn fit_power_law(cumulative_hours: &[f64]) -> Estimate<PowerLaw> {
    if cumulative_hours.iter().any(|t| !t.is_finite()) {
        return InsufficientData::InvalidSample.into();
    }

    let (ln_t, ln_n): (Vec<f64>, Vec<f64>) = cumulative_hours
        .iter()
        .enumerate()
        .filter(|&(_, &t)| t > 0.0)
        .map(|(k, &t)| (t.ln(), ((k + 1) as f64).ln()))
        .unzip();

    if ln_t.len() < MIN_GROWTH_POINTS {
        return Estimate::too_few(MIN_GROWTH_POINTS, ln_t.len());
    }

    match fit_line(&ln_t, &ln_n) {
        Some(line) => Estimate::Computed(PowerLaw {
            beta: line.slope,
            lambda: line.intercept.exp(),
            r_squared: line.r_squared,
        }),
        None => InsufficientData::DegenerateRegression.into(),
    }
}

/// Fits Crow-AMSAA to the Unplanned, timestamped records of a subset.
///
/// Failures are ordered by start; cumulative time is measured start to
/// start from the first failure, which therefore sits at time 0 and is
/// excluded from the log-log regression.
pub fn crow_amsaa<R: Borrow<EventRecord>>(records: &[R]) -> Estimate<GrowthModel> {
    let failures = chronological_failures(records);
    let Some(origin) = failures.first().and_then(|r| r.start) else {
        return Estimate::too_few(MIN_GROWTH_POINTS, 0);
    };

    let points: Vec<GrowthPoint> = failures
        .iter()
        .enumerate()
        .filter_map(|(k, r)| {
            let date = r.start?;
            Some(GrowthPoint {
                cumulative_hours: hours_between(origin, date),
                cumulative_failures: k + 1,
                date,
            })
        })
        .collect();

    let times: Vec<f64> = points.iter().map(|p| p.cumulative_hours).collect();
    fit_power_law(&times).map(|power_law| GrowthModel { power_law, points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::StoppageType;
    use chrono::{Duration, NaiveDate};

    fn origin() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 6, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid timestamp")
    }

    fn failure_at(hours: f64) -> EventRecord {
        let offset = Duration::milliseconds((hours * 3_600_000.0).round() as i64);
        EventRecord::new("f", StoppageType::Unplanned, "C-7", "Trip").with_start(origin() + offset)
    }

    fn exact_times(lambda: f64, beta: f64, n: usize) -> Vec<f64> {
        (1..=n)
            .map(|k| if k == 1 { 0.0 } else { (k as f64 / lambda).powf(1.0 / beta) })
            .collect()
    }

    #[test]
    fn test_recovers_exact_power_law() {
        for (lambda, beta) in [(0.05, 0.6), (0.2, 1.0), (0.001, 1.7)] {
            let law = fit_power_law(&exact_times(lambda, beta, 12)).computed().expect("fit");
            assert!((law.beta - beta).abs() < 1e-9, "beta = {}", law.beta);
            assert!((law.lambda - lambda).abs() / lambda < 1e-9, "lambda = {}", law.lambda);
            assert!((law.r_squared - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_from_records() {
        let records: Vec<EventRecord> = exact_times(0.02, 1.4, 10)
            .into_iter()
            .rev()
            .map(failure_at)
            .collect();
        let model = crow_amsaa(&records).computed().expect("fit");
        assert!((model.power_law.beta - 1.4).abs() < 1e-6, "beta = {}", model.power_law.beta);
        assert!((model.power_law.lambda - 0.02).abs() / 0.02 < 1e-5);
        assert_eq!(model.power_law.trend(0.05), GrowthTrend::Deteriorating);

        assert_eq!(model.points.len(), 10);
        assert_eq!(model.points[0].cumulative_hours, 0.0);
        assert_eq!(model.points[0].cumulative_failures, 1);
        assert_eq!(model.points[9].cumulative_failures, 10);
        assert!(model.points.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn test_ignores_planned_events() {
        let mut records: Vec<EventRecord> = exact_times(0.1, 0.7, 8).into_iter().map(failure_at).collect();
        records.push(
            EventRecord::new("p", StoppageType::Planned, "C-7", "PM").with_start(origin() + Duration::hours(3)),
        );
        let model = crow_amsaa(&records).computed().expect("fit");
        assert_eq!(model.points.len(), 8);
        assert_eq!(model.power_law.trend(0.05), GrowthTrend::Improving);
    }

    #[test]
    fn test_too_few_points() {
        // Three failures leave two usable points after the origin.
        let records: Vec<EventRecord> = [0.0, 10.0, 30.0].into_iter().map(failure_at).collect();
        assert_eq!(
            crow_amsaa(&records).reason(),
            Some(InsufficientData::TooFewSamples { required: 3, available: 2 })
        );
        let empty: Vec<EventRecord> = Vec::new();
        assert!(!crow_amsaa(&empty).is_computed());
    }

    #[test]
    fn test_simultaneous_first_failures_dropped() {
        // Two failures at the origin leave only two positive times.
        let times = [0.0, 0.0, 5.0, 9.0];
        assert_eq!(
            fit_power_law(&times).reason(),
            Some(InsufficientData::TooFewSamples { required: 3, available: 2 })
        );
        // Counts still include the dropped failures.
        let law = fit_power_law(&[0.0, 0.0, 5.0, 9.0, 14.0]).computed().expect("fit");
        assert!(law.beta > 0.0);
    }

    #[test]
    fn test_degenerate_and_invalid() {
        assert_eq!(
            fit_power_law(&[0.0, 7.0, 7.0, 7.0]).reason(),
            Some(InsufficientData::DegenerateRegression)
        );
        assert_eq!(
            fit_power_law(&[0.0, 1.0, f64::NAN, 3.0]).reason(),
            Some(InsufficientData::InvalidSample)
        );
    }

    #[test]
    fn test_power_law_helpers() {
        let law = PowerLaw {
            beta: 2.0,
            lambda: 0.5,
            r_squared: 1.0,
        };
        assert!((law.expected_failures(4.0) - 8.0).abs() < 1e-12);
        assert!((law.intensity(4.0) - 4.0).abs() < 1e-12);
        assert!((law.instantaneous_mtbf(4.0) - 0.25).abs() < 1e-12);
        assert_eq!(law.expected_failures(0.0), 0.0);
        assert!(law.instantaneous_mtbf(0.0).is_infinite());
        assert_eq!(law.trend(0.05), GrowthTrend::Deteriorating);

        let stable = PowerLaw { beta: 0.98, ..law };
        assert_eq!(stable.trend(0.05), GrowthTrend::Stable);
    }
}
