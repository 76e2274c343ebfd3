//! Age-replacement preventive maintenance interval.
//!
//! # Algorithm
//!
//! Under an age-replacement policy a component is replaced preventively at
//! age T, or correctively on failure if that comes first. By the
//! renewal-reward theorem the long-run cost per unit time is
//!
//! ```text
//! C(T) = (Cp * R(T) + Cc * (1 - R(T))) / M(T),    M(T) = integral_0^T R(x) dx
//! ```
//!
//! where M(T) is the expected cycle length. For a Weibull life the
//! closed-form candidate
//!
//! ```text
//! T* = eta * (Cp / (Cc * (beta - 1)))^(1/beta)
//! ```
//!
//! is an approximation that ignores the T-dependence of M(T). It is
//! therefore returned together with the numerically evaluated cost curve
//! and that curve's minimum, so callers can check the two agree.
//!
//! # Reference
//!
//! Barlow, R.E. & Proschan, F. (1965). *Mathematical Theory of Reliability*,
//! Wiley, Ch. 4.

use serde::{Deserialize, Serialize};

use super::cost::CostPair;
use crate::error::ReliabilityError;
use crate::weibull::WeibullModel;

/// Sampling of the cost-rate curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostCurveSettings {
    /// Number of intervals sampled, both range ends included.
    pub points: usize,
    /// Trapezoid sub-intervals used for each M(T).
    pub integration_steps: usize,
    /// First sampled interval as a multiple of eta.
    pub range_start: f64,
    /// Last sampled interval as a multiple of eta.
    pub range_end: f64,
}

impl Default for CostCurveSettings {
    fn default() -> Self {
        Self {
            points: 50,
            integration_steps: 20,
            range_start: 0.1,
            range_end: 2.0,
        }
    }
}

impl CostCurveSettings {
    /// Checks the sampling parameters.
    pub fn validate(&self) -> Result<(), ReliabilityError> {
        if self.points < 2 {
            return Err(ReliabilityError::TooFewCurvePoints(self.points));
        }
        if self.integration_steps == 0 {
            return Err(ReliabilityError::ZeroIntegrationSteps);
        }
        if !(self.range_start > 0.0 && self.range_end > self.range_start && self.range_end.is_finite()) {
            return Err(ReliabilityError::InvalidCurveRange {
                start: self.range_start,
                end: self.range_end,
            });
        }
        Ok(())
    }
}

/// One sample of the cost-rate curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostPoint {
    /// Replacement age T.
    pub interval: f64,
    /// Long-run cost per unit time C(T).
    pub cost_rate: f64,
}

/// A recommended preventive interval with its supporting curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PmOptimum {
    /// Closed-form interval T*.
    pub interval: f64,
    /// C(T*), evaluated numerically.
    pub cost_rate: f64,
    /// Cost rate sampled over the configured range.
    pub curve: Vec<CostPoint>,
    /// Lowest-cost sample of `curve`.
    pub curve_minimum: CostPoint,
}

impl PmOptimum {
    /// `(C(T*) - min C) / min C`; negative when T* beats every sample.
    pub fn relative_gap(&self) -> f64 {
        (self.cost_rate - self.curve_minimum.cost_rate) / self.curve_minimum.cost_rate
    }
}

/// Why no preventive interval is recommended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum NoOptimum {
    /// beta <= 1: the hazard does not grow with age.
    NotWearOut { shape: f64 },
    /// Cp >= Cc: replacing early never saves money.
    PreventiveNotCheaper { preventive: f64, corrective: f64 },
    /// Cp = 0: the cost rate falls toward zero as T shrinks, so there is no
    /// interior minimum.
    FreePreventive,
    /// The scale parameter is not a positive finite number.
    InvalidScale { scale: f64 },
}

/// Outcome of [`calculate_optimal_pm`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PmRecommendation {
    /// Replace preventively at the given age.
    Scheduled(PmOptimum),
    /// Run to failure.
    RunToFailure(NoOptimum),
}

impl PmRecommendation {
    /// The optimum, if a preventive interval is recommended.
    pub fn optimum(&self) -> Option<&PmOptimum> {
        match self {
            PmRecommendation::Scheduled(opt) => Some(opt),
            PmRecommendation::RunToFailure(_) => None,
        }
    }
}

/// Computes the age-replacement interval minimizing the long-run cost rate.
///
/// Preconditions are checked in order: beta > 1, Cp < Cc, Cp > 0, eta
/// valid. Any failure yields [`PmRecommendation::RunToFailure`].
///
/// # Examples
///
/// ```
/// use u_reliability::maintenance::{calculate_optimal_pm, CostCurveSettings, CostPair};
///
/// let costs = CostPair::new(100.0, 1_000.0).unwrap();
/// let rec = calculate_optimal_pm(2.5, 1_000.0, costs, &CostCurveSettings::default());
/// let opt = rec.optimum().unwrap();
/// assert!(opt.interval > 0.0 && opt.interval < 1_000.0);
/// assert_eq!(opt.curve.len(), 50);
/// assert!(opt.relative_gap().abs() < 0.01);
///
/// // Random failures: no preventive benefit.
/// let rec = calculate_optimal_pm(1.0, 1_000.0, costs, &CostCurveSettings::default());
/// assert!(rec.optimum().is_none());
/// ```
pub fn calculate_optimal_pm(
    shape: f64,
    scale: f64,
    costs: CostPair,
    settings: &CostCurveSettings,
) -> PmRecommendation {
    if !(shape > 1.0) {
        return PmRecommendation::RunToFailure(NoOptimum::NotWearOut { shape });
    }
    if !(costs.preventive < costs.corrective) {
        return PmRecommendation::RunToFailure(NoOptimum::PreventiveNotCheaper {
            preventive: costs.preventive,
            corrective: costs.corrective,
        });
    }
    if !(costs.preventive > 0.0) {
        return PmRecommendation::RunToFailure(NoOptimum::FreePreventive);
    }
    let Some(model) = WeibullModel::new(shape, scale) else {
        return PmRecommendation::RunToFailure(NoOptimum::InvalidScale { scale });
    };

    let interval = scale * (costs.preventive / (costs.corrective * (shape - 1.0))).powf(1.0 / shape);
    let steps = settings.integration_steps.max(1);
    let cost_rate = cost_rate(&model, costs, interval, steps);

    let curve = cost_curve(&model, costs, settings);
    let curve_minimum = curve
        .iter()
        .copied()
        .min_by(|a, b| a.cost_rate.total_cmp(&b.cost_rate))
        .unwrap_or(CostPoint {
            interval,
            cost_rate,
        });

    tracing::debug!(
        interval,
        cost_rate,
        curve_min_interval = curve_minimum.interval,
        curve_min_cost = curve_minimum.cost_rate,
        "preventive interval computed"
    );

    PmRecommendation::Scheduled(PmOptimum {
        interval,
        cost_rate,
        curve,
        curve_minimum,
    })
}

/// Samples C(T) at `settings.points` intervals spanning
/// `[range_start * eta, range_end * eta]`, both ends included.
///
/// Returns an empty vector for fewer than 2 points.
pub fn cost_curve(model: &WeibullModel, costs: CostPair, settings: &CostCurveSettings) -> Vec<CostPoint> {
    if settings.points < 2 {
        return Vec::new();
    }
    let start = settings.range_start * model.scale();
    let end = settings.range_end * model.scale();
    let step = (end - start) / (settings.points - 1) as f64;
    let steps = settings.integration_steps.max(1);

    (0..settings.points)
        .map(|i| {
            let interval = start + step * i as f64;
            CostPoint {
                interval,
                cost_rate: cost_rate(model, costs, interval, steps),
            }
        })
        .collect()
}

/// Long-run cost per unit time when replacing at age `interval`.
///
/// Returns infinity for a non-positive interval.
pub fn cost_rate(model: &WeibullModel, costs: CostPair, interval: f64, steps: usize) -> f64 {
    let cycle = expected_cycle_length(model, interval, steps);
    if !(cycle > 0.0) {
        return f64::INFINITY;
    }
    let r = model.reliability(interval);
    (costs.preventive * r + costs.corrective * (1.0 - r)) / cycle
}

/// M(T) = integral of R over [0, T] by the composite trapezoid rule.
pub fn expected_cycle_length(model: &WeibullModel, interval: f64, steps: usize) -> f64 {
    if !(interval > 0.0) || steps == 0 {
        return 0.0;
    }
    let h = interval / steps as f64;
    let interior: f64 = (1..steps).map(|j| model.reliability(j as f64 * h)).sum();
    h * (0.5 * model.reliability(0.0) + interior + 0.5 * model.reliability(interval))
}
