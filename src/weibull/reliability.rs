//! Closed-form reliability functions of a fitted Weibull distribution.
//!
//! Provides the survival function, density, hazard rate and B-life
//! quantiles, plus sampled curves for plotting.

use serde::Serialize;

use super::mrr::WeibullFit;

/// Relative offset of the first sample in [`WeibullModel::curve`].
const CURVE_START_FRACTION: f64 = 1e-3;

/// Failure behaviour implied by the Weibull shape parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureRegime {
    /// beta < 1: decreasing hazard, early-life failures.
    InfantMortality,
    /// beta close to 1: constant hazard.
    Random,
    /// beta > 1: increasing hazard, age-related wear.
    WearOut,
}

/// One sample of the reliability curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub t: f64,
    pub reliability: f64,
    pub density: f64,
    pub hazard: f64,
}

/// A two-parameter Weibull distribution with validated parameters.
///
/// Given shape beta > 0 and scale eta > 0:
/// - Reliability: R(t) = exp(-(t/eta)^beta)
/// - Density: f(t) = (beta/eta) * (t/eta)^(beta-1) * R(t)
/// - Hazard rate: h(t) = (beta/eta) * (t/eta)^(beta-1)
/// - Quantile: t_p = eta * (-ln(1-p))^(1/beta)
///
/// Constructing the model is the guard against an unfitted (zero) shape:
/// every method may divide by beta or eta.
///
/// # Examples
///
/// ```
/// use u_reliability::weibull::WeibullModel;
/// let model = WeibullModel::new(2.0, 100.0).unwrap();
/// assert!((model.reliability(0.0) - 1.0).abs() < 1e-10);
/// assert!(model.hazard_rate(50.0) > 0.0);
/// let b10 = model.b_life(0.10).unwrap();
/// assert!(b10 > 0.0 && b10 < 100.0);
///
/// assert!(WeibullModel::new(0.0, 0.0).is_none());
/// ```
///
/// # Reference
/// Meeker & Escobar (1998), *Statistical Methods for Reliability Data*, Wiley.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeibullModel {
    shape: f64,
    scale: f64,
}

impl WeibullModel {
    /// Creates a model from Weibull parameters.
    ///
    /// # Returns
    /// `None` if either parameter is non-positive or non-finite.
    pub fn new(shape: f64, scale: f64) -> Option<Self> {
        if !shape.is_finite() || !scale.is_finite() || shape <= 0.0 || scale <= 0.0 {
            return None;
        }
        Some(Self { shape, scale })
    }

    /// Creates a model from an MRR fit.
    ///
    /// # Returns
    /// `None` under the same conditions as [`new`](Self::new); a fit built
    /// by hand can carry any parameters.
    pub fn from_fit(fit: &WeibullFit) -> Option<Self> {
        Self::new(fit.shape, fit.scale)
    }

    /// Returns the shape parameter (beta).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Returns the scale parameter (eta).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Reliability (survival) function. Returns 1.0 for t <= 0.
    ///
    /// # Reference
    /// Weibull (1951), *Journal of Applied Mechanics* 18(3), pp. 293-297.
    pub fn reliability(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        let z = t / self.scale;
        (-z.powf(self.shape)).exp()
    }

    /// Cumulative failure probability F(t) = 1 - R(t).
    pub fn unreliability(&self, t: f64) -> f64 {
        1.0 - self.reliability(t)
    }

    /// Probability density f(t).
    ///
    /// For t < 0 the density is 0. At t = 0 it is unbounded for beta < 1,
    /// equal to 1/eta for beta = 1 and 0 for beta > 1.
    pub fn density(&self, t: f64) -> f64 {
        if t < 0.0 {
            return 0.0;
        }
        self.hazard_rate(t) * self.reliability(t)
    }

    /// Failure rate (hazard function).
    ///
    /// - beta < 1: decreasing (infant mortality), unbounded at t = 0
    /// - beta = 1: constant 1/eta
    /// - beta > 1: increasing (wear-out), 0 at t = 0
    ///
    /// For t < 0, returns 0.0.
    ///
    /// # Reference
    /// Meeker & Escobar (1998), *Statistical Methods for Reliability Data*, Ch. 4.
    pub fn hazard_rate(&self, t: f64) -> f64 {
        if t < 0.0 {
            return 0.0;
        }
        let z = t / self.scale;
        (self.shape / self.scale) * z.powf(self.shape - 1.0)
    }

    /// Time by which a fraction `p` of the population has failed.
    ///
    /// ```text
    /// t_p = eta * (-ln(1 - p))^(1/beta)
    /// ```
    ///
    /// # Returns
    /// `None` if `p` is outside (0, 1).
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if !(p > 0.0 && p < 1.0) {
            return None;
        }
        Some(self.scale * (-(1.0 - p).ln()).powf(1.0 / self.shape))
    }

    /// B-life: B10 life (10% failed) is `b_life(0.10)`.
    ///
    /// # Reference
    /// Abernethy (2006), *The New Weibull Handbook*, 5th ed., Chapter 2.
    pub fn b_life(&self, fraction_failed: f64) -> Option<f64> {
        self.quantile(fraction_failed)
    }

    /// Classifies the shape parameter; `tolerance` is the half-width of
    /// the band around 1.0 treated as random failures.
    pub fn regime(&self, tolerance: f64) -> FailureRegime {
        if (self.shape - 1.0).abs() <= tolerance {
            FailureRegime::Random
        } else if self.shape < 1.0 {
            FailureRegime::InfantMortality
        } else {
            FailureRegime::WearOut
        }
    }

    /// Samples R, f and h at `points` evenly spaced times ending at `t_max`.
    ///
    /// Sampling starts at `t_max * 1e-3` instead of zero so the hazard stays
    /// finite when beta < 1. Returns an empty vector if `t_max` is not
    /// positive or `points` is 0.
    pub fn curve(&self, t_max: f64, points: usize) -> Vec<CurvePoint> {
        if !(t_max.is_finite() && t_max > 0.0) || points == 0 {
            return Vec::new();
        }
        let start = t_max * CURVE_START_FRACTION;
        let step = if points > 1 {
            (t_max - start) / (points - 1) as f64
        } else {
            0.0
        };
        (0..points)
            .map(|i| {
                let t = start + step * i as f64;
                CurvePoint {
                    t,
                    reliability: self.reliability(t),
                    density: self.density(t),
                    hazard: self.hazard_rate(t),
                }
            })
            .collect()
    }
}
