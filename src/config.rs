//! Analysis configuration.

use serde::{Deserialize, Serialize};

use crate::error::ReliabilityError;
use crate::maintenance::CostCurveSettings;
use crate::record::InputMode;
use crate::trend::DEFAULT_ROLLING_WINDOW;
use crate::weibull::DEFAULT_HISTOGRAM_BINS;

/// Settings shared by every estimator in a [`ReliabilityReport`](crate::analysis::ReliabilityReport).
///
/// Every field has a default, so a partial document deserializes:
///
/// ```
/// use u_reliability::config::AnalysisConfig;
/// use u_reliability::record::InputMode;
///
/// let config: AnalysisConfig =
///     serde_json::from_str(r#"{ "input_mode": "ManualTimeToFailure", "rolling_window": 3 }"#).unwrap();
/// assert_eq!(config.input_mode, InputMode::ManualTimeToFailure);
/// assert_eq!(config.rolling_window, 3);
/// assert_eq!(config.histogram_bins, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Which record field drives time-between-failures.
    pub input_mode: InputMode,
    /// Failures per rolling-trend window.
    pub rolling_window: usize,
    /// Bins of the TBF histogram.
    pub histogram_bins: usize,
    /// Samples of the plotted reliability curves.
    pub curve_points: usize,
    /// Sampling of the PM cost-rate curve.
    pub cost_curve: CostCurveSettings,
    /// Failed fraction reported as B-life (0.10 gives B10).
    pub b_life_fraction: f64,
    /// Half-width of the band around beta = 1 read as "random" / "stable".
    pub stable_tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_mode: InputMode::default(),
            rolling_window: DEFAULT_ROLLING_WINDOW,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            curve_points: 100,
            cost_curve: CostCurveSettings::default(),
            b_life_fraction: 0.10,
            stable_tolerance: 0.05,
        }
    }
}

impl AnalysisConfig {
    /// Checks every field against its domain.
    pub fn validate(&self) -> Result<(), ReliabilityError> {
        if self.rolling_window == 0 {
            return Err(ReliabilityError::ZeroWindow);
        }
        if self.histogram_bins == 0 {
            return Err(ReliabilityError::ZeroBins);
        }
        if self.curve_points < 2 {
            return Err(ReliabilityError::TooFewCurvePoints(self.curve_points));
        }
        self.cost_curve.validate()?;
        if !(self.b_life_fraction > 0.0 && self.b_life_fraction < 1.0) {
            return Err(ReliabilityError::InvalidFraction {
                field: "b_life_fraction",
                value: self.b_life_fraction,
            });
        }
        if !(self.stable_tolerance.is_finite() && self.stable_tolerance >= 0.0) {
            return Err(ReliabilityError::InvalidTolerance {
                field: "stable_tolerance",
                value: self.stable_tolerance,
            });
        }
        Ok(())
    }
}
