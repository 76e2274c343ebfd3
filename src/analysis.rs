//! One-call analysis of a filtered record subset.
//!
//! [`ReliabilityReport::analyze`] runs every estimator over the same
//! read-only records. Nothing is cached: a new filter or input mode means a
//! new report.

use std::borrow::Borrow;

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::error::ReliabilityError;
use crate::estimate::Estimate;
use crate::growth::{crow_amsaa, GrowthModel, GrowthTrend};
use crate::maintenance::{calculate_optimal_pm, MaintenanceCosts, PmRecommendation};
use crate::metrics::{calculate_metrics, time_between_failures, ReliabilityMetrics};
use crate::record::EventRecord;
use crate::trend::{rolling_metrics, RollingPoint};
use crate::weibull::{
    weibull_histogram, weibull_mrr, CurvePoint, FailureRegime, HistogramBin, WeibullFit, WeibullModel,
};

/// Every indicator for one record subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReliabilityReport {
    pub metrics: ReliabilityMetrics,
    /// Inter-arrival times fed to the Weibull fit, in hours.
    pub time_between_failures: Vec<f64>,
    pub weibull: Estimate<WeibullFit>,
    /// Shape classification; `None` without a Weibull fit.
    pub regime: Option<FailureRegime>,
    /// B-life at the configured fraction; `None` without a Weibull fit.
    pub b_life: Option<f64>,
    /// R, f and h sampled up to `max(max TBF, 2 * eta)`.
    pub reliability_curve: Vec<CurvePoint>,
    /// TBF histogram, with expected counts when a fit exists.
    pub histogram: Vec<HistogramBin>,
    /// PM recommendation; `None` when no costs were given or there is no
    /// Weibull fit.
    pub maintenance: Option<PmRecommendation>,
    pub growth: Estimate<GrowthModel>,
    /// Growth classification; `None` without a Crow-AMSAA fit.
    pub growth_trend: Option<GrowthTrend>,
    pub rolling: Vec<RollingPoint>,
}

impl ReliabilityReport {
    /// Analyzes `records` under `config`.
    ///
    /// # Errors
    /// [`ReliabilityError`] if `config` or `costs` is invalid. Too little
    /// data is not an error; it shows up as insufficient estimates and
    /// empty series.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, NaiveDate};
    /// use u_reliability::analysis::ReliabilityReport;
    /// use u_reliability::config::AnalysisConfig;
    /// use u_reliability::record::{EventRecord, StoppageType};
    ///
    /// let t0 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let gaps = [120, 95, 150, 80, 130, 110, 60, 140];
    /// let mut at = t0;
    /// let mut records = Vec::new();
    /// for (i, gap) in gaps.iter().enumerate() {
    ///     at += Duration::hours(*gap);
    ///     records.push(
    ///         EventRecord::new(i.to_string(), StoppageType::Unplanned, "P-101", "Seal")
    ///             .with_start(at)
    ///             .with_duration_minutes(90.0),
    ///     );
    /// }
    ///
    /// let report = ReliabilityReport::analyze(&records, &AnalysisConfig::default(), None).unwrap();
    /// assert_eq!(report.metrics.failure_count, 8);
    /// assert_eq!(report.time_between_failures.len(), 7);
    /// assert!(report.weibull.is_computed());
    /// assert_eq!(report.rolling.len(), 3);
    /// ```
    pub fn analyze<R: Borrow<EventRecord>>(
        records: &[R],
        config: &AnalysisConfig,
        costs: Option<&MaintenanceCosts>,
    ) -> Result<Self, ReliabilityError> {
        config.validate()?;
        if let Some(costs) = costs {
            costs.validate()?;
        }

        let span = tracing::info_span!("reliability_report", records = records.len(), mode = ?config.input_mode);
        let _guard = span.enter();

        let metrics = calculate_metrics(records, config.input_mode);
        let tbf = time_between_failures(records, config.input_mode);
        let weibull = weibull_mrr(&tbf);
        let model = weibull.as_ref().computed().and_then(WeibullModel::from_fit);

        let regime = model.map(|m| m.regime(config.stable_tolerance));
        let b_life = model.and_then(|m| m.b_life(config.b_life_fraction));
        let reliability_curve = model
            .map(|m| {
                let max_tbf = tbf.iter().copied().fold(0.0, f64::max);
                m.curve(max_tbf.max(2.0 * m.scale()), config.curve_points)
            })
            .unwrap_or_default();
        let histogram = weibull_histogram(&tbf, model.as_ref(), config.histogram_bins);

        let maintenance = match (costs, model) {
            (Some(costs), Some(m)) => {
                let pair = costs.cost_pair(metrics.mttr)?;
                Some(calculate_optimal_pm(m.shape(), m.scale(), pair, &config.cost_curve))
            }
            _ => None,
        };

        let growth = crow_amsaa(records);
        let growth_trend = growth
            .as_ref()
            .computed()
            .map(|g| g.power_law.trend(config.stable_tolerance));
        let rolling = rolling_metrics(records, config.rolling_window);

        tracing::info!(
            failures = metrics.failure_count,
            tbf_samples = tbf.len(),
            weibull = weibull.is_computed(),
            growth = growth.is_computed(),
            rolling_points = rolling.len(),
            "reliability report computed"
        );

        Ok(Self {
            metrics,
            time_between_failures: tbf,
            weibull,
            regime,
            b_life,
            reliability_curve,
            histogram,
            maintenance,
            growth,
            growth_trend,
            rolling,
        })
    }
}
