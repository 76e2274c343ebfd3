//! Histogram of time-between-failures with a fitted density overlay.

use serde::Serialize;

use super::reliability::WeibullModel;

/// Default number of histogram bins.
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

/// One histogram bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Lower edge (inclusive).
    pub lower: f64,
    /// Upper edge (exclusive, except for the last bin).
    pub upper: f64,
    pub midpoint: f64,
    /// Number of samples falling in the bin.
    pub count: usize,
    /// Expected count under the fitted model, `f(mid) * N * width`.
    pub expected: Option<f64>,
}

/// Bins samples over `[0, max]` into `n_bins` equal-width bins.
///
/// When a model is given, each bin carries the expected count from a
/// midpoint Riemann approximation, `f(mid) * N * width`, so the fitted
/// density can be drawn on the same count axis as the empirical histogram.
///
/// Samples above the last edge go in the last bin; negative samples go in
/// the first. Returns an empty vector if `samples` is empty, `n_bins` is 0,
/// or the largest sample is not a positive finite number.
///
/// # Examples
///
/// ```
/// use u_reliability::weibull::{weibull_histogram, WeibullModel};
///
/// let tbf = [12.0, 30.0, 45.0, 50.0, 61.0, 88.0, 95.0, 140.0];
/// let model = WeibullModel::new(1.8, 70.0);
/// let bins = weibull_histogram(&tbf, model.as_ref(), 10);
/// assert_eq!(bins.len(), 10);
/// assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), tbf.len());
/// assert!(bins.iter().all(|b| b.expected.is_some()));
/// ```
pub fn weibull_histogram(
    samples: &[f64],
    model: Option<&WeibullModel>,
    n_bins: usize,
) -> Vec<HistogramBin> {
    if samples.is_empty() || n_bins == 0 {
        return Vec::new();
    }
    let max_val = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !max_val.is_finite() || max_val <= 0.0 {
        return Vec::new();
    }

    let bin_width = max_val / n_bins as f64;

    let mut counts = vec![0_usize; n_bins];
    for &x in samples {
        // Float-to-int casts saturate: negatives and NaN land in bin 0.
        let bin = ((x / bin_width).floor() as usize).min(n_bins - 1);
        counts[bin] += 1;
    }

    let n = samples.len() as f64;
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let lower = i as f64 * bin_width;
            let midpoint = lower + 0.5 * bin_width;
            HistogramBin {
                lower,
                upper: lower + bin_width,
                midpoint,
                count,
                expected: model.map(|m| m.density(midpoint) * n * bin_width),
            }
        })
        .collect()
}
