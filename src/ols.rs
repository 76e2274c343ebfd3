//! Ordinary least-squares straight line, shared by the probability-plot
//! and log-log regressions.

/// Fitted line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LineFit {
    pub slope: f64,
    pub intercept: f64,
    /// `1 - SS_res / SS_tot`, computed from the residuals of the fit.
    pub r_squared: f64,
}

/// Fits `y = a + b*x` by ordinary least squares.
///
/// ```text
/// b = (n*sum(x*y) - sum(x)*sum(y)) / (n*sum(x^2) - (sum(x))^2)
/// a = (sum(y) - b*sum(x)) / n
/// ```
///
/// Returns `None` if fewer than 2 points, the slices differ in length, or
/// the denominator vanishes (all x identical up to rounding).
pub(crate) fn fit_line(x: &[f64], y: &[f64]) -> Option<LineFit> {
    let n = x.len();
    if n < 2 || n != y.len() {
        return None;
    }
    let n_f = n as f64;

    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();
    let sum_x2: f64 = x.iter().map(|a| a * a).sum();

    let denom = n_f * sum_x2 - sum_x * sum_x;
    // Relative guard: identical x values cancel only up to rounding.
    if !denom.is_finite() || denom.abs() <= 1e-12 * (n_f * sum_x2).abs().max(1e-300) {
        return None;
    }

    let slope = (n_f * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n_f;

    let mean_y = sum_y / n_f;
    let ss_tot: f64 = y.iter().map(|&v| (v - mean_y).powi(2)).sum();
    let ss_res: f64 = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| (yi - (intercept + slope * xi)).powi(2))
        .sum();
    let r_squared = if ss_tot < 1e-300 {
        1.0
    } else {
        1.0 - ss_res / ss_tot
    };

    Some(LineFit {
        slope,
        intercept,
        r_squared,
    })
}
