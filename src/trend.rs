//! Rolling MTBF/MTTR over chronologically ordered failures.
//!
//! # Algorithm
//!
//! For a window size k and failures `e_0, ..., e_{n-1}` sorted by start,
//! each index `i` in `k..n` closes the window `e_{i-k} ..= e_i`, spanning k
//! inter-arrival intervals:
//!
//! ```text
//! span     = start(e_i) - start(e_{i-k})
//! downtime = sum of durations of e_{i-k} ..= e_i
//! uptime   = max(0, span - downtime)
//! MTBF_i   = uptime / k
//! MTTR_i   = downtime / k
//! ```
//!
//! The first point needs k + 1 failures, so exactly k failures produce an
//! empty series.

use std::borrow::Borrow;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::metrics::chronological_failures;
use crate::record::{hours_between, EventRecord};

/// Default rolling window size.
pub const DEFAULT_ROLLING_WINDOW: usize = 5;

/// One point of the rolling trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RollingPoint {
    /// Start of the failure that closes the window.
    pub date: NaiveDateTime,
    /// Windowed MTBF, in hours.
    pub mtbf: f64,
    /// Windowed MTTR, in hours.
    pub mttr: f64,
}

/// Computes the rolling MTBF/MTTR series for the Unplanned, timestamped
/// records of a subset.
///
/// Returns an empty series when `window` is 0 or there are not more than
/// `window` failures.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, NaiveDate};
/// use u_reliability::record::{EventRecord, StoppageType};
/// use u_reliability::trend::rolling_metrics;
///
/// let t0 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let records: Vec<EventRecord> = (0..7)
///     .map(|i| {
///         EventRecord::new(i.to_string(), StoppageType::Unplanned, "K-1", "Trip")
///             .with_start(t0 + Duration::hours(100 * i))
///             .with_duration_minutes(120.0)
///     })
///     .collect();
/// let series = rolling_metrics(&records, 5);
/// assert_eq!(series.len(), 2);
/// // Span 500h, six 2h repairs.
/// assert!((series[0].mtbf - 97.6).abs() < 1e-9);
/// assert!((series[0].mttr - 2.4).abs() < 1e-9);
/// ```
pub fn rolling_metrics<R: Borrow<EventRecord>>(records: &[R], window: usize) -> Vec<RollingPoint> {
    let failures = chronological_failures(records);
    if window == 0 || failures.len() <= window {
        tracing::debug!(failures = failures.len(), window, "not enough failures for rolling trend");
        return Vec::new();
    }

    let k = window as f64;
    (window..failures.len())
        .filter_map(|i| {
            let first = failures[i - window].start?;
            let last = failures[i].start?;
            let span = hours_between(first, last);
            let downtime: f64 = failures[i - window..=i].iter().map(|r| r.duration_hours()).sum();
            let uptime = (span - downtime).max(0.0);
            Some(RollingPoint {
                date: last,
                mtbf: uptime / k,
                mttr: downtime / k,
            })
        })
        .collect()
}
