//! MTBF, MTTR and availability from event records.

use std::borrow::Borrow;

use serde::Serialize;

use crate::record::{hours_between, EventRecord, InputMode};

/// Point-in-time reliability indicators for a record subset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReliabilityMetrics {
    /// Mean time between failures, in hours.
    pub mtbf: f64,
    /// Mean time to repair, in hours.
    pub mttr: f64,
    /// Availability in percent.
    pub availability: f64,
    /// Total operating time, in hours.
    pub uptime_hours: f64,
    /// Total failure downtime, in hours.
    pub downtime_hours: f64,
    /// Number of Unplanned records.
    pub failure_count: usize,
}

/// Computes MTBF, MTTR and availability.
///
/// Failures are the Unplanned records; downtime is the sum of their
/// durations. Uptime depends on `mode`:
///
/// - Manual: the sum of recorded time-to-failure over failures; missing,
///   non-positive and non-finite values contribute nothing.
/// - Timestamp: the span from the earliest start to the latest effective
///   end (start + duration) over *all* records, because planned and
///   external stoppages occupy the same timeline, minus failure downtime,
///   floored at zero.
///
/// ```text
/// MTBF         = uptime / failures        (uptime itself when failures = 0)
/// MTTR         = downtime / failures      (0 when failures = 0)
/// Availability = 100 * uptime / (uptime + downtime)   (0 when the sum is 0)
/// ```
///
/// The zero-failure MTBF is the raw uptime, kept for compatibility with
/// existing reports even though it is not a mean.
///
/// # Examples
///
/// ```
/// use u_reliability::metrics::calculate_metrics;
/// use u_reliability::record::{EventRecord, InputMode, StoppageType};
///
/// let records = vec![
///     EventRecord::new("1", StoppageType::Unplanned, "P-101", "Seal")
///         .with_time_to_failure(100.0)
///         .with_duration_minutes(120.0),
///     EventRecord::new("2", StoppageType::Unplanned, "P-101", "Seal")
///         .with_time_to_failure(200.0)
///         .with_duration_minutes(240.0),
/// ];
/// let m = calculate_metrics(&records, InputMode::ManualTimeToFailure);
/// assert_eq!(m.failure_count, 2);
/// assert!((m.mtbf - 150.0).abs() < 1e-9);
/// assert!((m.mttr - 3.0).abs() < 1e-9);
/// ```
pub fn calculate_metrics<R: Borrow<EventRecord>>(records: &[R], mode: InputMode) -> ReliabilityMetrics {
    let failures: Vec<&EventRecord> = records
        .iter()
        .map(Borrow::<EventRecord>::borrow)
        .filter(|r| r.is_unplanned())
        .collect();
    let failure_count = failures.len();
    let downtime_hours: f64 = failures.iter().map(|r| r.duration_hours()).sum();

    let uptime_hours: f64 = match mode {
        InputMode::ManualTimeToFailure => failures
            .iter()
            .filter_map(|r| r.time_to_failure_hours)
            .filter(|t| t.is_finite() && *t > 0.0)
            .sum(),
        InputMode::Timestamp => (observed_span_hours(records) - downtime_hours).max(0.0),
    };

    let (mtbf, mttr) = if failure_count > 0 {
        let n = failure_count as f64;
        (uptime_hours / n, downtime_hours / n)
    } else {
        (uptime_hours, 0.0)
    };

    let total = uptime_hours + downtime_hours;
    let availability = if total > 0.0 {
        100.0 * uptime_hours / total
    } else {
        0.0
    };

    ReliabilityMetrics {
        mtbf,
        mttr,
        availability,
        uptime_hours,
        downtime_hours,
        failure_count,
    }
}

/// Hours from the earliest start to the latest effective end over all
/// timestamped records; 0 when none are timestamped.
fn observed_span_hours<R: Borrow<EventRecord>>(records: &[R]) -> f64 {
    let timed = records.iter().map(Borrow::<EventRecord>::borrow).filter(|r| r.start.is_some());
    let first = timed.clone().filter_map(|r| r.start).min();
    let last = timed.filter_map(|r| r.effective_end()).max();
    match (first, last) {
        (Some(first), Some(last)) => hours_between(first, last).max(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::StoppageType;
    use chrono::{NaiveDate, NaiveDateTime};

    fn hour(h: i64) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid timestamp")
            + chrono::Duration::hours(h)
    }

    fn event(stoppage: StoppageType, start_h: i64, minutes: f64) -> EventRecord {
        EventRecord::new("e", stoppage, "P-101", "Seal")
            .with_start(hour(start_h))
            .with_duration_minutes(minutes)
    }

    #[test]
    fn test_timestamp_mode() {
        // Span 0..=100h + 2h repair = 102h; downtime 1h + 2h = 3h.
        let records = vec![
            event(StoppageType::Unplanned, 0, 60.0),
            event(StoppageType::Unplanned, 50, 0.0),
            event(StoppageType::Unplanned, 100, 120.0),
        ];
        let m = calculate_metrics(&records, InputMode::Timestamp);
        assert_eq!(m.failure_count, 3);
        assert!((m.downtime_hours - 3.0).abs() < 1e-12);
        assert!((m.uptime_hours - 99.0).abs() < 1e-12);
        assert!((m.mtbf - 33.0).abs() < 1e-12);
        assert!((m.mttr - 1.0).abs() < 1e-12);
        assert!((m.availability - 100.0 * 99.0 / 102.0).abs() < 1e-12);
    }

    #[test]
    fn test_planned_events_extend_timeline() {
        let records = vec![
            event(StoppageType::Unplanned, 0, 0.0),
            event(StoppageType::Unplanned, 10, 0.0),
            event(StoppageType::Planned, 40, 60.0),
        ];
        let m = calculate_metrics(&records, InputMode::Timestamp);
        assert!((m.uptime_hours - 41.0).abs() < 1e-12);
        assert_eq!(m.downtime_hours, 0.0);
    }

    #[test]
    fn test_latest_end_not_latest_start() {
        // The earlier event's long repair ends after the later start.
        let records = vec![
            event(StoppageType::External, 0, 600.0),
            event(StoppageType::Unplanned, 5, 0.0),
        ];
        let m = calculate_metrics(&records, InputMode::Timestamp);
        assert!((m.uptime_hours - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_failures() {
        let records = vec![
            event(StoppageType::Planned, 0, 0.0),
            event(StoppageType::Planned, 24, 0.0),
        ];
        let m = calculate_metrics(&records, InputMode::Timestamp);
        assert_eq!(m.failure_count, 0);
        assert_eq!(m.mttr, 0.0);
        assert!((m.mtbf - 24.0).abs() < 1e-12);
        assert!((m.availability - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input() {
        let records: Vec<EventRecord> = Vec::new();
        let m = calculate_metrics(&records, InputMode::Timestamp);
        assert_eq!(m.failure_count, 0);
        assert_eq!(m.mtbf, 0.0);
        assert_eq!(m.mttr, 0.0);
        assert_eq!(m.availability, 0.0);
    }

    #[test]
    fn test_uptime_floored_at_zero() {
        // Downtime exceeds the observed span.
        let records = vec![
            event(StoppageType::Unplanned, 0, 30.0),
            EventRecord::new("x", StoppageType::Unplanned, "P-101", "Seal").with_duration_minutes(600.0),
        ];
        let m = calculate_metrics(&records, InputMode::Timestamp);
        assert_eq!(m.uptime_hours, 0.0);
        assert_eq!(m.availability, 0.0);
    }

    #[test]
    fn test_manual_mode_ignores_timestamps() {
        let records = vec![
            event(StoppageType::Unplanned, 0, 60.0).with_time_to_failure(40.0),
            event(StoppageType::Unplanned, 1000, 60.0).with_time_to_failure(60.0),
            event(StoppageType::Planned, 2000, 60.0).with_time_to_failure(500.0),
        ];
        let m = calculate_metrics(&records, InputMode::ManualTimeToFailure);
        assert!((m.uptime_hours - 100.0).abs() < 1e-12);
        assert!((m.mtbf - 50.0).abs() < 1e-12);
        assert!((m.mttr - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_manual_mode_skips_unusable_ttf() {
        let records = vec![
            event(StoppageType::Unplanned, 0, 60.0).with_time_to_failure(-100.0),
            event(StoppageType::Unplanned, 10, 60.0).with_time_to_failure(50.0),
            event(StoppageType::Unplanned, 20, 60.0).with_time_to_failure(0.0),
            event(StoppageType::Unplanned, 30, 60.0).with_time_to_failure(f64::NAN),
        ];
        let m = calculate_metrics(&records, InputMode::ManualTimeToFailure);
        assert_eq!(m.failure_count, 4);
        assert!((m.uptime_hours - 50.0).abs() < 1e-12);
        assert!((m.mtbf - 12.5).abs() < 1e-12);
        assert!((m.availability - 100.0 * 50.0 / 54.0).abs() < 1e-12);
    }
}
