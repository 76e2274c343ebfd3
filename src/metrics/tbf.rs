//! Time-between-failures extraction.

use std::borrow::Borrow;

use crate::record::{hours_between, EventRecord, InputMode};

/// Derives inter-arrival times (hours) from filtered event records.
///
/// - [`InputMode::ManualTimeToFailure`]: the recorded time-to-failure of
///   every Unplanned record with a positive value, in input order.
/// - [`InputMode::Timestamp`]: Unplanned records are sorted by start; for
///   each consecutive pair the gap is
///   `start(next) - (start(current) + duration(current))`. Only strictly
///   positive gaps are kept: overlapping or out-of-order events are dropped,
///   not corrected. Records without a start timestamp are skipped.
///
/// In timestamp mode the output has at most `n - 1` values for `n`
/// timestamped failures.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_reliability::metrics::time_between_failures;
/// use u_reliability::record::{EventRecord, InputMode, StoppageType};
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let records = vec![
///     EventRecord::new("1", StoppageType::Unplanned, "P-101", "Seal").with_start(day(1)).with_duration_minutes(60.0),
///     EventRecord::new("2", StoppageType::Unplanned, "P-101", "Seal").with_start(day(2)),
/// ];
/// let tbf = time_between_failures(&records, InputMode::Timestamp);
/// assert_eq!(tbf, vec![23.0]);
/// ```
pub fn time_between_failures<R: Borrow<EventRecord>>(records: &[R], mode: InputMode) -> Vec<f64> {
    match mode {
        InputMode::ManualTimeToFailure => records
            .iter()
            .map(Borrow::<EventRecord>::borrow)
            .filter(|r| r.is_unplanned())
            .filter_map(|r| r.time_to_failure_hours)
            .filter(|&t| t > 0.0)
            .collect(),
        InputMode::Timestamp => {
            let failures = chronological_failures(records);
            failures
                .windows(2)
                .filter_map(|pair| {
                    let (current, next) = (pair[0], pair[1]);
                    let end = current.effective_end()?;
                    let gap = hours_between(end, next.start?);
                    (gap > 0.0).then_some(gap)
                })
                .collect()
        }
    }
}

/// Unplanned records with a start timestamp, sorted ascending by start.
///
/// The sort is stable, so simultaneous failures keep their input order.
pub(crate) fn chronological_failures<R: Borrow<EventRecord>>(records: &[R]) -> Vec<&EventRecord> {
    let mut skipped = 0_usize;
    let mut failures: Vec<&EventRecord> = records
        .iter()
        .map(Borrow::<EventRecord>::borrow)
        .filter(|r| r.is_unplanned())
        .filter(|r| {
            let has_start = r.start.is_some();
            if !has_start {
                skipped += 1;
            }
            has_start
        })
        .collect();
    if skipped > 0 {
        tracing::debug!(skipped, "failures without start timestamp skipped");
    }
    failures.sort_by_key(|r| r.start);
    failures
}
