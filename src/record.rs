//! Typed event and maintenance task records.
//!
//! Records are produced by an external ingestion layer and are treated as
//! immutable inputs. Every estimator in this crate borrows them read-only,
//! usually through the filtered views returned by
//! [`RecordFilter::apply`](crate::filter::RecordFilter::apply).

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Classification of a stoppage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoppageType {
    /// A failure. Only these events count toward MTBF, MTTR and every fit.
    Unplanned,
    /// Scheduled maintenance.
    Planned,
    /// Stoppage caused outside the asset (power cut, starved line, ...).
    External,
}

/// Which field of an [`EventRecord`] is authoritative for failure timing.
///
/// This is a global choice for an analysis, never a per-record one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputMode {
    /// Inter-arrival times are derived from absolute start timestamps.
    #[default]
    Timestamp,
    /// Each failure carries its own recorded time-to-failure in hours.
    ManualTimeToFailure,
}

/// A single maintenance or failure event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Source identifier (work order number, row id, ...).
    pub id: String,
    /// Absolute start of the stoppage.
    pub start: Option<NaiveDateTime>,
    /// Directly recorded time-to-failure, in hours.
    pub time_to_failure_hours: Option<f64>,
    /// Stoppage duration, in minutes.
    pub duration_minutes: f64,
    /// Stoppage classification.
    pub stoppage: StoppageType,
    /// Free-text description.
    pub description: String,
    /// Asset or location identifier.
    pub asset: String,
    /// Failure-mode label.
    pub failure_mode: String,
}

impl EventRecord {
    /// Creates a record with the mandatory classification fields; timing is
    /// attached with [`with_start`](Self::with_start) or
    /// [`with_time_to_failure`](Self::with_time_to_failure).
    pub fn new(
        id: impl Into<String>,
        stoppage: StoppageType,
        asset: impl Into<String>,
        failure_mode: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            start: None,
            time_to_failure_hours: None,
            duration_minutes: 0.0,
            stoppage,
            description: String::new(),
            asset: asset.into(),
            failure_mode: failure_mode.into(),
        }
    }

    /// Sets the absolute start timestamp.
    pub fn with_start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the recorded time-to-failure in hours.
    pub fn with_time_to_failure(mut self, hours: f64) -> Self {
        self.time_to_failure_hours = Some(hours);
        self
    }

    /// Sets the stoppage duration in minutes.
    pub fn with_duration_minutes(mut self, minutes: f64) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Sets the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns `true` for failures.
    pub fn is_unplanned(&self) -> bool {
        self.stoppage == StoppageType::Unplanned
    }

    /// Stoppage duration in hours.
    pub fn duration_hours(&self) -> f64 {
        self.duration_minutes / 60.0
    }

    /// Start plus duration, i.e. when the asset is back in operation.
    ///
    /// `None` when the record has no start timestamp.
    pub fn effective_end(&self) -> Option<NaiveDateTime> {
        let start = self.start?;
        let millis = (self.duration_minutes * 60_000.0).round() as i64;
        start.checked_add_signed(Duration::try_milliseconds(millis)?)
    }
}

/// Who executes a maintenance task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecutorType {
    Internal,
    Contractor,
    InternalAndContractor,
}

/// A planned maintenance task from a maintenance plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceTask {
    pub asset: String,
    pub description: String,
    /// Raw frequency descriptor, e.g. `"6"` (every 6 months) or `"Weekly"`.
    pub frequency: String,
    pub trade: String,
    /// Estimated duration per occurrence, in hours.
    pub duration_hours: f64,
    pub requires_shutdown: bool,
    /// Number of people executing the task (at least 1).
    pub executors: u32,
    pub executor_type: ExecutorType,
}

/// Signed difference `later - earlier` in fractional hours.
pub(crate) fn hours_between(earlier: NaiveDateTime, later: NaiveDateTime) -> f64 {
    (later - earlier).num_milliseconds() as f64 / 3_600_000.0
}
