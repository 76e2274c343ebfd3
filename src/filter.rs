//! Read-only record selection by asset, failure mode and stoppage type.

use serde::{Deserialize, Serialize};

use crate::record::{EventRecord, StoppageType};

/// Criteria for selecting a subset of event records.
///
/// Unset criteria match everything. Matching on text fields is exact.
///
/// # Examples
///
/// ```
/// use u_reliability::filter::RecordFilter;
/// use u_reliability::record::{EventRecord, StoppageType};
///
/// let records = vec![
///     EventRecord::new("1", StoppageType::Unplanned, "P-101", "Seal leak"),
///     EventRecord::new("2", StoppageType::Unplanned, "P-102", "Bearing"),
///     EventRecord::new("3", StoppageType::Planned, "P-101", "PM"),
/// ];
/// let view = RecordFilter::new().asset("P-101").apply(&records);
/// assert_eq!(view.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordFilter {
    pub asset: Option<String>,
    pub failure_mode: Option<String>,
    pub stoppage: Option<StoppageType>,
}

impl RecordFilter {
    /// A filter that matches every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one asset.
    pub fn asset(mut self, asset: impl Into<String>) -> Self {
        self.asset = Some(asset.into());
        self
    }

    /// Restricts to one failure mode.
    pub fn failure_mode(mut self, mode: impl Into<String>) -> Self {
        self.failure_mode = Some(mode.into());
        self
    }

    /// Restricts to one stoppage type.
    pub fn stoppage(mut self, stoppage: StoppageType) -> Self {
        self.stoppage = Some(stoppage);
        self
    }

    /// Returns `true` if `record` satisfies every set criterion.
    pub fn matches(&self, record: &EventRecord) -> bool {
        self.asset.as_deref().map_or(true, |a| record.asset == a)
            && self
                .failure_mode
                .as_deref()
                .map_or(true, |m| record.failure_mode == m)
            && self.stoppage.map_or(true, |s| record.stoppage == s)
    }

    /// Borrows the matching records, preserving source order.
    pub fn apply<'a>(&self, records: &'a [EventRecord]) -> Vec<&'a EventRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
