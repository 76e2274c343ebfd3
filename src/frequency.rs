//! Maintenance frequency normalization and annual workload.
//!
//! Maintenance plans record task frequency as free text: either a bare
//! number meaning "every N months" or a cadence word such as "Weekly" or
//! "Semi-annual". [`annual_occurrences`] maps both onto occurrences per year
//! so tasks with different cadences can be summed.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::record::MaintenanceTask;

/// A cadence keyword group.
struct Cadence {
    /// Any of these substrings selects the group.
    words: &'static [&'static str],
    /// Any of these substrings vetoes the group.
    unless: &'static [&'static str],
    per_year: f64,
}

/// Keyword groups in priority order. The first group with a match wins.
const CADENCES: &[Cadence] = &[
    Cadence { words: &["day", "daily"], unless: &[], per_year: 365.0 },
    Cadence { words: &["week"], unless: &[], per_year: 52.0 },
    Cadence { words: &["quarter", "qtr"], unless: &[], per_year: 4.0 },
    // "semi-annual" must not be read as annual.
    Cadence { words: &["year", "annual"], unless: &["semi"], per_year: 1.0 },
    Cadence { words: &["semi"], unless: &[], per_year: 2.0 },
    Cadence { words: &["month"], unless: &[], per_year: 12.0 },
];

impl Cadence {
    fn matches(&self, text: &str) -> bool {
        self.words.iter().any(|w| text.contains(w)) && !self.unless.iter().any(|w| text.contains(w))
    }
}

/// Converts a frequency descriptor into occurrences per year.
///
/// A descriptor that parses as a plain number is a month interval:
/// `12 / value`, or 0 when the value is not positive. Otherwise the
/// lower-cased text is matched against cadence keywords in priority order:
///
/// | contains | per year |
/// |---|---|
/// | `day` / `daily` | 365 |
/// | `week` | 52 |
/// | `quarter` / `qtr` | 4 |
/// | `year` / `annual` (not `semi`) | 1 |
/// | `semi` | 2 |
/// | `month` | 12 |
///
/// Unrecognized descriptors contribute 0.
///
/// # Examples
///
/// ```
/// use u_reliability::frequency::annual_occurrences;
///
/// assert_eq!(annual_occurrences("6"), 2.0);
/// assert_eq!(annual_occurrences("Weekly"), 52.0);
/// assert_eq!(annual_occurrences("Semi-Annual"), 2.0);
/// assert_eq!(annual_occurrences("when needed"), 0.0);
/// ```
pub fn annual_occurrences(descriptor: &str) -> f64 {
    let trimmed = descriptor.trim();
    if let Ok(months) = trimmed.parse::<f64>() {
        return if months.is_finite() && months > 0.0 {
            12.0 / months
        } else {
            0.0
        };
    }

    let text = trimmed.to_lowercase();
    CADENCES
        .iter()
        .find(|c| c.matches(&text))
        .map_or(0.0, |c| c.per_year)
}

/// Annualized load of a single maintenance task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaskWorkload {
    pub annual_occurrences: f64,
    /// Occurrences x duration x executors.
    pub annual_labor_hours: f64,
    /// Occurrences x duration when the task needs a shutdown, else 0.
    pub annual_shutdown_hours: f64,
}

impl TaskWorkload {
    /// Computes the annual workload of `task`. An executor count of 0 is
    /// treated as 1.
    pub fn of(task: &MaintenanceTask) -> Self {
        let occurrences = annual_occurrences(&task.frequency);
        let duration = if task.duration_hours.is_finite() {
            task.duration_hours.max(0.0)
        } else {
            0.0
        };
        let executors = f64::from(task.executors.max(1));
        Self {
            annual_occurrences: occurrences,
            annual_labor_hours: occurrences * duration * executors,
            annual_shutdown_hours: if task.requires_shutdown {
                occurrences * duration
            } else {
                0.0
            },
        }
    }
}

/// Per-asset totals of a maintenance plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssetWorkload {
    pub tasks: usize,
    pub annual_occurrences: f64,
    pub annual_labor_hours: f64,
    pub annual_shutdown_hours: f64,
}

/// Sums task workloads per asset, ordered by asset identifier.
pub fn workload_by_asset(tasks: &[MaintenanceTask]) -> BTreeMap<String, AssetWorkload> {
    let mut totals: BTreeMap<String, AssetWorkload> = BTreeMap::new();
    for task in tasks {
        let w = TaskWorkload::of(task);
        let entry = totals.entry(task.asset.clone()).or_default();
        entry.tasks += 1;
        entry.annual_occurrences += w.annual_occurrences;
        entry.annual_labor_hours += w.annual_labor_hours;
        entry.annual_shutdown_hours += w.annual_shutdown_hours;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ExecutorType;

    fn task(asset: &str, frequency: &str, hours: f64, shutdown: bool, executors: u32) -> MaintenanceTask {
        MaintenanceTask {
            asset: asset.to_string(),
            description: "Inspect".to_string(),
            frequency: frequency.to_string(),
            trade: "Mechanical".to_string(),
            duration_hours: hours,
            requires_shutdown: shutdown,
            executors,
            executor_type: ExecutorType::Internal,
        }
    }

    #[test]
    fn test_numeric_month_interval() {
        assert_eq!(annual_occurrences("1"), 12.0);
        assert_eq!(annual_occurrences(" 3 "), 4.0);
        assert_eq!(annual_occurrences("12"), 1.0);
        assert_eq!(annual_occurrences("24"), 0.5);
    }

    #[test]
    fn test_numeric_non_positive() {
        assert_eq!(annual_occurrences("0"), 0.0);
        assert_eq!(annual_occurrences("-6"), 0.0);
        assert_eq!(annual_occurrences("NaN"), 0.0);
        assert_eq!(annual_occurrences("inf"), 0.0);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(annual_occurrences("Daily"), 365.0);
        assert_eq!(annual_occurrences("every day"), 365.0);
        assert_eq!(annual_occurrences("WEEKLY"), 52.0);
        assert_eq!(annual_occurrences("Bi-weekly"), 52.0);
        assert_eq!(annual_occurrences("Quarterly"), 4.0);
        assert_eq!(annual_occurrences("1/qtr"), 4.0);
        assert_eq!(annual_occurrences("Yearly"), 1.0);
        assert_eq!(annual_occurrences("Annual"), 1.0);
        assert_eq!(annual_occurrences("Monthly"), 12.0);
    }

    #[test]
    fn test_semi_annual_not_annual() {
        assert_eq!(annual_occurrences("Semi-annual"), 2.0);
        assert_eq!(annual_occurrences("semiannually"), 2.0);
        assert_eq!(annual_occurrences("Semi-yearly"), 2.0);

        let yearly = CADENCES
            .iter()
            .find(|c| c.words.contains(&"annual"))
            .expect("yearly cadence");
        assert!(yearly.matches("annual inspection"));
        assert!(!yearly.matches("semi-annual inspection"));
    }

    #[test]
    fn test_priority_order() {
        // "day" outranks "week".
        assert_eq!(annual_occurrences("weekday"), 365.0);
        // "quarter" outranks "year".
        assert_eq!(annual_occurrences("quarterly, each year"), 4.0);
    }

    #[test]
    fn test_unknown_is_zero() {
        assert_eq!(annual_occurrences(""), 0.0);
        assert_eq!(annual_occurrences("on condition"), 0.0);
    }

    #[test]
    fn test_task_workload() {
        let w = TaskWorkload::of(&task("P-101", "Monthly", 2.0, true, 2));
        assert_eq!(w.annual_occurrences, 12.0);
        assert!((w.annual_labor_hours - 48.0).abs() < 1e-12);
        assert!((w.annual_shutdown_hours - 24.0).abs() < 1e-12);

        let w = TaskWorkload::of(&task("P-101", "6", 1.5, false, 0));
        assert!((w.annual_labor_hours - 3.0).abs() < 1e-12);
        assert_eq!(w.annual_shutdown_hours, 0.0);
    }

    #[test]
    fn test_workload_by_asset() {
        let plan = vec![
            task("P-102", "Weekly", 0.5, false, 1),
            task("P-101", "Monthly", 2.0, true, 1),
            task("P-101", "Annual", 8.0, true, 3),
        ];
        let totals = workload_by_asset(&plan);
        let keys: Vec<&String> = totals.keys().collect();
        assert_eq!(keys, vec!["P-101", "P-102"]);

        let p101 = &totals["P-101"];
        assert_eq!(p101.tasks, 2);
        assert!((p101.annual_occurrences - 13.0).abs() < 1e-12);
        assert!((p101.annual_labor_hours - 48.0).abs() < 1e-12);
        assert!((p101.annual_shutdown_hours - 32.0).abs() < 1e-12);

        assert!((totals["P-102"].annual_labor_hours - 26.0).abs() < 1e-12);
    }
}
