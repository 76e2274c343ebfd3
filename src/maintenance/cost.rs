//! Cost inputs for the preventive-maintenance optimizer.

use serde::{Deserialize, Serialize};

use crate::error::ReliabilityError;

/// Cost of one preventive intervention and one corrective repair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostPair {
    /// Cp: cost of a planned replacement.
    pub preventive: f64,
    /// Cc: cost of a failure replacement.
    pub corrective: f64,
}

impl CostPair {
    /// Creates a cost pair.
    ///
    /// # Errors
    /// [`ReliabilityError::InvalidCost`] if either cost is negative or
    /// non-finite.
    pub fn new(preventive: f64, corrective: f64) -> Result<Self, ReliabilityError> {
        check_cost("preventive cost", preventive)?;
        check_cost("corrective cost", corrective)?;
        Ok(Self {
            preventive,
            corrective,
        })
    }

    /// Cc / Cp; infinite when preventive work is free.
    pub fn ratio(&self) -> f64 {
        self.corrective / self.preventive
    }
}

/// Itemized maintenance cost parameters, in currency units and hours.
///
/// # Examples
///
/// ```
/// use u_reliability::maintenance::MaintenanceCosts;
///
/// let costs = MaintenanceCosts {
///     preventive_material: 200.0,
///     corrective_material: 800.0,
///     labor_rate: 50.0,
///     production_loss_rate: 1_000.0,
///     planned_duration_hours: 2.0,
/// };
/// let pair = costs.cost_pair(4.0).unwrap();
/// assert_eq!(pair.preventive, 300.0);
/// assert_eq!(pair.corrective, 800.0 + 1_050.0 * 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceCosts {
    /// Parts and consumables per preventive intervention.
    pub preventive_material: f64,
    /// Parts and consumables per corrective repair.
    pub corrective_material: f64,
    /// Labor cost per hour.
    pub labor_rate: f64,
    /// Lost production per hour of unplanned downtime.
    pub production_loss_rate: f64,
    /// Duration of a preventive intervention, in hours.
    pub planned_duration_hours: f64,
}

impl MaintenanceCosts {
    /// Checks that every field is finite and non-negative.
    pub fn validate(&self) -> Result<(), ReliabilityError> {
        check_cost("preventive material", self.preventive_material)?;
        check_cost("corrective material", self.corrective_material)?;
        check_cost("labor rate", self.labor_rate)?;
        check_cost("production loss rate", self.production_loss_rate)?;
        check_cost("planned duration", self.planned_duration_hours)
    }

    /// Collapses the itemized costs into (Cp, Cc) given the observed MTTR.
    ///
    /// ```text
    /// Cp = preventive_material + labor_rate * planned_duration
    /// Cc = corrective_material + (labor_rate + production_loss_rate) * mttr
    /// ```
    ///
    /// Planned work is scheduled around production and carries no loss term.
    pub fn cost_pair(&self, mttr_hours: f64) -> Result<CostPair, ReliabilityError> {
        self.validate()?;
        check_cost("MTTR", mttr_hours)?;
        CostPair::new(
            self.preventive_material + self.labor_rate * self.planned_duration_hours,
            self.corrective_material + (self.labor_rate + self.production_loss_rate) * mttr_hours,
        )
    }
}

fn check_cost(field: &'static str, value: f64) -> Result<(), ReliabilityError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ReliabilityError::InvalidCost { field, value })
    }
}
