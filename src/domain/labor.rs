//! Labor log domain types
//!
//! One entry per worker per day, assigned to whichever SOV line the
//! crew was active on. Labor volume is informational: it is not capped
//! against the line's labor budget.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::money::Cents;

/// Overtime pay factor applied to OT hours in the burdened cost.
pub const OT_FACTOR: f64 = 1.5;

/// Labor log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaborLogEntry {
    pub project_id: String,
    pub log_id: Uuid,
    pub date: NaiveDate,
    pub employee_id: String,
    pub role: String,
    pub sov_line_id: String,
    pub hours_st: u8,
    pub hours_ot: u8,
    pub hourly_rate: Cents,
    pub burden_multiplier: f64,
    pub work_area: String,
    pub cost_code: u8,
}

impl LaborLogEntry {
    /// Fully burdened cost of the entry, rounded to the cent.
    pub fn burdened_cost(&self) -> Cents {
        let paid_hours = self.hours_st as f64 + self.hours_ot as f64 * OT_FACTOR;
        (paid_hours * self.hourly_rate as f64 * self.burden_multiplier).round() as Cents
    }
}
