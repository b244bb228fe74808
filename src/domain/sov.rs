//! Schedule-of-values domain types
//!
//! SOV lines split a contract's value into line-item budgets. The line
//! number doubles as the phase key for labor, delivery, and billing
//! phasing.

use serde::{Deserialize, Serialize};

use super::money::{scale, Cents};

/// SOV line entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SovLine {
    pub project_id: String,
    pub sov_line_id: String,
    pub line_number: u8,
    pub description: String,
    pub scheduled_value: Cents,
    /// Labor share of the scheduled value, in [0, 1].
    pub labor_pct: f64,
    /// Material share of the scheduled value, in [0, 1].
    pub material_pct: f64,
}

impl SovLine {
    /// Labor budget carried by this line, rounded to the cent.
    pub fn labor_budget(&self) -> Cents {
        scale(self.scheduled_value, self.labor_pct)
    }

    /// Material budget carried by this line, rounded to the cent.
    pub fn material_budget(&self) -> Cents {
        scale(self.scheduled_value, self.material_pct)
    }
}
