//! Crew role catalog
//!
//! Union-scale hourly rates (cents) with burden multipliers.

use crate::domain::money::Cents;

/// One crew role with its pay scale.
#[derive(Debug, Clone, Copy)]
pub struct CrewRole {
    pub role: &'static str,
    pub hourly_rate: Cents,
    pub burden_multiplier: f64,
}

impl CrewRole {
    /// Core trades get duplicated when the day's crew outgrows the
    /// role catalog.
    pub fn is_core_trade(&self) -> bool {
        self.role.contains("Journeyman") || self.role.contains("Apprentice")
    }
}

pub static CREW_ROLES: [CrewRole; 8] = [
    CrewRole { role: "Foreman", hourly_rate: 8_550, burden_multiplier: 1.42 },
    CrewRole { role: "Journeyman Sheet Metal", hourly_rate: 7_200, burden_multiplier: 1.42 },
    CrewRole { role: "Journeyman Pipefitter", hourly_rate: 7_450, burden_multiplier: 1.42 },
    CrewRole { role: "Apprentice 4th Year", hourly_rate: 5_200, burden_multiplier: 1.38 },
    CrewRole { role: "Apprentice 2nd Year", hourly_rate: 3_800, burden_multiplier: 1.38 },
    CrewRole { role: "Controls Technician", hourly_rate: 6_800, burden_multiplier: 1.40 },
    CrewRole { role: "Insulator", hourly_rate: 5_800, burden_multiplier: 1.40 },
    CrewRole { role: "Helper/Laborer", hourly_rate: 3_200, burden_multiplier: 1.35 },
];

/// Blended labor rate assumed when converting budgets to hours (cents/hr).
pub const BLENDED_LABOR_RATE: Cents = 6_500;
