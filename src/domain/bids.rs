//! Bid estimate domain types
//!
//! A retrospective "as-bid" snapshot back-derived from the finalized
//! SOV allocation: labor hours at a blended rate plus the assumption
//! blocks an estimator would have carried.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Cents;

/// Crew mix percentages assumed at bid time (sums to 1.0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMix {
    pub foreman_pct: f64,
    pub journeyman_pct: f64,
    pub apprentice_pct: f64,
    pub helper_pct: f64,
}

/// Labor assumption block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaborAssumptions {
    pub total_hours_estimated: u64,
    pub blended_labor_rate: Cents,
    pub productivity_factor: f64,
    pub crew_mix: CrewMix,
    pub overtime_allowance_pct: f64,
    pub shift_premium: f64,
}

/// A vendor quote backing the material pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialQuote {
    pub item: String,
    pub vendor: String,
    pub quote_date: NaiveDate,
    pub validity_days: u32,
}

/// Material assumption block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialAssumptions {
    pub escalation_factor_pct: f64,
    pub waste_factor_pct: f64,
    pub freight_pct: f64,
    pub key_material_quotes: Vec<MaterialQuote>,
}

/// A subcontractor quote carried in the bid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubQuote {
    pub name: String,
    pub quote: Cents,
}

/// Subcontractor assumption block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubcontractorAssumptions {
    pub insulation_sub: SubQuote,
    pub tab_sub: SubQuote,
    pub controls_sub: SubQuote,
}

/// General conditions block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConditions {
    pub project_management_months: u32,
    pub site_supervision_months: u32,
    pub equipment_rental_months: u32,
    pub small_tools_pct: f64,
    pub consumables_pct: f64,
}

/// Markup block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Markup {
    pub overhead_pct: f64,
    pub profit_pct: f64,
    pub bond_pct: f64,
    pub insurance_pct: f64,
}

/// Risk allowance block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAllowances {
    pub design_contingency_pct: f64,
    pub escalation_contingency_pct: f64,
    pub schedule_risk_pct: f64,
}

/// Bid estimate entity (one per contract)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidEstimate {
    pub project_id: String,
    pub bid_date: NaiveDate,
    pub bid_amount: Cents,
    pub estimator: String,
    pub labor_assumptions: LaborAssumptions,
    pub material_assumptions: MaterialAssumptions,
    pub subcontractor_assumptions: SubcontractorAssumptions,
    pub general_conditions: GeneralConditions,
    pub markup: Markup,
    pub risk_allowances: RiskAllowances,
    pub key_assumptions: Vec<String>,
    pub exclusions: Vec<String>,
    pub clarifications: Vec<String>,
}
