//! Bid estimate synthesizer
//!
//! Back-derives an "as-bid" snapshot from the finalized SOV: labor
//! hours at the blended rate, plus the assumption blocks an estimator
//! carries. Purely derivative; reads the allocation, enforces nothing.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::catalog::{
    BID_ACCESS_ROUTES, BID_LABOR_MARKETS, BLENDED_LABOR_RATE, CONTROLS_VENDORS, EQUIPMENT_VENDORS,
    ESTIMATORS,
};
use crate::domain::money::scale;
use crate::domain::{
    BidEstimate, Contract, CrewMix, GeneralConditions, LaborAssumptions, Markup,
    MaterialAssumptions, MaterialQuote, Project, RiskAllowances, SovLine, SubQuote,
    SubcontractorAssumptions,
};

use super::pick;

pub fn synthesize_bid(
    rng: &mut impl Rng,
    project: &Project,
    contract: &Contract,
    sov_lines: &[SovLine],
    epoch: NaiveDate,
) -> BidEstimate {
    let total_labor_cents: f64 = sov_lines.iter().map(|l| l.labor_budget() as f64).sum();
    let total_hours_estimated = (total_labor_cents / BLENDED_LABOR_RATE as f64).round() as u64;

    // Bids land roughly a quarter ahead of the program year.
    let bid_date = epoch - Duration::days(92) + Duration::days(rng.gen_range(0..=60));

    let labor_assumptions = LaborAssumptions {
        total_hours_estimated,
        blended_labor_rate: BLENDED_LABOR_RATE,
        productivity_factor: rng.gen_range(0.85..0.95),
        crew_mix: CrewMix {
            foreman_pct: 0.08,
            journeyman_pct: 0.45,
            apprentice_pct: 0.35,
            helper_pct: 0.12,
        },
        overtime_allowance_pct: rng.gen_range(0.05..0.12),
        shift_premium: 0.0,
    };

    let material_assumptions = MaterialAssumptions {
        escalation_factor_pct: rng.gen_range(0.02..0.05),
        waste_factor_pct: rng.gen_range(0.03..0.08),
        freight_pct: rng.gen_range(0.02..0.04),
        key_material_quotes: vec![
            MaterialQuote {
                item: "Major Equipment".to_string(),
                vendor: pick(rng, EQUIPMENT_VENDORS).to_string(),
                quote_date: bid_date,
                validity_days: 60,
            },
            MaterialQuote {
                item: "Sheet Metal".to_string(),
                vendor: "Local Fab Shop".to_string(),
                quote_date: bid_date,
                validity_days: 30,
            },
            MaterialQuote {
                item: "Controls".to_string(),
                vendor: pick(rng, CONTROLS_VENDORS).to_string(),
                quote_date: bid_date,
                validity_days: 45,
            },
        ],
    };

    let value = contract.original_contract_value;
    let subcontractor_assumptions = SubcontractorAssumptions {
        insulation_sub: SubQuote {
            name: "ABC Insulation".to_string(),
            quote: scale(value, 0.045),
        },
        tab_sub: SubQuote {
            name: "XYZ Balancing".to_string(),
            quote: scale(value, 0.025),
        },
        controls_sub: SubQuote {
            name: "Smart Building Controls".to_string(),
            quote: scale(value, 0.08),
        },
    };

    let general_conditions = GeneralConditions {
        project_management_months: project.duration_months,
        site_supervision_months: project.duration_months,
        equipment_rental_months: (project.duration_months as f64 * 0.6).round() as u32,
        small_tools_pct: 0.015,
        consumables_pct: 0.01,
    };

    let markup = Markup {
        overhead_pct: rng.gen_range(0.08..0.12),
        profit_pct: rng.gen_range(0.04..0.08),
        bond_pct: 0.015,
        insurance_pct: rng.gen_range(0.02..0.035),
    };

    let risk_allowances = RiskAllowances {
        design_contingency_pct: rng.gen_range(0.02..0.05),
        escalation_contingency_pct: rng.gen_range(0.02..0.04),
        schedule_risk_pct: rng.gen_range(0.01..0.03),
    };

    let key_assumptions = vec![
        format!("Project duration: {} months from NTP", project.duration_months),
        "Work performed during normal hours (7:00 AM - 3:30 PM)".to_string(),
        "GC to provide adequate laydown area and hoisting".to_string(),
        "MEP coordination via BIM - 3 weeks prior to each floor".to_string(),
        format!("Equipment access via {}", pick(rng, BID_ACCESS_ROUTES)),
        "Fire watch by GC when required".to_string(),
        "Temporary power and water by GC".to_string(),
        format!("Assumes {} labor", pick(rng, BID_LABOR_MARKETS)),
    ];

    let exclusions = [
        "Hazardous material abatement",
        "Structural modifications",
        "Electrical connections (by EC)",
        "Architectural louvers and grilles",
        "Access flooring",
        "Fire suppression (by FP contractor)",
        "Plumbing (by plumber)",
        "Testing beyond standard TAB",
    ]
    .map(str::to_string)
    .to_vec();

    let clarifications = [
        "Ductwork pricing based on spec section 23 31 00",
        "Equipment selections per approved substitution list",
        "Refrigerant pricing based on current market - subject to adjustment",
        "Control points count per attached schedule",
    ]
    .map(str::to_string)
    .to_vec();

    BidEstimate {
        project_id: project.id.clone(),
        bid_date,
        bid_amount: value,
        estimator: pick(rng, ESTIMATORS).to_string(),
        labor_assumptions,
        material_assumptions,
        subcontractor_assumptions,
        general_conditions,
        markup,
        risk_allowances,
        key_assumptions,
        exclusions,
        clarifications,
    }
}
