//! Contract synthesizer
//!
//! Derives the contract value from the project's physical attributes:
//! area times a per-typology $/sqft draw, scaled by complexity and
//! rounded to the nearest $1,000. That value anchors every downstream
//! allocation.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::catalog::{cost_per_sqft_range, ARCHITECTS, ENGINEERS_OF_RECORD, GENERAL_CONTRACTORS};
use crate::domain::money::{cents_from_dollars, round_to_nearest, THOUSAND_DOLLARS};
use crate::domain::{Contract, Project, RETENTION_PCT};

use super::pick;

pub fn synthesize_contract(rng: &mut impl Rng, project: &Project, epoch: NaiveDate) -> Contract {
    let (low, high) = cost_per_sqft_range(project.project_type);
    let cost_per_sqft = rng.gen_range(low..high);
    let base_dollars =
        project.sq_ft as f64 * cost_per_sqft * project.complexity.cost_multiplier();
    let value = round_to_nearest(cents_from_dollars(base_dollars), THOUSAND_DOLLARS);

    let contract_date = epoch + Duration::days(rng.gen_range(0..=90));
    // Completion jitter is drawn independently of the contract date.
    let completion = epoch
        + Duration::days(rng.gen_range(0..=90) + i64::from(project.duration_months) * 30);

    Contract {
        project_id: project.id.clone(),
        project_name: project.name.clone(),
        original_contract_value: value,
        contract_date,
        substantial_completion_date: completion,
        retention_pct: RETENTION_PCT,
        payment_terms: "Net 30".to_string(),
        gc_name: pick(rng, GENERAL_CONTRACTORS).to_string(),
        architect: pick(rng, ARCHITECTS).to_string(),
        engineer_of_record: pick(rng, ENGINEERS_OF_RECORD).to_string(),
    }
}
