//! Material delivery generator
//!
//! Each material-bearing SOV line gets 3-8 deliveries whose costs are
//! a weight-normalized split of the line's material budget, so the
//! per-line delivery total matches the budget to the cent. Delivery
//! timing leans early for early SOV lines, mimicking procurement lead
//! times.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::catalog::{category_for_line, DELIVERY_CONDITIONS, FIELD_STAFF, VENDORS};
use crate::domain::money::Cents;
use crate::domain::{Delivery, Project, SovLine, Unit};

use super::{pick, record_id};

pub fn generate_deliveries(
    rng: &mut impl Rng,
    project: &Project,
    sov_lines: &[SovLine],
    start: NaiveDate,
) -> Vec<Delivery> {
    let duration_days = i64::from(project.duration_days());
    let mut deliveries = Vec::new();

    for line in sov_lines {
        let Some(category) = category_for_line(line.line_number) else {
            continue;
        };

        let budget = line.material_budget();
        let amounts = split_budget(rng, budget);

        for amount in amounts {
            let day_offset = delivery_day_offset(rng, line.line_number, duration_days);
            let item = pick(rng, category.items);
            let (quantity, unit) = quantity_for_item(rng, item);

            deliveries.push(Delivery {
                project_id: project.id.clone(),
                delivery_id: record_id(rng),
                date: start + Duration::days(day_offset),
                sov_line_id: line.sov_line_id.clone(),
                material_category: category.name.to_string(),
                item_description: item.to_string(),
                quantity,
                unit,
                unit_cost: (amount as f64 / quantity as f64).round() as Cents,
                total_cost: amount,
                po_number: format!("PO-{}", rng.gen_range(10000..=99999)),
                vendor: pick(rng, VENDORS).to_string(),
                received_by: pick(rng, FIELD_STAFF).to_string(),
                condition_notes: pick(rng, DELIVERY_CONDITIONS).to_string(),
            });
        }
    }

    deliveries.sort_by_key(|d| d.date);
    deliveries
}

/// Split the budget across 3-8 deliveries with uniform random weights.
/// The final share absorbs the cent-rounding residual (clamped at zero
/// for degenerate budgets) so the split conserves the budget exactly.
fn split_budget(rng: &mut impl Rng, budget: Cents) -> Vec<Cents> {
    let count = rng.gen_range(3..=8);
    let weights: Vec<f64> = (0..count).map(|_| rng.gen::<f64>()).collect();
    let total: f64 = weights.iter().sum();

    let mut amounts: Vec<Cents> = weights[..count - 1]
        .iter()
        .map(|w| (budget as f64 * w / total).round() as Cents)
        .collect();
    let allocated: Cents = amounts.iter().sum();
    amounts.push((budget - allocated).max(0));
    amounts
}

/// Procurement window by SOV phase: early lines deliver early.
fn delivery_day_offset(rng: &mut impl Rng, line_number: u8, duration_days: i64) -> i64 {
    match line_number {
        0..=4 => rng.gen_range(15..=(duration_days as f64 * 0.4) as i64),
        5..=9 => rng.gen_range(
            (duration_days as f64 * 0.15) as i64..=(duration_days as f64 * 0.7) as i64,
        ),
        _ => rng.gen_range(
            (duration_days as f64 * 0.4) as i64..=(duration_days as f64 * 0.9) as i64,
        ),
    }
}

/// Quantity and unit of measure keyed off the item description.
fn quantity_for_item(rng: &mut impl Rng, item: &str) -> (u32, Unit) {
    if ["RTU", "Chiller", "Boiler", "AHU"].iter().any(|k| item.contains(k)) {
        (rng.gen_range(1..=4), Unit::Ea)
    } else if item.contains("Sheet Metal") {
        (rng.gen_range(20..=100), Unit::Sheet)
    } else if item.contains("Duct") {
        (rng.gen_range(50..=500), Unit::Lf)
    } else if ["Pipe", "Copper", "Steel"].iter().any(|k| item.contains(k)) {
        (rng.gen_range(100..=1000), Unit::Lf)
    } else if ["VAV", "FCU"].iter().any(|k| item.contains(k)) {
        (rng.gen_range(5..=40), Unit::Ea)
    } else if ["Controller", "Sensor", "Actuator"].iter().any(|k| item.contains(k)) {
        (rng.gen_range(10..=100), Unit::Ea)
    } else {
        (rng.gen_range(5..=50), Unit::Ea)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_roster;
    use crate::fabric::{allocate_sov, synthesize_contract};
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashMap;

    fn fixture(seed: u64) -> (Project, Vec<SovLine>, NaiveDate) {
        let mut rng = StdRng::seed_from_u64(seed);
        let project = default_roster().remove(0);
        let epoch = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let contract = synthesize_contract(&mut rng, &project, epoch);
        let sov = allocate_sov(&mut rng, &project, &contract);
        let start = contract.contract_date;
        (project, sov, start)
    }

    #[test]
    fn deliveries_conserve_each_material_budget() {
        let (project, sov, start) = fixture(11);
        let mut rng = StdRng::seed_from_u64(11);
        let deliveries = generate_deliveries(&mut rng, &project, &sov, start);

        let mut per_line: HashMap<&str, Cents> = HashMap::new();
        for d in &deliveries {
            *per_line.entry(d.sov_line_id.as_str()).or_default() += d.total_cost;
        }
        for line in &sov {
            if category_for_line(line.line_number).is_some() {
                assert_eq!(per_line[line.sov_line_id.as_str()], line.material_budget());
            } else {
                assert!(!per_line.contains_key(line.sov_line_id.as_str()));
            }
        }
    }

    #[test]
    fn split_budget_is_exact_and_sized() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let budget = rng.gen_range(50_000..50_000_000);
            let amounts = split_budget(&mut rng, budget);
            assert!((3..=8).contains(&amounts.len()));
            assert_eq!(amounts.iter().sum::<Cents>(), budget);
        }
    }

    #[test]
    fn output_is_sorted_by_date() {
        let (project, sov, start) = fixture(5);
        let mut rng = StdRng::seed_from_u64(5);
        let deliveries = generate_deliveries(&mut rng, &project, &sov, start);
        assert!(deliveries.windows(2).all(|w| w[0].date <= w[1].date));
    }
}
