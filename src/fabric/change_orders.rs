//! Change order generator
//!
//! Count scales with complexity; the reason category sets the sign
//! and scale of the amount (value-engineering credits are negative).
//! Status comes from the submission's age against the dataset's as-of
//! date, so regeneration with the same inputs reproduces statuses.

use chrono::{Duration, NaiveDate};
use rand::prelude::*;

use crate::catalog::{
    CHANGE_ORDER_REASONS, CO_APPROVERS, CO_CONDITIONS, CO_DIMENSIONS, CO_ITEMS, CO_NEW_ITEMS,
    CO_OLD_ITEMS, CO_REQUIREMENTS, CO_SUBMITTERS, TRADES,
};
use crate::domain::money::{round_to_nearest, scale, HUNDRED_DOLLARS};
use crate::domain::{
    ChangeOrder, ChangeOrderStatus, Complexity, Contract, Project, ReasonCategory, SovLine,
};

use super::{pick, Narrative};

fn change_order_count(rng: &mut impl Rng, complexity: Complexity) -> usize {
    match complexity {
        Complexity::Low => rng.gen_range(3..=6),
        Complexity::Medium => rng.gen_range(6..=12),
        Complexity::High => rng.gen_range(10..=20),
    }
}

/// Signed amount as a share of contract value, by reason class.
fn amount_share(rng: &mut impl Rng, reason: ReasonCategory) -> f64 {
    match reason {
        ReasonCategory::ValueEngineering => -rng.gen_range(0.002..0.015),
        ReasonCategory::OwnerRequest | ReasonCategory::ScopeGap => rng.gen_range(0.005..0.04),
        _ => rng.gen_range(0.002..0.025),
    }
}

/// Status distribution by staleness of the submission.
fn assign_status(rng: &mut impl Rng, age_days: i64) -> ChangeOrderStatus {
    use ChangeOrderStatus::*;
    if age_days < 14 {
        *[Pending, UnderReview].choose(rng).unwrap_or(&Pending)
    } else if age_days < 45 {
        *[UnderReview, Approved, Rejected].choose(rng).unwrap_or(&UnderReview)
    } else {
        *[Approved, Approved, Approved, Rejected].choose(rng).unwrap_or(&Approved)
    }
}

pub fn generate_change_orders(
    rng: &mut impl Rng,
    narrative: &impl Narrative,
    project: &Project,
    contract: &Contract,
    sov_lines: &[SovLine],
    as_of: NaiveDate,
) -> Vec<ChangeOrder> {
    let duration_days = i64::from(project.duration_days());
    let count = change_order_count(rng, project.complexity);
    let mut change_orders = Vec::with_capacity(count);

    for i in 0..count {
        let (reason_category, template) =
            CHANGE_ORDER_REASONS[rng.gen_range(0..CHANGE_ORDER_REASONS.len())];

        let amount = round_to_nearest(
            scale(
                contract.original_contract_value,
                amount_share(rng, reason_category),
            ),
            HUNDRED_DOLLARS,
        );

        let date_submitted =
            contract.contract_date + Duration::days(rng.gen_range(30..=duration_days - 30));
        let age_days = (as_of - date_submitted).num_days();
        let status = assign_status(rng, age_days);

        let ctx = [
            ("item", pick(rng, CO_ITEMS).to_string()),
            ("dimension", pick(rng, CO_DIMENSIONS).to_string()),
            ("condition", pick(rng, CO_CONDITIONS).to_string()),
            ("trade", pick(rng, TRADES).to_string()),
            ("requirement", pick(rng, CO_REQUIREMENTS).to_string()),
            ("old_item", pick(rng, CO_OLD_ITEMS).to_string()),
            ("new_item", pick(rng, CO_NEW_ITEMS).to_string()),
        ];
        let description = narrative.render(template, &ctx);

        let related_rfi = if rng.gen_bool(0.6) {
            Some(format!("RFI-{:03}", rng.gen_range(1..=30)))
        } else {
            None
        };

        let affected_count = rng.gen_range(1..=3);
        let affected: Vec<String> = sov_lines
            .choose_multiple(rng, affected_count)
            .map(|l| l.sov_line_id.clone())
            .collect();

        let labor_hours_impact = if amount > 0 {
            rng.gen_range(8..=200)
        } else {
            -rng.gen_range(8..=100)
        };
        let schedule_impact_days = if amount > 0 {
            *[0u8, 0, 0, 0, 2, 5, 7, 14].choose(rng).unwrap_or(&0)
        } else {
            0
        };

        change_orders.push(ChangeOrder {
            project_id: project.id.clone(),
            co_number: format!("CO-{:03}", i + 1),
            date_submitted,
            reason_category,
            description,
            amount,
            status,
            related_rfi,
            affected_sov_lines: affected,
            labor_hours_impact,
            schedule_impact_days,
            submitted_by: pick(rng, CO_SUBMITTERS).to_string(),
            approved_by: CO_APPROVERS[rng.gen_range(0..CO_APPROVERS.len())]
                .map(str::to_string),
        });
    }

    change_orders.sort_by_key(|co| co.date_submitted);
    change_orders
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_roster;
    use crate::fabric::{allocate_sov, synthesize_contract, PhraseBook};
    use rand::rngs::StdRng;

    fn generate(seed: u64, as_of_days: i64) -> Vec<ChangeOrder> {
        let mut rng = StdRng::seed_from_u64(seed);
        let project = default_roster().remove(0);
        let epoch = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let contract = synthesize_contract(&mut rng, &project, epoch);
        let sov = allocate_sov(&mut rng, &project, &contract);
        let as_of = epoch + Duration::days(as_of_days);
        generate_change_orders(&mut rng, &PhraseBook, &project, &contract, &sov, as_of)
    }

    #[test]
    fn credits_only_from_value_engineering() {
        for seed in 0..10 {
            for co in generate(seed, 365) {
                if co.amount < 0 {
                    assert_eq!(co.reason_category, ReasonCategory::ValueEngineering);
                    assert!(co.labor_hours_impact < 0);
                    assert_eq!(co.schedule_impact_days, 0);
                }
                assert_eq!(co.amount % HUNDRED_DOLLARS, 0);
            }
        }
    }

    #[test]
    fn stale_change_orders_are_resolved() {
        // With as-of far past the project, every CO is in the >=45 day
        // bucket: approved or rejected, never pending.
        for co in generate(4, 10 * 365) {
            assert!(matches!(
                co.status,
                ChangeOrderStatus::Approved | ChangeOrderStatus::Rejected
            ));
        }
    }

    #[test]
    fn descriptions_have_no_unfilled_placeholders() {
        for co in generate(8, 365) {
            assert!(!co.description.contains('{'), "{}", co.description);
        }
    }

    #[test]
    fn output_sorted_and_numbered() {
        let cos = generate(2, 365);
        assert!(cos.windows(2).all(|w| w[0].date_submitted <= w[1].date_submitted));
        assert!(cos.iter().any(|c| c.co_number.starts_with("CO-0")));
    }
}
