//! RFI generator
//!
//! Count scales with complexity. Response delay is drawn from a
//! weighted discrete distribution; an RFI is closed iff a delay was
//! drawn, which keeps `date_responded` present exactly on closed
//! records.

use chrono::{Duration, NaiveDate};
use rand::prelude::*;

use crate::catalog::{
    GRID_LETTERS, RFI_AREAS, RFI_ASSIGNEES, RFI_RESPONSES, RFI_SUBJECTS, RFI_SUBMITTERS,
    RFI_SYSTEMS, RFI_WEIGHTS, TRADES,
};
use crate::domain::{Complexity, Project, Rfi, RfiPriority, RfiStatus};

use super::{pick, Narrative};

/// Response delay in days with its draw weight; `None` never responds.
const RESPONSE_DELAYS: &[(Option<i64>, u32)] = &[
    (Some(3), 15),
    (Some(5), 25),
    (Some(7), 25),
    (Some(10), 15),
    (Some(14), 10),
    (Some(21), 5),
    (None, 5),
];

const PRIORITY_WEIGHTS: &[(RfiPriority, u32)] = &[
    (RfiPriority::Low, 20),
    (RfiPriority::Medium, 45),
    (RfiPriority::High, 25),
    (RfiPriority::Critical, 10),
];

fn rfi_count(rng: &mut impl Rng, complexity: Complexity) -> usize {
    match complexity {
        Complexity::Low => rng.gen_range(15..=30),
        Complexity::Medium => rng.gen_range(30..=60),
        Complexity::High => rng.gen_range(50..=100),
    }
}

pub fn generate_rfis(
    rng: &mut impl Rng,
    narrative: &impl Narrative,
    project: &Project,
    start: NaiveDate,
) -> Vec<Rfi> {
    let duration_days = i64::from(project.duration_days());
    let count = rfi_count(rng, project.complexity);
    let mut rfis = Vec::with_capacity(count);

    for i in 0..count {
        let date_submitted = start + Duration::days(rng.gen_range(14..=duration_days - 14));

        let delay = RESPONSE_DELAYS
            .choose_weighted(rng, |(_, w)| *w)
            .map(|(d, _)| *d)
            .unwrap_or(None);
        let date_responded = delay.map(|d| date_submitted + Duration::days(d));

        let grid = format!(
            "{}-{}",
            GRID_LETTERS[rng.gen_range(0..GRID_LETTERS.len())],
            rng.gen_range(1..=12)
        );
        let location = format!(
            "Floor {}, Grid {}-{}",
            rng.gen_range(1..=project.floors),
            GRID_LETTERS[rng.gen_range(0..GRID_LETTERS.len())],
            rng.gen_range(1..=12)
        );
        let ctx = [
            ("grid", grid),
            ("room", format!("Room {}", rng.gen_range(100..=600))),
            ("location", location),
            ("elev", format!("+{}'-0\"", rng.gen_range(10..=50))),
            ("system", pick(rng, RFI_SYSTEMS).to_string()),
            ("area", pick(rng, RFI_AREAS).to_string()),
            ("weight", pick(rng, RFI_WEIGHTS).to_string()),
        ];
        let subject = narrative.render(pick(rng, RFI_SUBJECTS), &ctx);

        let status = if date_responded.is_some() {
            RfiStatus::Closed
        } else {
            *[RfiStatus::Open, RfiStatus::PendingResponse]
                .choose(rng)
                .unwrap_or(&RfiStatus::Open)
        };

        let response_summary = if date_responded.is_some() {
            let response_ctx = [
                ("asi", rng.gen_range(1..=20).to_string()),
                ("trade", pick(rng, TRADES).to_string()),
            ];
            Some(narrative.render(pick(rng, RFI_RESPONSES), &response_ctx))
        } else {
            None
        };

        let priority = PRIORITY_WEIGHTS
            .choose_weighted(rng, |(_, w)| *w)
            .map(|(p, _)| *p)
            .unwrap_or(RfiPriority::Medium);

        rfis.push(Rfi {
            project_id: project.id.clone(),
            rfi_number: format!("RFI-{:03}", i + 1),
            date_submitted,
            subject,
            submitted_by: pick(rng, RFI_SUBMITTERS).to_string(),
            assigned_to: pick(rng, RFI_ASSIGNEES).to_string(),
            priority,
            status,
            date_required: date_submitted + Duration::days(rng.gen_range(7..=21)),
            date_responded,
            response_summary,
            cost_impact: rng.gen_bool(0.25),
            schedule_impact: rng.gen_bool(0.20),
        });
    }

    rfis.sort_by_key(|r| r.date_submitted);
    rfis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_roster;
    use crate::fabric::PhraseBook;
    use rand::rngs::StdRng;

    fn generate(seed: u64) -> Vec<Rfi> {
        let mut rng = StdRng::seed_from_u64(seed);
        let project = default_roster().remove(0);
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        generate_rfis(&mut rng, &PhraseBook, &project, start)
    }

    #[test]
    fn closed_iff_responded() {
        for rfi in generate(42) {
            match rfi.status {
                RfiStatus::Closed => {
                    assert!(rfi.date_responded.is_some());
                    assert!(rfi.response_summary.is_some());
                }
                _ => {
                    assert!(rfi.date_responded.is_none());
                    assert!(rfi.response_summary.is_none());
                }
            }
        }
    }

    #[test]
    fn response_dates_follow_submission() {
        for rfi in generate(1) {
            if let Some(responded) = rfi.date_responded {
                assert!(responded > rfi.date_submitted);
            }
            assert!(rfi.date_required > rfi.date_submitted);
        }
    }

    #[test]
    fn subjects_render_clean() {
        for rfi in generate(5) {
            assert!(!rfi.subject.contains('{'), "{}", rfi.subject);
        }
    }

    #[test]
    fn high_complexity_yields_more_rfis() {
        let counts: Vec<usize> = (0..5).map(|s| generate(s).len()).collect();
        // Project 1 is high complexity: 50-100 RFIs.
        assert!(counts.iter().all(|&c| (50..=100).contains(&c)));
    }
}
