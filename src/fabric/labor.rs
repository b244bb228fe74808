//! Labor log generator
//!
//! Walks weekdays across the project duration, sizes the crew by
//! phase, and books each worker-day against one of the SOV lines
//! active in that phase. Labor is informational volume only; nothing
//! here caps it against the line's labor budget.

use chrono::{Datelike, Duration, NaiveDate};
use rand::prelude::*;

use crate::catalog::{CrewRole, CREW_ROLES};
use crate::domain::{Complexity, LaborLogEntry, Project, SovLine};

use super::record_id;

/// Line numbers carrying labor in each stretch of the project.
fn active_line_numbers(phase_pct: f64) -> &'static [u8] {
    if phase_pct < 0.10 {
        &[1, 2]
    } else if phase_pct < 0.30 {
        &[1, 2, 3, 4, 5]
    } else if phase_pct < 0.60 {
        &[1, 3, 4, 5, 6, 7, 8, 9]
    } else if phase_pct < 0.85 {
        &[1, 9, 10, 11, 12]
    } else {
        &[1, 11, 13, 14, 15]
    }
}

fn crew_size(rng: &mut impl Rng, phase_pct: f64, complexity: Complexity) -> usize {
    if phase_pct < 0.15 {
        rng.gen_range(2..=5)
    } else if phase_pct < 0.75 {
        match complexity {
            Complexity::High => rng.gen_range(8..=18),
            _ => rng.gen_range(5..=12),
        }
    } else {
        rng.gen_range(3..=7)
    }
}

pub fn generate_labor_logs(
    rng: &mut impl Rng,
    project: &Project,
    sov_lines: &[SovLine],
    start: NaiveDate,
) -> Vec<LaborLogEntry> {
    let total_workdays = project.duration_workdays();
    let mut logs = Vec::new();

    let mut current = start;
    let mut day_count = 0u32;
    while day_count < total_workdays {
        if current.weekday().number_from_monday() >= 6 {
            current += Duration::days(1);
            continue;
        }

        let phase_pct = day_count as f64 / total_workdays as f64;
        let base_crew = crew_size(rng, phase_pct, project.complexity);

        let numbers = active_line_numbers(phase_pct);
        let mut active: Vec<&SovLine> = sov_lines
            .iter()
            .filter(|l| numbers.contains(&l.line_number))
            .collect();
        if active.is_empty() {
            active.push(&sov_lines[0]);
        }

        // Roster sample first, then duplicate core trades when the day's
        // crew outgrows the role catalog.
        let mut workers: Vec<&CrewRole> = CREW_ROLES
            .choose_multiple(rng, base_crew.min(CREW_ROLES.len()))
            .collect();
        if base_crew > CREW_ROLES.len() {
            let core: Vec<&CrewRole> = CREW_ROLES.iter().filter(|r| r.is_core_trade()).collect();
            for _ in 0..base_crew - CREW_ROLES.len() {
                workers.push(core[rng.gen_range(0..core.len())]);
            }
        }

        for worker in workers {
            let assigned = active[rng.gen_range(0..active.len())];

            let (hours_st, hours_ot) = if rng.gen_bool(0.15) {
                (8, *[2u8, 4].choose(rng).unwrap_or(&2))
            } else if rng.gen_bool(0.10) {
                (*[4u8, 6, 10].choose(rng).unwrap_or(&8), 0)
            } else {
                (8, 0)
            };

            logs.push(LaborLogEntry {
                project_id: project.id.clone(),
                log_id: record_id(rng),
                date: current,
                employee_id: format!("EMP-{}", rng.gen_range(1000..=9999)),
                role: worker.role.to_string(),
                sov_line_id: assigned.sov_line_id.clone(),
                hours_st,
                hours_ot,
                hourly_rate: worker.hourly_rate,
                burden_multiplier: worker.burden_multiplier,
                work_area: format!("Floor {}", rng.gen_range(1..=project.floors)),
                cost_code: assigned.line_number,
            });
        }

        current += Duration::days(1);
        day_count += 1;
    }

    logs
}
