//! Field note generator
//!
//! About 70% of workdays get a daily report rendered from a template.
//! The full vocabulary context is sampled for every note regardless of
//! which template is chosen, so note richness does not depend on
//! template order.

use chrono::{Datelike, Duration, NaiveDate};
use rand::prelude::*;

use crate::catalog::{
    ACTION_ITEMS, EQUIPMENT_TAGS, FIELD_NOTE_TEMPLATES, IMPACTS, INSPECTIONS, INSTALL_UNITS,
    ISSUE_DESCRIPTIONS, ISSUE_TYPES, MEETING_OUTCOMES, MEETING_TOPICS, NOTE_AUTHORS,
    NOTE_MATERIALS, NOTE_OBSERVATIONS, NOTE_TASKS, NOTE_TIMES, NOTE_TRADES, NOTE_WEATHER,
    PUNCH_ITEMS, QUALITY_NOTES, RECEIPT_NOTES, REMAINING_WORK, RESOLUTIONS, SAFETY_TOPICS,
    SCHEDULE_STATUSES, STAGING_LOCATIONS, STARTUP_RESULTS, TAB_ADJUSTMENTS, TAB_READINGS,
    TAB_SYSTEMS, WEATHER_LABELS, WORK_AREAS, WORK_DESCRIPTIONS,
};
use crate::domain::{FieldNote, NoteType, Project};

use super::{pick, record_id, Narrative};

const NOTE_TYPES: [NoteType; 5] = [
    NoteType::DailyReport,
    NoteType::SafetyLog,
    NoteType::CoordinationNote,
    NoteType::InspectionNote,
    NoteType::IssueLog,
];

pub fn generate_field_notes(
    rng: &mut impl Rng,
    narrative: &impl Narrative,
    project: &Project,
    start: NaiveDate,
) -> Vec<FieldNote> {
    let total_workdays = project.duration_workdays();
    let mut notes = Vec::new();

    let mut current = start;
    let mut day_count = 0u32;
    while day_count < total_workdays {
        if current.weekday().number_from_monday() >= 6 {
            current += Duration::days(1);
            continue;
        }

        if rng.gen_bool(0.7) {
            let template = pick(rng, FIELD_NOTE_TEMPLATES);
            let ctx = note_context(rng, project);
            let content = narrative.render(template, &ctx);

            notes.push(FieldNote {
                project_id: project.id.clone(),
                note_id: record_id(rng),
                date: current,
                author: pick(rng, NOTE_AUTHORS).to_string(),
                note_type: *NOTE_TYPES.choose(rng).unwrap_or(&NoteType::DailyReport),
                content,
                photos_attached: rng.gen_range(0..=5),
                weather: pick(rng, WEATHER_LABELS).to_string(),
                temp_high: rng.gen_range(55..=100),
                temp_low: rng.gen_range(35..=75),
            });
        }

        current += Duration::days(1);
        day_count += 1;
    }

    notes
}

fn note_context(rng: &mut impl Rng, project: &Project) -> Vec<(&'static str, String)> {
    vec![
        ("time", pick(rng, NOTE_TIMES).to_string()),
        ("weather", pick(rng, NOTE_WEATHER).to_string()),
        ("crew_count", rng.gen_range(4..=16).to_string()),
        ("task", pick(rng, NOTE_TASKS).to_string()),
        ("observation", pick(rng, NOTE_OBSERVATIONS).to_string()),
        ("safety_topic", pick(rng, SAFETY_TOPICS).to_string()),
        ("work_description", pick(rng, WORK_DESCRIPTIONS).to_string()),
        ("material", pick(rng, NOTE_MATERIALS).to_string()),
        ("qty", rng.gen_range(10..=200).to_string()),
        ("receipt_note", pick(rng, RECEIPT_NOTES).to_string()),
        ("location", pick(rng, STAGING_LOCATIONS).to_string()),
        ("trade", pick(rng, NOTE_TRADES).to_string()),
        ("meeting_outcome", pick(rng, MEETING_OUTCOMES).to_string()),
        ("actions", pick(rng, ACTION_ITEMS).to_string()),
        ("topics", pick(rng, MEETING_TOPICS).to_string()),
        ("schedule_status", pick(rng, SCHEDULE_STATUSES).to_string()),
        ("rfi_count", rng.gen_range(2..=15).to_string()),
        ("units", pick(rng, INSTALL_UNITS).to_string()),
        ("floor", rng.gen_range(1..=project.floors).to_string()),
        ("quality_note", pick(rng, QUALITY_NOTES).to_string()),
        ("inspections", pick(rng, INSPECTIONS).to_string()),
        ("equipment", pick(rng, EQUIPMENT_TAGS).to_string()),
        ("startup_result", pick(rng, STARTUP_RESULTS).to_string()),
        ("punch_items", pick(rng, PUNCH_ITEMS).to_string()),
        ("issue_type", pick(rng, ISSUE_TYPES).to_string()),
        ("issue_description", pick(rng, ISSUE_DESCRIPTIONS).to_string()),
        ("resolution", pick(rng, RESOLUTIONS).to_string()),
        ("impact", pick(rng, IMPACTS).to_string()),
        ("area", pick(rng, WORK_AREAS).to_string()),
        ("progress_pct", rng.gen_range(40..=95).to_string()),
        ("remaining_work", pick(rng, REMAINING_WORK).to_string()),
        ("system", pick(rng, TAB_SYSTEMS).to_string()),
        ("readings", pick(rng, TAB_READINGS).to_string()),
        ("adjustments", pick(rng, TAB_ADJUSTMENTS).to_string()),
    ]
}
