//! Field note domain types
//!
//! Unstructured daily reports from the field, rendered from templates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Note classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoteType {
    DailyReport,
    SafetyLog,
    CoordinationNote,
    InspectionNote,
    IssueLog,
}

/// Field note entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldNote {
    pub project_id: String,
    pub note_id: Uuid,
    pub date: NaiveDate,
    pub author: String,
    pub note_type: NoteType,
    pub content: String,
    pub photos_attached: u8,
    pub weather: String,
    pub temp_high: i32,
    pub temp_low: i32,
}
