//! RFI (Request for Information) domain types
//!
//! Field questions to design/owner parties with a tracked response.
//! `date_responded` is present iff the RFI is closed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// RFI status enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RfiStatus {
    Open,
    PendingResponse,
    Closed,
}

impl Default for RfiStatus {
    fn default() -> Self {
        Self::Open
    }
}

/// RFI priority enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RfiPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl Default for RfiPriority {
    fn default() -> Self {
        Self::Medium
    }
}

/// RFI entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rfi {
    pub project_id: String,
    pub rfi_number: String,
    pub date_submitted: NaiveDate,
    pub subject: String,
    pub submitted_by: String,
    pub assigned_to: String,
    pub priority: RfiPriority,
    pub status: RfiStatus,
    pub date_required: NaiveDate,
    pub date_responded: Option<NaiveDate>,
    pub response_summary: Option<String>,
    pub cost_impact: bool,
    pub schedule_impact: bool,
}
