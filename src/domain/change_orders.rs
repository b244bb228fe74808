//! Change order domain types
//!
//! Contract modifications with signed amounts (credits negative).
//! Status is assigned once at generation time from the submission
//! date's age relative to the dataset's as-of date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Cents;

/// Change order status enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChangeOrderStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

impl Default for ChangeOrderStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Reason classification, drives the sign and scale of the amount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCategory {
    OwnerRequest,
    DesignError,
    UnforeseenCondition,
    Coordination,
    CodeCompliance,
    ValueEngineering,
    ScopeGap,
    Acceleration,
}

/// Change order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeOrder {
    pub project_id: String,
    pub co_number: String,
    pub date_submitted: NaiveDate,
    pub reason_category: ReasonCategory,
    pub description: String,
    /// Signed amount; value-engineering credits are negative.
    pub amount: Cents,
    pub status: ChangeOrderStatus,
    pub related_rfi: Option<String>,
    pub affected_sov_lines: Vec<String>,
    pub labor_hours_impact: i32,
    pub schedule_impact_days: u8,
    pub submitted_by: String,
    pub approved_by: Option<String>,
}
