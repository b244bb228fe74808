//! Progress billing domain types
//!
//! Monthly draw applications against the SOV. Cumulative billing is
//! non-decreasing across applications and each line's total billed
//! never exceeds its scheduled value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Cents;

/// Retention fraction withheld from every payment.
pub const RETENTION_PCT: f64 = 0.10;

/// Application payment status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Paid,
    Approved,
    Pending,
}

impl Default for ApplicationStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// One SOV line's slice of a billing application. Amounts are
/// cumulative-aware: `total_billed = previous_billed + this_period`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingLineItem {
    pub sov_line_id: String,
    pub description: String,
    pub scheduled_value: Cents,
    pub previous_billed: Cents,
    pub this_period: Cents,
    pub total_billed: Cents,
    pub pct_complete: f64,
    pub balance_to_finish: Cents,
}

/// Billing application entity (one per month with billable progress)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingApplication {
    pub project_id: String,
    pub application_number: u32,
    pub period_end: NaiveDate,
    pub period_total: Cents,
    pub cumulative_billed: Cents,
    pub retention_held: Cents,
    pub net_payment_due: Cents,
    pub status: ApplicationStatus,
    pub payment_date: Option<NaiveDate>,
    pub line_items: Vec<BillingLineItem>,
}
