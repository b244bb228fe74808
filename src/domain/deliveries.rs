//! Material delivery domain types
//!
//! Deliveries for one SOV line sum to that line's material budget
//! exactly (in cents); the split across deliveries is random.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::money::Cents;

/// Unit of measure for delivered quantities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Unit {
    Ea,
    Lf,
    Sheet,
}

/// Delivery entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivery {
    pub project_id: String,
    pub delivery_id: Uuid,
    pub date: NaiveDate,
    pub sov_line_id: String,
    pub material_category: String,
    pub item_description: String,
    pub quantity: u32,
    pub unit: Unit,
    pub unit_cost: Cents,
    pub total_cost: Cents,
    pub po_number: String,
    pub vendor: String,
    pub received_by: String,
    pub condition_notes: String,
}
