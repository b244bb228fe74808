//! Contract domain types
//!
//! One contract per project. Its value anchors every downstream
//! allocation: SOV lines sum to it exactly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Cents;

/// Contract entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    pub project_id: String,
    pub project_name: String,
    pub original_contract_value: Cents,
    pub contract_date: NaiveDate,
    pub substantial_completion_date: NaiveDate,
    pub retention_pct: f64,
    pub payment_terms: String,
    pub gc_name: String,
    pub architect: String,
    pub engineer_of_record: String,
}
