//! Dataset file emission
//!
//! Incidental I/O: one JSON file per table plus the combined dataset.
//! Billing applications keep their nested line items in the combined
//! file; the flat per-table export carries the line items separately
//! with `project_id` and `application_number` repeated verbatim so
//! downstream joins keep working.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::domain::money::Cents;
use crate::domain::BillingApplication;
use crate::error::FabricError;
use crate::fabric::Dataset;

/// A billing line item flattened out of its application, carrying the
/// foreign keys of the parent record.
#[derive(Debug, Clone, Serialize)]
pub struct FlatBillingLine {
    pub project_id: String,
    pub application_number: u32,
    pub sov_line_id: String,
    pub description: String,
    pub scheduled_value: Cents,
    pub previous_billed: Cents,
    pub this_period: Cents,
    pub total_billed: Cents,
    pub pct_complete: f64,
    pub balance_to_finish: Cents,
}

/// An application header without its nested line items.
#[derive(Debug, Clone, Serialize)]
struct FlatApplication<'a> {
    project_id: &'a str,
    application_number: u32,
    period_end: chrono::NaiveDate,
    period_total: Cents,
    cumulative_billed: Cents,
    retention_held: Cents,
    net_payment_due: Cents,
    status: crate::domain::ApplicationStatus,
    payment_date: Option<chrono::NaiveDate>,
    line_item_count: usize,
}

pub fn flatten_billing_lines(applications: &[BillingApplication]) -> Vec<FlatBillingLine> {
    applications
        .iter()
        .flat_map(|app| {
            app.line_items.iter().map(|li| FlatBillingLine {
                project_id: app.project_id.clone(),
                application_number: app.application_number,
                sov_line_id: li.sov_line_id.clone(),
                description: li.description.clone(),
                scheduled_value: li.scheduled_value,
                previous_billed: li.previous_billed,
                this_period: li.this_period,
                total_billed: li.total_billed,
                pct_complete: li.pct_complete,
                balance_to_finish: li.balance_to_finish,
            })
        })
        .collect()
}

/// Write the combined dataset and one file per table into `out_dir`.
pub fn write_dataset(dataset: &Dataset, out_dir: &Path) -> Result<(), FabricError> {
    fs::create_dir_all(out_dir)?;

    write_table(out_dir, "dataset", dataset)?;
    write_table(out_dir, "contracts", &dataset.contracts)?;
    write_table(out_dir, "sov_lines", &dataset.sov_lines)?;
    write_table(out_dir, "labor_logs", &dataset.labor_logs)?;
    write_table(out_dir, "deliveries", &dataset.deliveries)?;
    write_table(out_dir, "change_orders", &dataset.change_orders)?;
    write_table(out_dir, "rfis", &dataset.rfis)?;
    write_table(out_dir, "field_notes", &dataset.field_notes)?;
    write_table(out_dir, "bid_estimates", &dataset.bid_estimates)?;

    // Nested billing splits into a header table and a line-item table.
    let headers: Vec<FlatApplication> = dataset
        .billing
        .iter()
        .map(|app| FlatApplication {
            project_id: &app.project_id,
            application_number: app.application_number,
            period_end: app.period_end,
            period_total: app.period_total,
            cumulative_billed: app.cumulative_billed,
            retention_held: app.retention_held,
            net_payment_due: app.net_payment_due,
            status: app.status,
            payment_date: app.payment_date,
            line_item_count: app.line_items.len(),
        })
        .collect();
    write_table(out_dir, "billing_applications", &headers)?;
    write_table(
        out_dir,
        "billing_line_items",
        &flatten_billing_lines(&dataset.billing),
    )?;

    tracing::info!(dir = %out_dir.display(), "dataset written");
    Ok(())
}

fn write_table<T: Serialize>(out_dir: &Path, name: &str, value: &T) -> Result<(), FabricError> {
    let path = out_dir.join(format!("{name}.json"));
    let json = serde_json::to_vec_pretty(value)?;
    fs::write(&path, json)?;
    tracing::debug!(file = %path.display(), "table written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_roster;
    use crate::fabric::{DatasetFabric, FabricConfig};

    #[test]
    fn flattened_lines_carry_parent_keys() {
        let roster = default_roster();
        let ds = DatasetFabric::new(FabricConfig::seeded(42)).generate(&roster[..1]);
        let flat = flatten_billing_lines(&ds.billing);
        assert!(!flat.is_empty());

        let nested_total: usize = ds.billing.iter().map(|a| a.line_items.len()).sum();
        assert_eq!(flat.len(), nested_total);
        for line in &flat {
            let parent = ds
                .billing
                .iter()
                .find(|a| {
                    a.project_id == line.project_id
                        && a.application_number == line.application_number
                })
                .expect("parent application exists");
            assert!(parent.line_items.iter().any(|li| li.sov_line_id == line.sov_line_id));
        }
    }
}
