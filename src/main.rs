use anyhow::{Context, Result};
use chrono::Utc;

use mechfab::catalog::{default_roster, load_roster};
use mechfab::config::Settings;
use mechfab::export::write_dataset;
use mechfab::fabric::{DatasetFabric, FabricConfig};
use mechfab::logging;

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    // The clock is read exactly once; the generation core only ever
    // sees the resolved date.
    let as_of = settings
        .as_of
        .unwrap_or_else(|| Utc::now().date_naive());

    tracing::info!(
        env = ?settings.env,
        seed = settings.seed,
        epoch = %settings.epoch,
        as_of = %as_of,
        output_dir = %settings.output_dir.display(),
        "Starting mechfab dataset generation"
    );

    let roster = match &settings.roster_path {
        Some(path) => load_roster(path)
            .with_context(|| format!("loading roster from {}", path.display()))?,
        None => default_roster(),
    };

    let config = FabricConfig {
        seed: Some(settings.seed),
        epoch: settings.epoch,
        as_of,
    };
    let dataset = DatasetFabric::new(config).generate(&roster);

    write_dataset(&dataset, &settings.output_dir)
        .with_context(|| format!("writing dataset to {}", settings.output_dir.display()))?;

    let total_value: i64 = dataset
        .contracts
        .iter()
        .map(|c| c.original_contract_value)
        .sum();
    tracing::info!(
        projects = dataset.contracts.len(),
        records = dataset.record_count(),
        total_contract_value_cents = total_value,
        "Generation complete"
    );

    Ok(())
}
