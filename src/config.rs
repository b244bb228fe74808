use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,

    /// Random seed for the generation run.
    pub seed: u64,

    /// Directory the dataset files are written to.
    pub output_dir: PathBuf,

    /// First day of the contracting program.
    pub epoch: NaiveDate,

    /// Snapshot date for change-order staleness. Unset means "now",
    /// resolved once at startup.
    pub as_of: Option<NaiveDate>,

    /// Optional JSON roster replacing the built-in projects.
    pub roster_path: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));

        let seed = env::var("MECHFAB_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(42);

        let output_dir = env::var("MECHFAB_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("dataset"));

        let epoch = match env::var("MECHFAB_EPOCH") {
            Ok(s) => s
                .parse()
                .with_context(|| format!("MECHFAB_EPOCH is not an ISO date: {s}"))?,
            Err(_) => NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid default epoch"),
        };

        let as_of = match env::var("MECHFAB_AS_OF") {
            Ok(s) => Some(
                s.parse()
                    .with_context(|| format!("MECHFAB_AS_OF is not an ISO date: {s}"))?,
            ),
            Err(_) => None,
        };

        let roster_path = env::var("MECHFAB_ROSTER").ok().map(PathBuf::from);

        Ok(Settings {
            env,
            seed,
            output_dir,
            epoch,
            as_of,
            roster_path,
        })
    }
}
