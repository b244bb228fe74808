//! Project domain types
//!
//! Projects are the immutable inputs to generation: physical and
//! typological attributes from which everything downstream is derived.

use serde::{Deserialize, Serialize};

/// Building typology, drives the base cost per square foot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Healthcare,
    CommercialOffice,
    K12Education,
    DataCenter,
    MultifamilyResidential,
}

/// Project complexity tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Default for Complexity {
    fn default() -> Self {
        Self::Medium
    }
}

impl Complexity {
    /// Contract value multiplier applied on top of the per-type base cost.
    pub fn cost_multiplier(&self) -> f64 {
        match self {
            Self::Low => 0.9,
            Self::Medium => 1.0,
            Self::High => 1.15,
        }
    }
}

/// Project entity (immutable generation input)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub project_type: ProjectType,
    pub location: String,
    pub sq_ft: u32,
    pub floors: u32,
    pub duration_months: u32,
    #[serde(default)]
    pub complexity: Complexity,
}

impl Project {
    /// Working days over the project duration (~22 per month).
    pub fn duration_workdays(&self) -> u32 {
        self.duration_months * 22
    }

    /// Calendar days over the project duration (30-day months).
    pub fn duration_days(&self) -> u32 {
        self.duration_months * 30
    }
}
