//! Default project roster
//!
//! Five representative projects spanning the supported typologies.
//! An external JSON roster (same shape) can replace this via settings.

use std::fs;
use std::path::Path;

use crate::domain::{Complexity, Project, ProjectType};
use crate::error::FabricError;

/// Load a replacement roster from a JSON file.
pub fn load_roster(path: &Path) -> Result<Vec<Project>, FabricError> {
    let raw = fs::read_to_string(path).map_err(|source| FabricError::RosterRead {
        path: path.to_path_buf(),
        source,
    })?;
    let roster: Vec<Project> =
        serde_json::from_str(&raw).map_err(|source| FabricError::RosterParse {
            path: path.to_path_buf(),
            source,
        })?;
    if roster.is_empty() {
        return Err(FabricError::EmptyRoster(path.to_path_buf()));
    }
    Ok(roster)
}

pub fn default_roster() -> Vec<Project> {
    vec![
        Project {
            id: "PRJ-2024-001".into(),
            name: "Mercy General Hospital - HVAC Modernization".into(),
            project_type: ProjectType::Healthcare,
            location: "Phoenix, AZ".into(),
            sq_ft: 285_000,
            floors: 6,
            duration_months: 18,
            complexity: Complexity::High,
        },
        Project {
            id: "PRJ-2024-002".into(),
            name: "Riverside Office Tower - Core & Shell MEP".into(),
            project_type: ProjectType::CommercialOffice,
            location: "Denver, CO".into(),
            sq_ft: 420_000,
            floors: 22,
            duration_months: 24,
            complexity: Complexity::High,
        },
        Project {
            id: "PRJ-2024-003".into(),
            name: "Greenfield Elementary School - New Construction".into(),
            project_type: ProjectType::K12Education,
            location: "Austin, TX".into(),
            sq_ft: 95_000,
            floors: 2,
            duration_months: 14,
            complexity: Complexity::Medium,
        },
        Project {
            id: "PRJ-2024-004".into(),
            name: "Summit Data Center - Phase 2 Expansion".into(),
            project_type: ProjectType::DataCenter,
            location: "Ashburn, VA".into(),
            sq_ft: 65_000,
            floors: 1,
            duration_months: 10,
            complexity: Complexity::High,
        },
        Project {
            id: "PRJ-2024-005".into(),
            name: "Harbor View Condominiums - 3 Buildings".into(),
            project_type: ProjectType::MultifamilyResidential,
            location: "Seattle, WA".into(),
            sq_ft: 340_000,
            floors: 8,
            duration_months: 20,
            complexity: Complexity::Medium,
        },
    ]
}
