//! Per-typology cost ranges for contract synthesis

use crate::domain::ProjectType;

/// Mechanical cost per square foot, in dollars, by building type.
pub fn cost_per_sqft_range(project_type: ProjectType) -> (f64, f64) {
    match project_type {
        ProjectType::Healthcare => (85.0, 120.0),
        ProjectType::CommercialOffice => (45.0, 65.0),
        ProjectType::K12Education => (55.0, 75.0),
        ProjectType::DataCenter => (180.0, 280.0),
        ProjectType::MultifamilyResidential => (35.0, 50.0),
    }
}
