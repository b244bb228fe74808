//! Schedule-of-values template
//!
//! Fifteen fixed categories with the share of contract value each may
//! draw. Equipment lines flip the labor/material split: they are
//! material-heavy, everything else is labor-heavy.

/// One SOV template category.
#[derive(Debug, Clone, Copy)]
pub struct SovCategory {
    pub code: u8,
    pub description: &'static str,
    /// Inclusive range of the contract-value share drawn for this line.
    pub pct_range: (f64, f64),
    /// Equipment lines carry a material-heavy cost split.
    pub equipment: bool,
}

/// Labor/material split ranges for equipment lines.
pub const EQUIPMENT_LABOR_RANGE: (f64, f64) = (0.15, 0.30);
pub const EQUIPMENT_MATERIAL_RANGE: (f64, f64) = (0.70, 0.85);

/// Labor/material split ranges for all other lines.
pub const TRADE_LABOR_RANGE: (f64, f64) = (0.55, 0.75);
pub const TRADE_MATERIAL_RANGE: (f64, f64) = (0.25, 0.45);

pub static SOV_TEMPLATE: [SovCategory; 15] = [
    SovCategory { code: 1, description: "General Conditions & Project Management", pct_range: (0.06, 0.09), equipment: false },
    SovCategory { code: 2, description: "Submittals & Engineering", pct_range: (0.02, 0.04), equipment: false },
    SovCategory { code: 3, description: "Ductwork - Fabrication", pct_range: (0.08, 0.12), equipment: false },
    SovCategory { code: 4, description: "Ductwork - Installation", pct_range: (0.10, 0.14), equipment: false },
    SovCategory { code: 5, description: "Piping - Hydronic Systems", pct_range: (0.08, 0.12), equipment: false },
    SovCategory { code: 6, description: "Piping - Refrigerant", pct_range: (0.04, 0.07), equipment: false },
    SovCategory { code: 7, description: "Equipment - RTUs/AHUs", pct_range: (0.12, 0.18), equipment: true },
    SovCategory { code: 8, description: "Equipment - Chillers/Boilers", pct_range: (0.08, 0.14), equipment: true },
    SovCategory { code: 9, description: "Equipment - Terminal Units (VAV/FCU)", pct_range: (0.06, 0.10), equipment: true },
    SovCategory { code: 10, description: "Controls - DDC/BAS Installation", pct_range: (0.06, 0.10), equipment: false },
    SovCategory { code: 11, description: "Controls - Programming & Commissioning", pct_range: (0.03, 0.05), equipment: false },
    SovCategory { code: 12, description: "Insulation", pct_range: (0.04, 0.06), equipment: false },
    SovCategory { code: 13, description: "Testing, Adjusting & Balancing (TAB)", pct_range: (0.02, 0.04), equipment: false },
    SovCategory { code: 14, description: "Startup & Commissioning Support", pct_range: (0.02, 0.03), equipment: false },
    SovCategory { code: 15, description: "Closeout Documentation & Training", pct_range: (0.01, 0.02), equipment: false },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_codes_are_sequential() {
        for (i, cat) in SOV_TEMPLATE.iter().enumerate() {
            assert_eq!(cat.code as usize, i + 1);
        }
    }

    #[test]
    fn minimum_shares_leave_no_degenerate_lines() {
        // Even before normalization every category draws at least 1%,
        // which keeps the last line large enough to absorb rounding
        // residue for any roster-range contract value.
        assert!(SOV_TEMPLATE.iter().all(|c| c.pct_range.0 >= 0.01));
    }
}
