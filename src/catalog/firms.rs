//! Name pools for parties appearing on project records

pub const GENERAL_CONTRACTORS: &[&str] = &[
    "Turner Construction",
    "DPR Construction",
    "Skanska USA",
    "JE Dunn",
    "Mortenson",
];

pub const ARCHITECTS: &[&str] = &["Gensler", "HOK", "Perkins&Will", "HKS", "SmithGroup"];

pub const ENGINEERS_OF_RECORD: &[&str] = &[
    "WSP",
    "ARUP",
    "Syska Hennessy",
    "Henderson Engineers",
    "AEI",
];

pub const VENDORS: &[&str] = &[
    "Ferguson Supply",
    "Winsupply",
    "RE Michel",
    "ACR Group",
    "Carrier Enterprise",
    "Johnstone Supply",
];

pub const FIELD_STAFF: &[&str] = &[
    "J. Martinez",
    "K. Thompson",
    "R. Williams",
    "M. Chen",
    "D. Patel",
];

pub const CO_SUBMITTERS: &[&str] = &["J. Martinez", "K. Thompson", "R. Williams"];

pub const CO_APPROVERS: &[Option<&str>] = &[Some("Project Manager"), Some("Owner Rep"), None];

pub const RFI_SUBMITTERS: &[&str] = &[
    "J. Martinez - Project Manager",
    "K. Thompson - Foreman",
    "R. Williams - Engineer",
];

pub const RFI_ASSIGNEES: &[&str] = &[
    "Architect",
    "MEP Engineer",
    "Structural Engineer",
    "Owner",
];

pub const NOTE_AUTHORS: &[&str] = &["J. Martinez", "K. Thompson", "R. Williams", "M. Chen"];

pub const ESTIMATORS: &[&str] = &["S. Johnson", "M. Rodriguez", "T. Wilson"];

pub const EQUIPMENT_VENDORS: &[&str] = &["Carrier", "Trane", "Daikin"];

pub const CONTROLS_VENDORS: &[&str] = &["Siemens", "Johnson Controls", "Honeywell"];
