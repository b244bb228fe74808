//! Material catalog
//!
//! Item lists per category and the fixed mapping from SOV line numbers
//! to the category they procure from. Lines outside the map (general
//! conditions, TAB, closeout) take no deliveries.

/// One material category with its representative items.
#[derive(Debug, Clone, Copy)]
pub struct MaterialCategory {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

pub static DUCTWORK: MaterialCategory = MaterialCategory {
    name: "Ductwork",
    items: &[
        "Galvanized Sheet Metal 22ga",
        "Galvanized Sheet Metal 20ga",
        "Flex Duct 8\"",
        "Flex Duct 10\"",
        "Flex Duct 12\"",
        "Spiral Duct 12\"",
        "Spiral Duct 16\"",
        "Spiral Duct 24\"",
        "Duct Sealant",
        "Hanging Hardware",
    ],
};

pub static PIPING: MaterialCategory = MaterialCategory {
    name: "Piping",
    items: &[
        "Copper Type L 1\"",
        "Copper Type L 1.5\"",
        "Copper Type L 2\"",
        "Black Steel Sch40 2\"",
        "Black Steel Sch40 4\"",
        "PVC Sch40 4\"",
        "Pipe Hangers Assorted",
        "Brazing Alloy",
        "Flux",
        "Refrigerant R-410A",
    ],
};

pub static EQUIPMENT: MaterialCategory = MaterialCategory {
    name: "Equipment",
    items: &[
        "RTU 15-Ton",
        "RTU 25-Ton",
        "AHU Custom",
        "Chiller 200-Ton",
        "Boiler 2000MBH",
        "VAV Box 12\"",
        "VAV Box 16\"",
        "FCU 2-Pipe",
        "FCU 4-Pipe",
        "Split System 3-Ton",
    ],
};

pub static CONTROLS: MaterialCategory = MaterialCategory {
    name: "Controls",
    items: &[
        "DDC Controller",
        "VAV Controller",
        "Temp Sensor",
        "Pressure Sensor",
        "Actuator 24V",
        "Damper Motor",
        "Control Valve 1\"",
        "Control Valve 2\"",
        "BACnet Gateway",
        "Touchscreen Interface",
    ],
};

pub static INSULATION: MaterialCategory = MaterialCategory {
    name: "Insulation",
    items: &[
        "Fiberglass Duct Wrap R-8",
        "Fiberglass Duct Liner R-6",
        "Pipe Insulation 1\" Armaflex",
        "Pipe Insulation 2\" Armaflex",
        "Insulation Adhesive",
        "Vapor Barrier Tape",
    ],
};

/// Category procured by a given SOV line, if any.
pub fn category_for_line(line_number: u8) -> Option<&'static MaterialCategory> {
    match line_number {
        3 | 4 => Some(&DUCTWORK),
        5 | 6 => Some(&PIPING),
        7..=9 => Some(&EQUIPMENT),
        10 | 11 => Some(&CONTROLS),
        12 => Some(&INSULATION),
        _ => None,
    }
}
