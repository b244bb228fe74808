//! Free-text templates and vocabulary pools
//!
//! Everything the narrative collaborator needs to render RFI subjects,
//! change-order descriptions, response summaries, and field notes.
//! Placeholders use `{name}` syntax.

use crate::domain::ReasonCategory;

pub const RFI_SUBJECTS: &[&str] = &[
    "Coordination conflict with electrical conduit at grid {grid}",
    "Clarification needed on diffuser layout for {room}",
    "Structural penetration approval required at {location}",
    "Equipment access clearance insufficient per spec",
    "Ductwork routing conflicts with beam at elevation {elev}",
    "Control sequence clarification for {system}",
    "Pipe sleeve size discrepancy at {location}",
    "Seismic bracing requirements for equipment over {weight} lbs",
    "Fire damper location verification needed",
    "Insulation spec clarification for exterior application",
    "VAV box sizing appears undersized for zone CFM",
    "Refrigerant piping routing through {area} - approval needed",
    "Existing conditions differ from drawings at {location}",
    "Thermostat location conflicts with furniture layout",
    "Access panel requirements for concealed valves",
];

pub const RFI_SYSTEMS: &[&str] = &["AHU-1", "CHW Loop", "HW Loop", "Exhaust System", "VAV Zone 3"];

pub const RFI_AREAS: &[&str] = &[
    "mechanical room",
    "ceiling plenum",
    "exterior wall",
    "elevator shaft",
];

pub const RFI_WEIGHTS: &[&str] = &["500", "1000", "2000"];

pub const RFI_RESPONSES: &[&str] = &[
    "Proceed as noted in attached sketch.",
    "Refer to ASI-{asi} for clarification.",
    "Approved as submitted.",
    "Revise per attached markup.",
    "Coordinate with {trade} contractor.",
];

/// Change-order reason templates keyed by category.
pub const CHANGE_ORDER_REASONS: &[(ReasonCategory, &str)] = &[
    (ReasonCategory::OwnerRequest, "Added {item} per owner directive"),
    (ReasonCategory::DesignError, "Drawings showed incorrect {dimension} - field correction required"),
    (ReasonCategory::UnforeseenCondition, "Discovered {condition} not shown on documents"),
    (ReasonCategory::Coordination, "Rerouting required due to {trade} conflict"),
    (ReasonCategory::CodeCompliance, "Inspector required {requirement}"),
    (ReasonCategory::ValueEngineering, "Substitution approved: {old_item} to {new_item}"),
    (ReasonCategory::ScopeGap, "Work not clearly defined in bid documents"),
    (ReasonCategory::Acceleration, "Premium time to maintain schedule"),
];

pub const CO_ITEMS: &[&str] = &["exhaust fan", "VAV boxes", "chilled water piping", "controls points"];
pub const CO_DIMENSIONS: &[&str] = &["duct size", "pipe elevation", "equipment clearance"];
pub const CO_CONDITIONS: &[&str] = &[
    "existing ductwork",
    "abandoned piping",
    "structural conflict",
    "asbestos insulation",
];
pub const CO_REQUIREMENTS: &[&str] = &[
    "additional smoke detectors",
    "seismic upgrades",
    "fire dampers",
    "access panels",
];
pub const CO_OLD_ITEMS: &[&str] = &["Carrier RTU", "Trane chiller", "copper piping"];
pub const CO_NEW_ITEMS: &[&str] = &["Daikin RTU", "York chiller", "steel piping"];

pub const TRADES: &[&str] = &["electrical", "plumbing", "fire protection", "structural"];

pub const DELIVERY_CONDITIONS: &[&str] = &[
    "Good condition",
    "Good condition",
    "Good condition",
    "Minor packaging damage - product OK",
    "Partial shipment - backorder pending",
    "Good condition",
];

pub const FIELD_NOTE_TEMPLATES: &[&str] = &[
    "Crew arrived {time}. Weather: {weather}. {crew_count} workers on site. Focus today: {task}. {observation}",
    "Safety meeting held at start of shift - topic: {safety_topic}. All PPE verified. {work_description}",
    "Received delivery of {material} - {qty} units. {receipt_note}. Staged at {location}.",
    "Met with {trade} foreman re: coordination. {meeting_outcome}. Action items: {actions}",
    "GC weekly meeting - discussed {topics}. Schedule status: {schedule_status}. RFIs pending: {rfi_count}.",
    "Installed {qty} {units} on floor {floor}. {quality_note}. Inspections needed: {inspections}.",
    "Equipment startup for {equipment}. {startup_result}. Punch list items: {punch_items}.",
    "{issue_type} encountered: {issue_description}. Resolution: {resolution}. Impact: {impact}.",
    "Working in {area} - {progress_pct}% complete this zone. Remaining: {remaining_work}.",
    "TAB contractor on site - balancing {system}. Initial readings: {readings}. Adjustments: {adjustments}.",
];

pub const NOTE_TIMES: &[&str] = &["0600", "0630", "0700"];

pub const NOTE_WEATHER: &[&str] = &[
    "Clear, 72F",
    "Partly cloudy, 65F",
    "Rain - indoor work only",
    "Hot, 95F - heat protocol",
    "Cold, 35F",
];

pub const NOTE_TASKS: &[&str] = &[
    "ductwork installation Floor 3",
    "piping rough-in mechanical room",
    "hanging VAV boxes wing B",
    "controls wiring",
    "insulation west side",
    "equipment rigging",
    "startup AHU-2",
    "TAB work zones 1-4",
];

pub const NOTE_OBSERVATIONS: &[&str] = &[
    "Good progress.",
    "Behind schedule due to material delay.",
    "Ahead of plan.",
    "Coordination issues with electrical - resolved on site.",
    "Waiting on RFI response to proceed.",
    "Inspection passed.",
];

pub const SAFETY_TOPICS: &[&str] = &[
    "ladder safety",
    "PPE requirements",
    "fall protection",
    "hot work permits",
    "lockout/tagout",
    "confined space entry",
];

pub const WORK_DESCRIPTIONS: &[&str] = &[
    "Continued ductwork installation per plan.",
    "Completed piping pressure test - passed.",
    "Set 3 VAV boxes, awaiting controls.",
    "Ran refrigerant lines to condensers.",
];

pub const NOTE_MATERIALS: &[&str] = &["sheet metal", "copper piping", "VAV boxes", "RTU", "insulation"];

pub const RECEIPT_NOTES: &[&str] = &["Matched PO", "Short 2 boxes - claim filed", "All accounted for"];

pub const STAGING_LOCATIONS: &[&str] = &[
    "laydown area A",
    "mechanical room",
    "loading dock",
    "floor 3 staging",
];

pub const NOTE_TRADES: &[&str] = &["electrical", "plumbing", "fire protection", "drywall"];

pub const MEETING_OUTCOMES: &[&str] = &[
    "Agreed on sequence for ceiling close-in",
    "Resolved duct routing conflict",
    "Scheduled joint walkthrough Friday",
];

pub const ACTION_ITEMS: &[&str] = &[
    "HVAC to relocate diffuser 6 inches east",
    "FP to adjust sprinkler head locations",
    "Awaiting revised drawings",
];

pub const MEETING_TOPICS: &[&str] = &[
    "schedule recovery, material lead times, inspections",
    "safety incident review, upcoming inspections, manpower",
    "change orders, RFI backlog, coordination",
];

pub const SCHEDULE_STATUSES: &[&str] = &[
    "on track",
    "3 days behind",
    "ahead 2 days",
    "critical - recovery plan in place",
];

pub const INSTALL_UNITS: &[&str] = &["VAV boxes", "diffusers", "LF of duct", "pipe hangers"];

pub const QUALITY_NOTES: &[&str] = &[
    "Passed QC inspection",
    "Minor punch items noted",
    "Rework required grid C-4",
];

pub const INSPECTIONS: &[&str] = &["rough-in Friday", "pressure test Monday", "none"];

pub const EQUIPMENT_TAGS: &[&str] = &["RTU-1", "AHU-2", "Chiller", "Boiler", "FCU bank west"];

pub const STARTUP_RESULTS: &[&str] = &[
    "Successful - all parameters normal",
    "Minor vibration issue - balancing tomorrow",
    "Delayed - controls not ready",
];

pub const PUNCH_ITEMS: &[&str] = &[
    "none",
    "3 minor items",
    "damper actuator adjustment",
    "sensor calibration",
];

pub const ISSUE_TYPES: &[&str] = &[
    "Coordination conflict",
    "Material issue",
    "Design discrepancy",
    "Access issue",
];

pub const ISSUE_DESCRIPTIONS: &[&str] = &[
    "sprinkler head conflicts with diffuser at B-7",
    "wrong size fittings delivered",
    "field conditions don't match drawings",
    "ceiling access restricted by other trade",
];

pub const RESOLUTIONS: &[&str] = &[
    "RFI submitted",
    "Resolved on site with GC",
    "Awaiting engineer response",
    "Workaround implemented",
];

pub const IMPACTS: &[&str] = &["none", "1 day delay", "cost impact TBD", "schedule neutral"];

pub const WORK_AREAS: &[&str] = &["Zone 3", "mechanical room", "penthouse", "basement", "floors 4-6"];

pub const REMAINING_WORK: &[&str] = &[
    "diffusers and connections",
    "insulation and startup",
    "controls terminations",
    "final connections",
];

pub const TAB_SYSTEMS: &[&str] = &[
    "VAV system floor 2",
    "AHU-1 supply",
    "FCU loop",
    "exhaust system",
];

pub const TAB_READINGS: &[&str] = &[
    "CFM within 5% of design",
    "static pressure high",
    "flow low on 3 boxes",
    "all zones balanced",
];

pub const TAB_ADJUSTMENTS: &[&str] = &[
    "sheave change AHU",
    "damper repositioning",
    "none required",
    "VFD reprogramming",
];

pub const WEATHER_LABELS: &[&str] = &["Clear", "Cloudy", "Rain", "Hot", "Cold"];

pub const GRID_LETTERS: &[char] = &['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

pub const BID_ACCESS_ROUTES: &[&str] = &["loading dock", "temporary opening", "roof hatch"];

pub const BID_LABOR_MARKETS: &[&str] = &["union", "open shop"];
