//! Static reference data consumed read-only by the generators
//!
//! SOV templates, crew roles, material categories, firm name pools,
//! phrase templates, and the default project roster. Nothing here is
//! mutated after process start.

pub mod costing;
pub mod crew;
pub mod firms;
pub mod materials;
pub mod phrases;
pub mod roster;
pub mod sov_template;

pub use costing::*;
pub use crew::*;
pub use firms::*;
pub use materials::*;
pub use phrases::*;
pub use roster::*;
pub use sov_template::*;
