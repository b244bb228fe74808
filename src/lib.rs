//! mechfab: synthetic dataset generator for mechanical-construction
//! project accounting
//!
//! One seeded pass per project derives a contract, its schedule of
//! values, and every downstream table (labor, deliveries, change
//! orders, RFIs, field notes, progress billing, bid estimate) while
//! preserving the conservation invariants of real construction
//! accounting: SOV lines sum to the contract value exactly, per-line
//! deliveries match material budgets, and cumulative billing is
//! monotone and capped per line.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod fabric;
pub mod logging;
