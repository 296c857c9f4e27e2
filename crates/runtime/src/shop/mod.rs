//! Loadout selection for the initial shopping trip.
//!
//! - [`optimizer`]: beam search over slot-disjoint item sets
//! - [`scoring`]: per-item weapon, sustain and resist estimates

pub mod optimizer;
pub mod scoring;

pub use optimizer::{EquipmentOptimizer, Loadout};
