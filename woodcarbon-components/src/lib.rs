//! Components and simulator for the carbon balance of timber buildings.
//!
//! [`simulate`] compares the CO₂ taken up by a managed forest with the CO₂
//! embodied in a timber building under different end-of-life policies.
//! [`simulate_product_pool`] runs the simpler harvested wood product model.

pub mod components;
pub mod python;
pub mod simulator;

pub use components::{simulate_product_pool, ProductPoolParameters, ProductPoolResult};
pub use simulator::{simulate, SimulationResult, YearRecord};
